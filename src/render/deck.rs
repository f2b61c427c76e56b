// render/deck.rs
use std::fs;
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

use crate::domain::CombinedRecord;
use crate::errors::PipelineResult;

const DECK_JS: &str = "https://unpkg.com/deck.gl@8.9.35/dist.min.js";
const MAPLIBRE_JS: &str = "https://unpkg.com/maplibre-gl@3.6.2/dist/maplibre-gl.js";
const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@3.6.2/dist/maplibre-gl.css";
const MAP_STYLE: &str = "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";

const ELEVATION_SCALE: f64 = 0.0001;
const COLUMN_RADIUS: f64 = 15.0;
const FILL_ALPHA: u8 = 140;

pub const TOOLTIP: &str = "{buildingname}\nMedian Price: {medianpredprice_formatted}\nUnits: {numberofunits}\nFloors: {numberoffloors}\nRegion: {region}, {district}\nBuilt: {built}\nTransactions: {transactionscount}";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for ViewState {
    // Kowloon, tilted toward the harbour.
    fn default() -> Self {
        Self {
            longitude: 114.173355,
            latitude: 22.302711,
            zoom: 11.0,
            min_zoom: 10.0,
            max_zoom: 15.0,
            pitch: 40.5,
            bearing: -27.36,
        }
    }
}

// Fills `{field}` placeholders from the hovered row, like the template above.
const BOOT_JS: &str = r#"
const cfg = JSON.parse(document.getElementById('deck-config').textContent);
const fill = (tpl, row) => tpl.replace(/\{(\w+)\}/g, (_, k) => row[k] ?? '');
new deck.DeckGL({
  container: 'deck-container',
  mapStyle: cfg.mapStyle,
  initialViewState: cfg.viewState,
  controller: true,
  layers: [
    new deck.ColumnLayer({
      id: 'prices',
      data: cfg.data,
      getPosition: d => [d.lng, d.lat],
      getElevation: d => d.medianpredprice,
      elevationScale: cfg.elevationScale,
      radius: cfg.radius,
      getFillColor: d => [d.r, d.g, d.b, cfg.alpha],
      pickable: true,
      autoHighlight: true,
    }),
  ],
  getTooltip: ({object}) => object && {text: fill(cfg.tooltip, object)},
});
"#;

/// Everything the page script needs, embedded as one JSON blob.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeckConfig<'a> {
    data: &'a [CombinedRecord],
    view_state: &'a ViewState,
    map_style: &'static str,
    elevation_scale: f64,
    radius: f64,
    alpha: u8,
    tooltip: &'static str,
}

/// JSON safe to drop inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn deck_page(rows: &[CombinedRecord], view: &ViewState) -> serde_json::Result<Markup> {
    let config = script_json(&DeckConfig {
        data: rows,
        view_state: view,
        map_style: MAP_STYLE,
        elevation_scale: ELEVATION_SCALE,
        radius: COLUMN_RADIUS,
        alpha: FILL_ALPHA,
        tooltip: TOOLTIP,
    })?;

    Ok(html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Hong Kong median building prices" }
                script src=(DECK_JS) {}
                script src=(MAPLIBRE_JS) {}
                link rel="stylesheet" href=(MAPLIBRE_CSS);
                style { "body { margin: 0; } #deck-container { width: 100vw; height: 100vh; position: relative; }" }
            }
            body {
                div id="deck-container" {}
                script id="deck-config" type="application/json" { (PreEscaped(config)) }
                script { (PreEscaped(BOOT_JS)) }
            }
        }
    })
}

/// Renders the page and writes it to `path`, replacing any previous run.
pub fn write_deck(rows: &[CombinedRecord], view: &ViewState, path: &Path) -> PipelineResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, deck_page(rows, view)?.into_string())?;
    Ok(())
}
