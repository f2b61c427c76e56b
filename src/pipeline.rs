// pipeline.rs
use tracing::info;

use crate::config::Config;
use crate::domain::{combine, load_districts, Coordinate, CoordinateTable, PriceRecord};
use crate::errors::PipelineResult;
use crate::geocoder::{geocode, GeocodeClient};
use crate::render::{write_deck, ViewState};
use crate::scraper::{collect_prices, persist_prices, PageFetcher};
use crate::store::{JsonFileStore, Store};

/// Row counts at each stage of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub prices: usize,
    pub coordinates: usize,
    pub districts: usize,
    pub combined: usize,
}

/// fetch -> enrich -> join -> render. Both caches are written back before the
/// district file is read, so a later failure still keeps the network work.
pub fn run<F, G>(config: &Config, fetcher: &F, geocoder: &G) -> PipelineResult<RunSummary>
where
    F: PageFetcher,
    G: GeocodeClient,
{
    let price_store: JsonFileStore<usize, PriceRecord> = JsonFileStore::new(&config.prices_path);
    let prices = collect_prices(&price_store, fetcher, config)?;
    persist_prices(&price_store, &prices)?;

    let coordinate_store: JsonFileStore<String, Coordinate> = JsonFileStore::new(&config.coordinates_path);
    let cache: CoordinateTable = coordinate_store.load_all()?.unwrap_or_default();
    let addresses = prices
        .iter()
        .map(|p| p.buildingaddress.as_str())
        .filter(|a| !a.trim().is_empty());
    let coordinates = geocode(addresses, &cache, geocoder, &config.region_hint);
    coordinate_store.persist_all(&coordinates)?;

    let districts = load_districts(&config.districts_path)?;

    let combined = combine(&prices, &coordinates, &districts)?;
    info!("🧮 Combined {} of {} price rows", combined.len(), prices.len());

    write_deck(&combined, &ViewState::default(), &config.output_path)?;
    info!("🗺️ Wrote {}", config.output_path.display());

    Ok(RunSummary {
        prices: prices.len(),
        coordinates: coordinates.len(),
        districts: districts.len(),
        combined: combined.len(),
    })
}
