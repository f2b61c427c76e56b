use crate::config::Config;
use crate::domain::Coordinate;
use crate::geocoder::{GeocodeClient, GeocodeError};
use crate::scraper::{FetchedPage, PageFetcher, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

pub const INDEX_URL: &str = "https://truehome.hk/prices/neighborhoods";

/// Serves canned pages by URL and remembers every request.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, FetchedPage>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("connection refused: {url}")))
    }
}

/// Knows a fixed set of addresses; anything else is no match.
#[derive(Default)]
pub struct FakeGeocoder {
    known: HashMap<String, Coordinate>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGeocoder {
    pub fn knows(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.known.insert(address.to_string(), Coordinate::new(lat, lng));
        self
    }

    pub fn queried(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GeocodeClient for FakeGeocoder {
    fn geocode(&self, address: &str, _region: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.calls.borrow_mut().push(address.to_string());
        Ok(self.known.get(address).copied())
    }
}

/// Index page linking to each neighborhood slug, with some unrelated anchors.
pub fn index_page(slugs: &[&str]) -> String {
    let links: String = slugs
        .iter()
        .map(|s| format!(r#"<li><a class="hk11" href="/prices/neighborhoods/{s}">{s}</a></li>"#))
        .collect();
    format!(r#"<html><body><a href="/">Home</a><ul>{links}</ul></body></html>"#)
}

pub fn neighborhood_url(slug: &str) -> String {
    format!("{INDEX_URL}/{slug}")
}

/// A neighborhood page embedding `buildings` the way the site does.
pub fn neighborhood_page(buildings: serde_json::Value) -> String {
    let data = serde_json::json!({
        "props": { "pageProps": { "data": { "buildings": buildings } } },
        "page": "/prices/neighborhoods/[slug]"
    });
    format!(r#"<html><body><div id="__next"></div><script id="__NEXT_DATA__" type="application/json">{data}</script></body></html>"#)
}

pub fn building(name: &str, address: &str, region: &str, price: serde_json::Value, colour: &str) -> serde_json::Value {
    serde_json::json!({
        "buildingname": name,
        "buildingaddress": address,
        "region": region,
        "medianpredprice": price,
        "transactionscount": 4,
        "built": 1998,
        "numberofunits": 320,
        "numberoffloors": 41.0,
        "colour": colour,
    })
}

/// Temp run directory with a district reference file in place.
pub fn run_dir(districts: serde_json::Value) -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let config = Config::rooted_at(dir.path(), "test-key");
    write_json(&config.districts_path, &districts);
    (dir, config)
}

pub fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
