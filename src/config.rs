// config.rs
use std::path::PathBuf;

use crate::errors::{PipelineError, PipelineResult};

pub const BASE_URL: &str = "https://truehome.hk";
pub const NEIGHBORHOODS_PATH: &str = "/prices/neighborhoods";
pub const NEIGHBORHOOD_LINK_CLASS: &str = "hk11";
pub const GEOCODE_REGION: &str = "HK";

const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Where everything lives for one run. Only the API key comes from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub neighborhoods_path: String,
    pub link_class: String,
    pub region_hint: String,
    pub prices_path: PathBuf,
    pub coordinates_path: PathBuf,
    pub districts_path: PathBuf,
    pub output_path: PathBuf,
    pub google_api_key: String,
}

impl Config {
    pub fn new(google_api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            neighborhoods_path: NEIGHBORHOODS_PATH.to_string(),
            link_class: NEIGHBORHOOD_LINK_CLASS.to_string(),
            region_hint: GEOCODE_REGION.to_string(),
            prices_path: PathBuf::from("./data/prices.json"),
            coordinates_path: PathBuf::from("./data/coordinates.json"),
            districts_path: PathBuf::from("./data/districts.json"),
            output_path: PathBuf::from("district.html"),
            google_api_key: google_api_key.into(),
        }
    }

    /// Reads the geocoding credential. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> PipelineResult<Self> {
        let key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(PipelineError::MissingCredential)?;
        Ok(Self::new(key))
    }

    /// Same layout as the defaults, rooted at `dir`.
    #[cfg(test)]
    pub fn rooted_at(dir: &std::path::Path, google_api_key: impl Into<String>) -> Self {
        let mut config = Self::new(google_api_key);
        config.prices_path = dir.join("data/prices.json");
        config.coordinates_path = dir.join("data/coordinates.json");
        config.districts_path = dir.join("data/districts.json");
        config.output_path = dir.join("district.html");
        config
    }

    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_url, self.neighborhoods_path)
    }
}
