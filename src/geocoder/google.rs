// google.rs
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::Coordinate;
use crate::geocoder::{GeocodeClient, GeocodeError};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Google Geocoding API over a blocking client.
pub struct GoogleGeocoder {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl GoogleGeocoder {
    pub fn new(api_key: String) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self { api_key, client })
    }
}

impl GeocodeClient for GoogleGeocoder {
    fn geocode(&self, address: &str, region: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let region = region.to_ascii_lowercase();

        let resp = self
            .client
            .get(GEOCODE_URL)
            .query(&[
                ("address", address),
                ("region", region.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(GeocodeError::Api {
                status: status.to_string(),
                message: text,
            });
        }

        let body: GeocodeResponse = resp.json().map_err(|e| GeocodeError::Decode(e.to_string()))?;
        parse_response(body)
    }
}

fn parse_response(body: GeocodeResponse) -> Result<Option<Coordinate>, GeocodeError> {
    match body.status.as_str() {
        "OK" => Ok(body
            .results
            .into_iter()
            .next()
            .map(|r| Coordinate::new(r.geometry.location.lat, r.geometry.location.lng))),
        "ZERO_RESULTS" => Ok(None),
        _ => Err(GeocodeError::Api {
            status: body.status,
            message: body.error_message.unwrap_or_default(),
        }),
    }
}
