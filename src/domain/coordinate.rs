use serde::{Deserialize, Deserializer, Serialize};

use crate::store::Table;

/// Resolved position of a building, keyed by address in a `CoordinateTable`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(deserialize_with = "null_as_nan")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_nan")]
    pub lng: f64,
}

pub type CoordinateTable = Table<String, Coordinate>;

impl Coordinate {
    /// Placeholder for a failed lookup. Never leaves the geocoder.
    pub const SENTINEL: Coordinate = Coordinate { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_resolved(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && *self != Self::SENTINEL
    }
}

// Older caches can carry `null` for a failed lookup.
fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
