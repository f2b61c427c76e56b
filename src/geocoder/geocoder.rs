// geocoder.rs
use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::domain::{Coordinate, CoordinateTable};
use crate::geocoder::GeocodeError;

/// Resolves one address. `Ok(None)` means the service had no match.
pub trait GeocodeClient {
    fn geocode(&self, address: &str, region: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

/// Returns `cache` enlarged with every address it didn't already hold.
///
/// Each missing address is queried once. Lookups that find nothing, or fail,
/// are recorded as the sentinel and then filtered out with every other
/// unresolved row, so they are retried on the next run.
pub fn geocode<'a, C, I>(addresses: I, cache: &CoordinateTable, client: &C, region: &str) -> CoordinateTable
where
    C: GeocodeClient,
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let to_fetch: Vec<&str> = addresses
        .into_iter()
        .filter(|a| !cache.contains_key(*a) && seen.insert(*a))
        .collect();

    info!(
        "📍 {} addresses to geocode ({} cached)",
        to_fetch.len(),
        cache.len()
    );

    let mut table = cache.clone();
    for address in to_fetch {
        let coordinate = match client.geocode(address, region) {
            Ok(Some(c)) => {
                debug!(%address, lat = c.lat, lng = c.lng, "geocoded");
                c
            }
            Ok(None) => {
                warn!(%address, "no geocoding match");
                Coordinate::SENTINEL
            }
            Err(e) => {
                warn!(%address, "geocoding failed: {e}");
                Coordinate::SENTINEL
            }
        };
        table.insert(address.to_string(), coordinate);
    }

    table.retain(|_, c| c.is_resolved());
    table
}
