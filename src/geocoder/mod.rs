mod geocode_error;
mod geocoder;
mod google;

pub use geocode_error::GeocodeError;
pub use geocoder::{geocode, GeocodeClient};
pub use google::GoogleGeocoder;
