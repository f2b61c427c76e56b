#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Network(String),
    #[error("Geocoding API error {status}: {message}")]
    Api { status: String, message: String },
    #[error("Geocoding response not understood: {0}")]
    Decode(String),
}
