// errors.rs
use std::path::PathBuf;

use crate::geocoder::GeocodeError;
use crate::scraper::ScraperError;
use crate::store::StoreError;

/// Errors that abort a pipeline run. Anything the pipeline tolerates
/// (skipped pages, failed geocodes, unmapped regions) never becomes one of these.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingCredential,

    #[error("district reference file not found: {}", .0.display())]
    MissingDistricts(PathBuf),

    #[error("cannot coerce {field} of {building:?} to an integer: {value}")]
    Coercion {
        field: &'static str,
        building: String,
        value: String,
    },

    #[error("malformed colour for {building:?}: {value:?}")]
    MalformedColour { building: String, value: String },

    #[error("failed to encode map data")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write visualization")]
    Render(#[from] std::io::Error),

    #[error(transparent)]
    Scraper(#[from] ScraperError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// `err: cause: cause ...`, walking `source()` to the bottom.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
