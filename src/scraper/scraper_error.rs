#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("__NEXT_DATA__ not found")]
    MissingNextData,
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Page reported status code {0}")]
    ErrorPage(String),
    #[error("Bad URL: {0}")]
    BadUrl(String),
}
