mod fetcher;
mod models;
mod scraper;
mod scraper_error;

#[cfg(test)]
pub use fetcher::FetchedPage;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use self::scraper::{collect_prices, persist_prices};
pub use scraper_error::ScraperError;
