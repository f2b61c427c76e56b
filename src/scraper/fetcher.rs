// fetcher.rs
use reqwest::blocking::Client;
use std::time::Duration;

use crate::scraper::ScraperError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// A page body plus the status it came back with. Non-success statuses are
/// returned, not raised, so the caller decides whether to skip.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError>;
}

/// One blocking session reused for every page of a run.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(FetchedPage { status, body })
    }
}
