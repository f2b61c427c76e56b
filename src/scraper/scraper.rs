// scraper.rs
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::domain::PriceRecord;
use crate::errors::PipelineResult;
use crate::scraper::models::NextData;
use crate::scraper::{PageFetcher, ScraperError};
use crate::store::{Store, Table};

/// Returns the cached price table if one was ever persisted, otherwise scrapes
/// every neighborhood. A cached table is trusted as-is.
pub fn collect_prices<F, S>(store: &S, fetcher: &F, config: &Config) -> PipelineResult<Vec<PriceRecord>>
where
    F: PageFetcher,
    S: Store<usize, PriceRecord>,
{
    if let Some(cached) = store.load_all()? {
        info!("💾 Using cached price table ({} rows)", cached.len());
        return Ok(cached.into_values().collect());
    }

    let collector = PriceCollector::new(fetcher, config)?;
    Ok(collector.fetch_all()?)
}

/// Persists rows keyed by their position, `0..n`.
pub fn persist_prices<S>(store: &S, prices: &[PriceRecord]) -> PipelineResult<()>
where
    S: Store<usize, PriceRecord>,
{
    let table: Table<usize, PriceRecord> = prices.iter().cloned().enumerate().collect();
    store.persist_all(&table)?;
    Ok(())
}

pub struct PriceCollector<'a, F> {
    fetcher: &'a F,
    base_url: Url,
    index_url: Url,
    link_selector: Selector,
}

impl<'a, F: PageFetcher> PriceCollector<'a, F> {
    pub fn new(fetcher: &'a F, config: &Config) -> Result<Self, ScraperError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ScraperError::BadUrl(e.to_string()))?;
        let index_url = Url::parse(&config.index_url()).map_err(|e| ScraperError::BadUrl(e.to_string()))?;
        let link_selector = Selector::parse(&format!("a.{}[href]", config.link_class))
            .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        Ok(Self {
            fetcher,
            base_url,
            index_url,
            link_selector,
        })
    }

    /// Fails only if the index page can't be fetched. Any neighborhood that
    /// fails is logged and left out.
    pub fn fetch_all(&self) -> Result<Vec<PriceRecord>, ScraperError> {
        let index = self.fetcher.fetch(self.index_url.as_str())?;
        if !index.is_success() {
            return Err(ScraperError::Status {
                url: self.index_url.to_string(),
                status: index.status,
            });
        }

        let links = self.neighborhood_links(&index.body);
        info!("🔗 Found {} neighborhood links", links.len());

        let mut prices = Vec::new();
        for link in &links {
            match self.fetch_neighborhood(link) {
                Ok(buildings) => {
                    debug!("✅ {link} ({} buildings)", buildings.len());
                    prices.extend(buildings);
                }
                Err(e) => warn!("⚠️ Skipping {link}: {e}"),
            }
        }

        info!("🏢 Collected {} building rows", prices.len());
        Ok(prices)
    }

    /// Absolute URLs of every marked anchor, in document order.
    pub fn neighborhood_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| match self.base_url.join(href) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    warn!("⚠️ Ignoring neighborhood link {href:?}: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn fetch_neighborhood(&self, url: &str) -> Result<Vec<PriceRecord>, ScraperError> {
        let page = self.fetcher.fetch(url)?;
        if page.status != 200 {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: page.status,
            });
        }

        let data = Self::extract_next_data(&page.body)?;
        Self::extract_buildings(data)
    }

    fn extract_next_data(html: &str) -> Result<NextData, ScraperError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
            .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

        let element = document
            .select(&selector)
            .next()
            .ok_or(ScraperError::MissingNextData)?;

        let json_text: String = element.text().collect();
        serde_json::from_str(&json_text).map_err(|e| ScraperError::JsonParse(e.to_string()))
    }

    fn extract_buildings(data: NextData) -> Result<Vec<PriceRecord>, ScraperError> {
        let page_props = data.props.page_props;

        if let Some(code) = page_props.status_code {
            return Err(ScraperError::ErrorPage(code.to_string()));
        }

        page_props
            .data
            .and_then(|d| d.buildings)
            .ok_or_else(|| ScraperError::UnexpectedShape("buildings missing".to_string()))
    }
}
