use crate::config::Config;
use crate::geocoder::GoogleGeocoder;
use crate::scraper::HttpFetcher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod geocoder;
mod pipeline;
mod render;
mod scraper;
mod store;

#[cfg(test)]
mod tests;

fn main() {
    // .env may carry GOOGLE_API_KEY
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hk_price_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = start() {
        tracing::error!("❌ Run failed: {}", errors::error_chain(&e));
        std::process::exit(1);
    }
}

fn start() -> errors::PipelineResult<()> {
    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new()?;
    let geocoder = GoogleGeocoder::new(config.google_api_key.clone())?;

    let summary = pipeline::run(&config, &fetcher, &geocoder)?;
    tracing::info!(
        prices = summary.prices,
        coordinates = summary.coordinates,
        districts = summary.districts,
        rendered = summary.combined,
        "✅ Done"
    );
    Ok(())
}
