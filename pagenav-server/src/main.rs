mod web;

use anyhow::{Context, Result};
use pagenav::PaginationConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::web::{SearchResult, WebState};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .map(|p| p.parse::<T>().ok())
        .ok()
        .flatten()
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let mut config = PaginationConfig::from_env().context("Reading PAGENAV_* configuration")?;
    // buttons need to submit the page so the form works without scripts
    config.form_field.get_or_insert_with(|| "page".to_string());
    let results = SearchResult::demo_set(env_or("PAGENAV_RESULTS", 42));
    info!(
        "serving {} results, {} per page",
        results.len(),
        config.results_per_page
    );
    let state = WebState::new(results, config);
    web::start_web(state, env_or("PORT", 8080)).await
}
