mod error;
mod templates;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use pagenav::{PageState, PaginationConfig};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use self::{
    error::WebError,
    templates::{RenderPage, SearchPage},
};

static ICONS: &str = include_str!("../static/icons.svg");

#[derive(Debug, Clone)]
pub(crate) struct SearchResult {
    pub(crate) title: String,
    pub(crate) publisher: String,
}

impl SearchResult {
    pub(crate) fn demo_set(count: usize) -> Vec<Self> {
        const PUBLISHERS: [&str; 3] = ["Closet Cooking", "Simply Recipes", "All Recipes"];
        (1..=count)
            .map(|i| SearchResult {
                title: format!("Recipe #{i}"),
                publisher: PUBLISHERS[i % PUBLISHERS.len()].to_string(),
            })
            .collect()
    }
}

#[derive(Clone)]
pub(crate) struct WebState {
    results: Arc<Vec<SearchResult>>,
    config: Arc<PaginationConfig>,
}

impl WebState {
    pub(crate) fn new(results: Vec<SearchResult>, config: PaginationConfig) -> Self {
        Self {
            results: Arc::new(results),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

async fn search_results(
    State(state): State<WebState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, WebError> {
    let page = match query.page.as_deref().map(str::trim) {
        None | Some("") => 1,
        Some(page) => page
            .parse::<u32>()
            .map_err(|e| WebError::InvalidPage(page.to_string(), e))?,
    };
    let page_state = PageState::new(
        page.max(1),
        state.results.as_slice(),
        state.config.results_per_page,
    )?
    .clamped();
    let page = SearchPage {
        state: page_state,
        config: &state.config,
    };
    Ok(RenderPage(page).into_response())
}

async fn icons() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], ICONS)
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(search_results))
        .route("/static/icons.svg", get(icons))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
