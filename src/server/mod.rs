//! HTTP exposure for the listings collection
//!
//! `GET /listings` decodes [`FilterCriteria`] from the query string (same
//! defensive rules as the on-mount hydration path) and answers with the
//! filtered, sorted collection from the shared [`ListingFetcher`]. This is
//! the remote backend a controller's fetch can target.

use crate::core::criteria::FilterCriteria;
use crate::core::error::AgoraError;
use crate::core::fetch::ListingFetcher;
use crate::core::listing::Listing;
use crate::core::query::ListingQuery;
use anyhow::Result;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state for the listings routes
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<dyn ListingFetcher>,
}

/// Response body for `GET /listings`
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    /// The filtered, sorted collection
    pub data: Vec<Listing>,
    /// Number of listings after filtering
    pub total: usize,
    /// The criteria the collection was resolved for
    pub criteria: FilterCriteria,
}

/// Build the listings router around a fetcher
pub fn router(fetcher: Arc<dyn ListingFetcher>) -> Router {
    Router::new()
        .route("/listings", get(list_listings))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { fetcher })
}

async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingsResponse>, AgoraError> {
    let criteria = query.criteria();
    let data = state
        .fetcher
        .fetch(&criteria)
        .await
        .map_err(AgoraError::fetch)?;
    Ok(Json(ListingsResponse {
        total: data.len(),
        data,
        criteria,
    }))
}

/// Bind and serve the listings router
pub async fn serve(addr: &str, fetcher: Arc<dyn ListingFetcher>) -> Result<()> {
    let app = router(fetcher);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
