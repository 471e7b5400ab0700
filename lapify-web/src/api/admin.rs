//! Admin API: source configuration, manual reload, raw row listing
//!
//! All routes here sit behind the admin key middleware.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use lapify_common::{filter, Laptop, SourceLocator};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::services::{self, Catalog, CatalogOrigin};
use crate::{ApiResult, AppState};

/// Current locator plus the state of the snapshot it produced
#[derive(Debug, Serialize)]
pub struct SourceSummary {
    /// Locator the next reload will use
    pub source: SourceLocator,
    /// Locator the current snapshot was loaded from
    pub loaded_from: SourceLocator,
    pub origin: CatalogOrigin,
    pub laptop_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceSummary {
    fn new(source: SourceLocator, catalog: &Catalog) -> Self {
        Self {
            source,
            loaded_from: catalog.source.clone(),
            origin: catalog.origin.clone(),
            laptop_count: catalog.laptops.len(),
            loaded_at: catalog.loaded_at,
        }
    }
}

/// GET /api/admin/source
pub async fn get_source(State(state): State<AppState>) -> Json<SourceSummary> {
    let catalog = state.catalog().await;
    Json(SourceSummary::new(state.source().await, &catalog))
}

/// PUT /api/admin/source
///
/// Validates and stores the new locator, then reloads from it.
pub async fn update_source(
    State(state): State<AppState>,
    Json(locator): Json<SourceLocator>,
) -> ApiResult<Json<SourceSummary>> {
    let locator = locator.validated()?;
    info!(
        sheet_id = %locator.sheet_id,
        tab = %locator.tab_name,
        "Source locator updated"
    );
    state.set_source(locator.clone()).await;

    let catalog = services::reload(&state).await;
    Ok(Json(SourceSummary::new(locator, &catalog)))
}

/// POST /api/admin/reload
pub async fn reload_catalog(State(state): State<AppState>) -> Json<SourceSummary> {
    info!("Manual catalog reload requested");
    let catalog = services::reload(&state).await;
    Json(SourceSummary::new(state.source().await, &catalog))
}

/// Query parameters for the admin row list
#[derive(Debug, Deserialize)]
pub struct RowsParams {
    /// Case-insensitive substring over model and brand
    #[serde(default)]
    pub search: String,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Raw rows of the snapshot, in sheet order
#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub total_results: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub rows: Vec<Laptop>,
}

/// GET /api/admin/rows
pub async fn list_rows(
    State(state): State<AppState>,
    Query(params): Query<RowsParams>,
) -> Json<RowsResponse> {
    let catalog = state.catalog().await;
    let found = filter::search_rows(&catalog.laptops, &params.search);

    let p = calculate_pagination(found.len(), params.page);
    let rows = p.slice(&found).iter().map(|l| (*l).clone()).collect();

    Json(RowsResponse {
        total_results: found.len(),
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        rows,
    })
}
