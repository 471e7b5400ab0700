//! Viewer API: filtered/ranked listing, facets, default preferences

use axum::{
    extract::{Query, State},
    Json,
};
use lapify_common::filter::{self, Preferences};
use lapify_common::Laptop;
use serde::{Deserialize, Serialize};

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::services::CatalogOrigin;
use crate::AppState;

/// Non-preference query parameters of the listing
///
/// The preference fields are read from the same query string by a separate
/// `Query<Preferences>` extractor.
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    /// Free-text search over model, brand and segment
    #[serde(default)]
    pub q: String,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Filtered and ranked page of laptops
#[derive(Debug, Serialize)]
pub struct LaptopListResponse {
    pub total_results: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Advisory: drives the reset affordance
    pub filter_active: bool,
    /// True when demonstration data is being served
    pub fallback: bool,
    pub origin: CatalogOrigin,
    pub laptops: Vec<Laptop>,
}

/// GET /api/laptops
///
/// Query string carries any subset of the preference fields plus `q` and
/// `page`; missing preference fields take their defaults.
pub async fn list_laptops(
    State(state): State<AppState>,
    Query(prefs): Query<Preferences>,
    Query(params): Query<ViewParams>,
) -> Json<LaptopListResponse> {
    let catalog = state.catalog().await;
    let view = filter::filter_and_rank(&catalog.laptops, &prefs, &params.q);

    let p = calculate_pagination(view.len(), params.page);
    let laptops = p.slice(&view).iter().map(|l| (*l).clone()).collect();

    Json(LaptopListResponse {
        total_results: view.len(),
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        filter_active: filter::is_any_filter_active(&prefs, &params.q),
        fallback: catalog.is_fallback(),
        origin: catalog.origin.clone(),
        laptops,
    })
}

/// Facet lists over the whole (unfiltered) snapshot
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub brands: Vec<String>,
    pub segments: Vec<String>,
}

/// GET /api/facets
pub async fn get_facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    let catalog = state.catalog().await;
    Json(FacetsResponse {
        brands: filter::distinct_brands(&catalog.laptops),
        segments: filter::distinct_segments(&catalog.laptops),
    })
}

/// GET /api/preferences/default
///
/// The reset state of the preference set.
pub async fn default_preferences() -> Json<Preferences> {
    Json(Preferences::default())
}
