//! lapify-web library - catalog browsing service
//!
//! Serves the laptop catalog viewer, the gated admin view, and the JSON API
//! behind both.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use lapify_common::SourceLocator;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod pagination;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use services::{Catalog, Recommender, SheetClient};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Current snapshot; replaced wholesale on every ingestion
    catalog: Arc<RwLock<Arc<Catalog>>>,
    /// Locator the next reload will use
    source: Arc<RwLock<SourceLocator>>,
    /// Sheet export client
    pub sheets: Arc<SheetClient>,
    /// Recommendation text client
    pub recommender: Arc<Recommender>,
    /// Admin key; empty disables the admin gate
    pub admin_key: String,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create application state around an initial snapshot
    pub fn new(
        catalog: Catalog,
        sheets: SheetClient,
        recommender: Recommender,
        admin_key: impl Into<String>,
    ) -> Self {
        let source = catalog.source.clone();
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            source: Arc::new(RwLock::new(source)),
            sheets: Arc::new(sheets),
            recommender: Arc::new(recommender),
            admin_key: admin_key.into(),
            startup_time: Utc::now(),
        }
    }

    /// Current snapshot; stays valid even if a reload replaces it
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Swap in a new snapshot
    pub async fn publish(&self, catalog: Arc<Catalog>) {
        *self.catalog.write().await = catalog;
    }

    /// Locator the next reload will use
    pub async fn source(&self) -> SourceLocator {
        self.source.read().await.clone()
    }

    /// Replace the locator (does not reload by itself)
    pub async fn set_source(&self, locator: SourceLocator) {
        *self.source.write().await = locator;
    }
}

/// Build application router
///
/// Admin routes sit behind the admin key middleware; everything else is
/// public.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post};

    let admin = Router::new()
        .route(
            "/api/admin/source",
            get(api::get_source).put(api::update_source),
        )
        .route("/api/admin/reload", post(api::reload_catalog))
        .route("/api/admin/rows", get(api::list_rows))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::admin_auth,
        ));

    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/laptops", get(api::list_laptops))
        .route("/api/facets", get(api::get_facets))
        .route("/api/preferences/default", get(api::default_preferences))
        .route("/api/recommendation", post(api::recommend))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(admin)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
