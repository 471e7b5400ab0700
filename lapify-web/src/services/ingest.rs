//! Catalog ingestion with fallback
//!
//! Transport failure, a non-success status, and a sheet with no admissible
//! rows all end the same way: the fixed fallback dataset is served. The
//! cause is kept on the snapshot and logged so a network blip can be told
//! apart from an empty sheet.
//!
//! Overlapping reloads are not cancelled. Each one swaps the snapshot when
//! it completes, so the last to finish wins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lapify_common::catalog::{fallback_laptops, parse_catalog_report};
use lapify_common::{Error, Laptop, SourceLocator};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::SheetClient;
use crate::AppState;

/// Where the served records came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogOrigin {
    /// Parsed from the configured sheet
    Live,
    /// Demonstration data; `cause` says why ingestion failed
    Fallback { cause: String },
}

/// Immutable snapshot of one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub laptops: Vec<Laptop>,
    pub origin: CatalogOrigin,
    pub source: SourceLocator,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn live(laptops: Vec<Laptop>, source: SourceLocator) -> Self {
        Self {
            laptops,
            origin: CatalogOrigin::Live,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn fallback(cause: &Error, source: SourceLocator) -> Self {
        Self {
            laptops: fallback_laptops(),
            origin: CatalogOrigin::Fallback {
                cause: cause.to_string(),
            },
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, CatalogOrigin::Fallback { .. })
    }
}

/// Fetch and parse the sheet, substituting fallback data on failure
///
/// Never returns an error: every failure becomes a fallback snapshot.
pub async fn load_catalog(client: &SheetClient, locator: &SourceLocator) -> Catalog {
    match try_load(client, locator).await {
        Ok(laptops) => {
            info!(
                sheet_id = %locator.sheet_id,
                tab = %locator.tab_name,
                count = laptops.len(),
                "Catalog loaded from sheet"
            );
            Catalog::live(laptops, locator.clone())
        }
        Err(e) => {
            let cause = match &e {
                Error::Transport(_) => "transport",
                Error::HttpStatus { .. } => "http_status",
                Error::EmptyResult => "empty_result",
                _ => "other",
            };
            if e.is_ingestion_failure() {
                warn!(
                    sheet_id = %locator.sheet_id,
                    tab = %locator.tab_name,
                    cause,
                    error = %e,
                    "Sync failed, using fallback data"
                );
            } else {
                // Not a source problem: the request could not even be built
                error!(
                    sheet_id = %locator.sheet_id,
                    tab = %locator.tab_name,
                    error = %e,
                    "Sync failed, using fallback data"
                );
            }
            Catalog::fallback(&e, locator.clone())
        }
    }
}

async fn try_load(client: &SheetClient, locator: &SourceLocator) -> Result<Vec<Laptop>, Error> {
    let text = client.fetch_csv(locator).await?;
    let report = parse_catalog_report(&text);

    if !report.skipped.is_empty() {
        debug!(
            skipped = report.skipped.len(),
            lines = report.lines,
            "Sheet lines skipped during admission"
        );
    }

    if report.laptops.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(report.laptops)
}

/// Re-run ingestion with the current locator and publish the result
pub async fn reload(state: &AppState) -> Arc<Catalog> {
    let locator = state.source().await;
    let catalog = Arc::new(load_catalog(&state.sheets, &locator).await);
    state.publish(catalog.clone()).await;
    catalog
}
