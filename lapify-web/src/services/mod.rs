//! Outbound collaborators: sheet export fetch, ingestion, recommendation text

pub mod ingest;
pub mod recommender;
pub mod sheet_client;

pub use ingest::{load_catalog, reload, Catalog, CatalogOrigin};
pub use recommender::{Recommender, RecommenderConfig};
pub use sheet_client::SheetClient;
