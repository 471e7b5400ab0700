//! # Lapify Common Library
//!
//! Shared code for the Lapify catalog service:
//! - Laptop record model and the positional column layout
//! - CSV ingestion and normalization
//! - Fallback dataset
//! - Filter/rank engine and facet lists
//! - Source locator

pub mod catalog;
pub mod error;
pub mod filter;
pub mod source;

pub use catalog::{parse_catalog, BenchmarkScore, Laptop};
pub use error::{Error, Result};
pub use filter::{Preferences, TouchPreference};
pub use source::SourceLocator;
