//! Laptop catalog records and CSV ingestion
//!
//! Raw sheet text flows through [`parse_catalog`] into an ordered `Vec<Laptop>`.
//! Column positions live in one table ([`columns::LAYOUT`]); cleaning rules in
//! [`clean`]; the fixed demonstration data in [`fallback`].

pub mod clean;
pub mod columns;
pub mod csv;
pub mod fallback;
pub mod parser;

pub use fallback::fallback_laptops;
pub use parser::{parse_catalog, parse_catalog_report, ParseReport, SkipReason};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary GPU benchmark value
///
/// The sheet mixes real scores with placeholder text ("N/A", "TBD", ...).
/// Placeholders are kept verbatim instead of being coerced to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenchmarkScore {
    Number(f64),
    Text(String),
}

impl BenchmarkScore {
    /// Numeric value, if the cell held one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            BenchmarkScore::Number(n) => Some(*n),
            BenchmarkScore::Text(_) => None,
        }
    }
}

impl Default for BenchmarkScore {
    fn default() -> Self {
        BenchmarkScore::Number(0.0)
    }
}

impl fmt::Display for BenchmarkScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkScore::Number(n) => write!(f, "{}", n),
            BenchmarkScore::Text(t) => f.write_str(t),
        }
    }
}

/// One normalized laptop listing
///
/// `Default` yields every documented fallback token; the parser starts from
/// it and only overwrites cells that are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laptop {
    /// Synthetic `REF-NNN` identifier derived from the source line position
    pub ref_id: String,

    // === Classification ===
    pub brand: String,
    pub model: String,
    /// Market segment ("Gaming", "Ultraportable", ...)
    pub segment: String,
    /// Category column of the sheet; defaults to "SSD" as the sheet does
    #[serde(rename = "type")]
    pub product_type: String,

    // === Display ===
    pub size_inches: f64,
    pub pixels: String,
    pub refresh_rate: f64,
    pub panel: String,
    pub touch: bool,

    // === Compute ===
    pub cpu_brand: String,
    pub cpu_series: String,
    pub cores: f64,
    pub multi_thread: bool,
    pub passmark_score: f64,

    // === Graphics ===
    pub gpu_type: String,
    pub gpu_brand: String,
    pub gpu_model: String,
    pub g3d_mark_score: BenchmarkScore,

    // === Memory ===
    pub ram_gb: f64,
    pub ram_speed: String,
    pub soldered_ram: bool,

    // === Storage ===
    /// Capacity in GB; terabyte cells are multiplied by 1024
    pub storage_gb: f64,
    pub drive_type: String,

    // === Physical ===
    pub depth: f64,
    pub length: f64,
    pub width: f64,
    pub weight_lbs: f64,

    // === Commercial ===
    pub product_link: String,
    pub star_rating: f64,
    pub review_count: f64,
    pub price: f64,
}

impl Default for Laptop {
    fn default() -> Self {
        Self {
            ref_id: String::new(),
            brand: String::new(),
            model: String::new(),
            segment: "General".to_string(),
            product_type: "SSD".to_string(),
            size_inches: 0.0,
            pixels: "1920x1080".to_string(),
            refresh_rate: 0.0,
            panel: "IPS".to_string(),
            touch: false,
            cpu_brand: "Unknown".to_string(),
            cpu_series: "-".to_string(),
            cores: 0.0,
            multi_thread: false,
            passmark_score: 0.0,
            gpu_type: "Integrated".to_string(),
            gpu_brand: "-".to_string(),
            gpu_model: "-".to_string(),
            g3d_mark_score: BenchmarkScore::default(),
            ram_gb: 0.0,
            ram_speed: "-".to_string(),
            soldered_ram: false,
            storage_gb: 0.0,
            drive_type: "-".to_string(),
            depth: 0.0,
            length: 0.0,
            width: 0.0,
            weight_lbs: 0.0,
            product_link: "#".to_string(),
            star_rating: 0.0,
            review_count: 0.0,
            price: 0.0,
        }
    }
}

/// Build the `REF-NNN` identifier for a 0-based source line index
pub fn ref_id_for_line(line_index: usize) -> String {
    format!("REF-{:03}", line_index + 1)
}
