//! Sheet text → laptop records
//!
//! Row admission runs in a fixed order; the first rule that fires decides the
//! [`SkipReason`]. Skipped rows never produce errors.

use super::columns::{map_row, ROW_WIDTH};
use super::csv::{split_csv_line, split_lines};
use super::{ref_id_for_line, Laptop};

/// Why a line was not turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Empty or whitespace-only line
    Blank,
    /// First line naming the brand/model columns
    Header,
    /// Section title row such as "Laptops under $1000"
    SectionTitle,
    /// 2-in-1 convertibles are out of scope for this catalog
    Convertible,
    /// Brand or model cell missing
    MissingIdentity,
}

/// Parsed records plus per-reason skip counts
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub laptops: Vec<Laptop>,
    pub lines: usize,
    pub skipped: Vec<(usize, SkipReason)>,
}

impl ParseReport {
    /// Number of lines skipped for `reason`
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|(_, r)| *r == reason).count()
    }
}

/// Parse sheet CSV text into laptops
///
/// Returns an empty vector when the text has fewer than two lines; callers
/// treat an empty result as a failed ingestion.
pub fn parse_catalog(text: &str) -> Vec<Laptop> {
    parse_catalog_report(text).laptops
}

/// Like [`parse_catalog`], also reporting which lines were skipped and why
pub fn parse_catalog_report(text: &str) -> ParseReport {
    let lines = split_lines(text);
    let mut report = ParseReport {
        lines: lines.len(),
        ..ParseReport::default()
    };
    if lines.len() < 2 {
        return report;
    }

    for (index, line) in lines.iter().enumerate() {
        match admit(index, line) {
            Ok(cells) => report.laptops.push(map_row(ref_id_for_line(index), &cells)),
            Err(reason) => report.skipped.push((index, reason)),
        }
    }

    tracing::debug!(
        lines = report.lines,
        admitted = report.laptops.len(),
        skipped = report.skipped.len(),
        "Parsed catalog text"
    );

    report
}

/// Apply the admission rules to one line, returning its padded cells
fn admit(index: usize, line: &str) -> Result<Vec<String>, SkipReason> {
    if line.trim().is_empty() {
        return Err(SkipReason::Blank);
    }

    let mut cells = split_csv_line(line);

    let first = cells.first().map(|c| c.to_lowercase()).unwrap_or_default();
    let second = cells.get(1).map(|c| c.to_lowercase()).unwrap_or_default();

    if index == 0 && (first == "brand" || second == "model") {
        return Err(SkipReason::Header);
    }
    if first.contains("laptops under") || first == "under" {
        return Err(SkipReason::SectionTitle);
    }
    let product_type = cells.get(3).map(|c| c.to_lowercase()).unwrap_or_default();
    if product_type.contains("2 in 1") {
        return Err(SkipReason::Convertible);
    }
    if cells.len() < 2 || cells[0].is_empty() || cells[1].is_empty() {
        return Err(SkipReason::MissingIdentity);
    }

    if cells.len() < ROW_WIDTH {
        cells.resize(ROW_WIDTH, String::new());
    }
    Ok(cells)
}
