//! Positional column layout of the source sheet
//!
//! The sheet has no reliable header, so columns are addressed by index.
//! [`LAYOUT`] is the single source of truth: moving a column in the sheet is
//! a one-line change here. Indices listed in [`RESERVED`] exist in the sheet
//! but carry nothing we use.

use super::clean::{parse_benchmark, parse_flag, parse_number, parse_storage_gb, text_or};
use super::Laptop;

/// Number of cells a row is padded to before mapping
pub const ROW_WIDTH: usize = 38;

/// Sheet columns that are never mapped (E, K, Q, V, Z, AC, AH)
pub const RESERVED: [usize; 7] = [4, 10, 16, 21, 25, 28, 33];

/// Attribute a sheet column feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Brand,
    Model,
    Segment,
    ProductType,
    SizeInches,
    Pixels,
    RefreshRate,
    Panel,
    Touch,
    CpuBrand,
    CpuSeries,
    Cores,
    MultiThread,
    PassmarkScore,
    GpuType,
    GpuBrand,
    GpuModel,
    G3dMarkScore,
    RamGb,
    RamSpeed,
    SolderedRam,
    StorageGb,
    DriveType,
    Depth,
    Length,
    Width,
    WeightLbs,
    ProductLink,
    StarRating,
    ReviewCount,
    Price,
}

/// Index → attribute, in sheet order
pub const LAYOUT: [(usize, Column); 31] = [
    (0, Column::Brand),
    (1, Column::Model),
    (2, Column::Segment),
    (3, Column::ProductType),
    (5, Column::SizeInches),
    (6, Column::Pixels),
    (7, Column::RefreshRate),
    (8, Column::Panel),
    (9, Column::Touch),
    (11, Column::CpuBrand),
    (12, Column::CpuSeries),
    (13, Column::Cores),
    (14, Column::MultiThread),
    (15, Column::PassmarkScore),
    (17, Column::GpuType),
    (18, Column::GpuBrand),
    (19, Column::GpuModel),
    (20, Column::G3dMarkScore),
    (22, Column::RamGb),
    (23, Column::RamSpeed),
    (24, Column::SolderedRam),
    (26, Column::StorageGb),
    (27, Column::DriveType),
    (29, Column::Depth),
    (30, Column::Length),
    (31, Column::Width),
    (32, Column::WeightLbs),
    (34, Column::ProductLink),
    (35, Column::StarRating),
    (36, Column::ReviewCount),
    (37, Column::Price),
];

impl Column {
    /// Write the cleaned cell into `laptop`
    ///
    /// Each arm carries the field's cleaner and fallback token.
    pub fn apply(self, laptop: &mut Laptop, raw: &str) {
        match self {
            Column::Brand => laptop.brand = raw.to_string(),
            Column::Model => laptop.model = raw.to_string(),
            Column::Segment => laptop.segment = text_or(raw, "General"),
            Column::ProductType => laptop.product_type = text_or(raw, "SSD"),
            Column::SizeInches => laptop.size_inches = parse_number(raw),
            Column::Pixels => laptop.pixels = text_or(raw, "1920x1080"),
            Column::RefreshRate => laptop.refresh_rate = parse_number(raw),
            Column::Panel => laptop.panel = text_or(raw, "IPS"),
            Column::Touch => laptop.touch = parse_flag(raw),
            Column::CpuBrand => laptop.cpu_brand = text_or(raw, "Unknown"),
            Column::CpuSeries => laptop.cpu_series = text_or(raw, "-"),
            Column::Cores => laptop.cores = parse_number(raw),
            Column::MultiThread => laptop.multi_thread = parse_flag(raw),
            Column::PassmarkScore => laptop.passmark_score = parse_number(raw),
            Column::GpuType => laptop.gpu_type = text_or(raw, "Integrated"),
            Column::GpuBrand => laptop.gpu_brand = text_or(raw, "-"),
            Column::GpuModel => laptop.gpu_model = text_or(raw, "-"),
            Column::G3dMarkScore => laptop.g3d_mark_score = parse_benchmark(raw),
            Column::RamGb => laptop.ram_gb = parse_number(raw),
            Column::RamSpeed => laptop.ram_speed = text_or(raw, "-"),
            Column::SolderedRam => laptop.soldered_ram = parse_flag(raw),
            Column::StorageGb => laptop.storage_gb = parse_storage_gb(raw),
            Column::DriveType => laptop.drive_type = text_or(raw, "-"),
            Column::Depth => laptop.depth = parse_number(raw),
            Column::Length => laptop.length = parse_number(raw),
            Column::Width => laptop.width = parse_number(raw),
            Column::WeightLbs => laptop.weight_lbs = parse_number(raw),
            Column::ProductLink => laptop.product_link = text_or(raw, "#"),
            Column::StarRating => laptop.star_rating = parse_number(raw),
            Column::ReviewCount => laptop.review_count = parse_number(raw),
            Column::Price => laptop.price = parse_number(raw),
        }
    }
}

/// Map a row of cells to a laptop through [`LAYOUT`]
///
/// Missing trailing cells read as empty strings.
pub fn map_row(ref_id: String, cells: &[String]) -> Laptop {
    let mut laptop = Laptop {
        ref_id,
        ..Laptop::default()
    };
    for (index, column) in LAYOUT {
        let raw = cells.get(index).map(String::as_str).unwrap_or("");
        column.apply(&mut laptop, raw);
    }
    laptop
}
