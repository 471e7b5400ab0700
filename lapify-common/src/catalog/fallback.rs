//! Fixed demonstration dataset served when ingestion fails

use super::{BenchmarkScore, Laptop};

/// The single-record fallback catalog
pub fn fallback_laptops() -> Vec<Laptop> {
    vec![Laptop {
        ref_id: "REF-001".to_string(),
        brand: "ASUS".to_string(),
        model: "Zenbook 14 OLED".to_string(),
        segment: "Ultraportable".to_string(),
        product_type: "SSD".to_string(),
        size_inches: 14.0,
        pixels: "2880x1800".to_string(),
        refresh_rate: 90.0,
        panel: "OLED".to_string(),
        touch: false,
        cpu_brand: "Intel".to_string(),
        cpu_series: "Core Ultra 7".to_string(),
        cores: 16.0,
        multi_thread: true,
        passmark_score: 21500.0,
        gpu_type: "Integrated".to_string(),
        gpu_brand: "Intel".to_string(),
        gpu_model: "Arc Graphics".to_string(),
        g3d_mark_score: BenchmarkScore::Number(4200.0),
        ram_gb: 16.0,
        ram_speed: "LPDDR5x-7467".to_string(),
        soldered_ram: true,
        storage_gb: 1024.0,
        drive_type: "NVMe Gen4".to_string(),
        depth: 0.59,
        length: 12.3,
        width: 8.67,
        weight_lbs: 2.82,
        product_link: "#".to_string(),
        star_rating: 4.8,
        review_count: 120.0,
        price: 1099.0,
    }]
}
