//! Shared fixtures for lapify-web integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use lapify_common::{Laptop, SourceLocator};
use lapify_web::services::{Catalog, Recommender, RecommenderConfig, SheetClient};
use lapify_web::AppState;
use serde_json::Value;

pub const ADMIN_KEY: &str = "test-admin-key";

/// A sheet row with the commonly filtered columns set
#[derive(Debug, Clone)]
pub struct Row {
    pub brand: &'static str,
    pub model: &'static str,
    pub segment: &'static str,
    pub size: &'static str,
    pub cpu: &'static str,
    pub gpu_type: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub rating: &'static str,
    pub price: &'static str,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            brand: "HP",
            model: "Pavilion 15",
            segment: "General",
            size: "15.6",
            cpu: "Intel",
            gpu_type: "Integrated",
            ram: "16",
            storage: "512GB",
            rating: "4.2",
            price: "$799",
        }
    }
}

impl Row {
    /// 38 cells in sheet column order; quoting is left to the caller
    pub fn to_csv(&self) -> String {
        let mut cells = vec![String::new(); 38];
        cells[0] = self.brand.into();
        cells[1] = self.model.into();
        cells[2] = self.segment.into();
        cells[5] = self.size.into();
        cells[11] = self.cpu.into();
        cells[17] = self.gpu_type.into();
        cells[22] = self.ram.into();
        cells[26] = self.storage.into();
        cells[35] = self.rating.into();
        cells[37] = format!("\"{}\"", self.price);
        cells.join(",")
    }
}

pub const HEADER: &str = "Brand,Model,Segment,Type";

/// Header line followed by the given rows
pub fn sheet(rows: &[Row]) -> String {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(rows.iter().map(Row::to_csv));
    lines.join("\r\n")
}

/// Three listings across two brands and two segments
pub fn sample_rows() -> Vec<Row> {
    vec![
        Row {
            brand: "ASUS",
            model: "ROG Strix G16",
            segment: "Gaming",
            gpu_type: "Dedicated",
            ram: "32",
            storage: "1 TB",
            rating: "4.7",
            price: "$1,599.99",
            ..Row::default()
        },
        Row {
            brand: "asus ",
            model: "Zenbook 14",
            segment: "Ultraportable",
            size: "14",
            rating: "4.8",
            price: "$1,099",
            ..Row::default()
        },
        Row::default(),
    ]
}

/// Listing that passes the default preferences
pub fn listing(n: usize, price: f64, rating: f64) -> Laptop {
    Laptop {
        ref_id: format!("REF-{:03}", n),
        brand: "Lenovo".into(),
        model: format!("ThinkPad {}", n),
        segment: "Business".into(),
        size_inches: 14.0,
        ram_gb: 16.0,
        storage_gb: 512.0,
        star_rating: rating,
        price,
        ..Laptop::default()
    }
}

/// State around a live catalog; outbound clients point at `base_url`
pub fn state_with(laptops: Vec<Laptop>, base_url: &str, admin_key: &str) -> AppState {
    let catalog = Catalog::live(laptops, SourceLocator::new("test-sheet", "Sheet1"));
    let sheets = SheetClient::new(base_url).unwrap();
    let recommender = Recommender::new(RecommenderConfig::default()).unwrap();
    AppState::new(catalog, sheets, recommender, admin_key)
}

/// State whose outbound calls go nowhere (port 9 refuses connections)
pub fn offline_state(laptops: Vec<Laptop>) -> AppState {
    state_with(laptops, "http://127.0.0.1:9", ADMIN_KEY)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn admin_get(uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-admin-key", key)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("x-admin-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
