//! Filter/rank engine
//!
//! Pure functions over a borrowed laptop slice. Nothing here mutates the
//! catalog; views are vectors of references in ranked order.

pub mod facets;
mod wire;

pub use facets::{distinct_brands, distinct_segments};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::Laptop;

/// Sentinel meaning "no filter" for the choice fields
pub const ANY: &str = "Any";

/// Touch screen requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPreference {
    /// Don't care
    #[default]
    Any,
    /// Touch screen required
    Yes,
    /// Non-touch required
    No,
}

impl TouchPreference {
    /// Whether a laptop's touch flag satisfies this preference
    pub fn accepts(self, touch: bool) -> bool {
        match self {
            TouchPreference::Any => true,
            TouchPreference::Yes => touch,
            TouchPreference::No => !touch,
        }
    }
}

/// User-controlled filter criteria
///
/// `Default` is the reset state. Missing or blank fields deserialize to
/// their defaults, so a partial query string is a valid preference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "wire::PreferencesWire")]
pub struct Preferences {
    pub min_price: f64,
    pub max_price: f64,
    /// Exact brand, empty for all brands
    pub brand: String,
    /// Segment, [`ANY`] for all segments
    pub laptop_type: String,
    pub min_screen_size: f64,
    pub touch_screen: TouchPreference,
    pub min_ram: f64,
    pub min_storage: f64,
    /// CPU brand substring, [`ANY`] for all
    pub cpu_brand: String,
    /// Exact GPU type, [`ANY`] for all
    pub gpu_type: String,
    /// GPU brand substring, [`ANY`] for all
    pub gpu_brand: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 10000.0,
            brand: String::new(),
            laptop_type: ANY.to_string(),
            min_screen_size: 11.0,
            touch_screen: TouchPreference::Any,
            min_ram: 4.0,
            min_storage: 128.0,
            cpu_brand: ANY.to_string(),
            gpu_type: ANY.to_string(),
            gpu_brand: ANY.to_string(),
        }
    }
}

impl Preferences {
    /// Restore the documented defaults in place
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any field differs from its default
    pub fn differs_from_default(&self) -> bool {
        *self != Self::default()
    }
}

/// Every predicate a laptop must pass to appear in the view
pub fn matches(laptop: &Laptop, prefs: &Preferences, query: &str) -> bool {
    matches_query(laptop, query)
        && laptop.price >= prefs.min_price
        && laptop.price <= prefs.max_price
        && (prefs.brand.is_empty() || eq_trimmed_ignore_case(&laptop.brand, &prefs.brand))
        && (prefs.laptop_type == ANY || eq_trimmed_ignore_case(&laptop.segment, &prefs.laptop_type))
        && laptop.ram_gb >= prefs.min_ram
        && laptop.storage_gb >= prefs.min_storage
        && laptop.size_inches >= prefs.min_screen_size
        && (prefs.cpu_brand == ANY || contains_ignore_case(&laptop.cpu_brand, &prefs.cpu_brand))
        && (prefs.gpu_type == ANY || laptop.gpu_type == prefs.gpu_type)
        && (prefs.gpu_brand == ANY || contains_ignore_case(&laptop.gpu_brand, &prefs.gpu_brand))
        && prefs.touch_screen.accepts(laptop.touch)
}

/// Free-text query over model, brand and segment
pub fn matches_query(laptop: &Laptop, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    laptop.model.to_lowercase().contains(&needle)
        || laptop.brand.to_lowercase().contains(&needle)
        || laptop.segment.to_lowercase().contains(&needle)
}

/// Ranking comparator: star rating descending, then price descending
pub fn rank_order(a: &Laptop, b: &Laptop) -> Ordering {
    b.star_rating
        .total_cmp(&a.star_rating)
        .then_with(|| b.price.total_cmp(&a.price))
}

/// Stable in-place ranking
pub fn rank(laptops: &mut [&Laptop]) {
    laptops.sort_by(|a, b| rank_order(a, b));
}

/// Filtered and ranked view over `laptops`
pub fn filter_and_rank<'a>(laptops: &'a [Laptop], prefs: &Preferences, query: &str) -> Vec<&'a Laptop> {
    let mut view: Vec<&Laptop> = laptops
        .iter()
        .filter(|laptop| matches(laptop, prefs, query))
        .collect();
    rank(&mut view);
    view
}

/// Whether the UI should offer a reset (advisory, never affects filtering)
pub fn is_any_filter_active(prefs: &Preferences, query: &str) -> bool {
    !query.is_empty() || prefs.differs_from_default()
}

/// Admin raw-row search: brand or model contains the term, input order kept
pub fn search_rows<'a>(laptops: &'a [Laptop], search: &str) -> Vec<&'a Laptop> {
    let needle = search.to_lowercase();
    laptops
        .iter()
        .filter(|l| {
            l.model.to_lowercase().contains(&needle) || l.brand.to_lowercase().contains(&needle)
        })
        .collect()
}

fn eq_trimmed_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(brand: &str, rating: f64, price: f64) -> Laptop {
        Laptop {
            brand: brand.to_string(),
            model: format!("{} model", brand),
            star_rating: rating,
            price,
            ram_gb: 16.0,
            storage_gb: 512.0,
            size_inches: 14.0,
            ..Laptop::default()
        }
    }

    #[test]
    fn test_touch_preference_accepts() {
        assert!(TouchPreference::Any.accepts(true));
        assert!(TouchPreference::Any.accepts(false));
        assert!(TouchPreference::Yes.accepts(true));
        assert!(!TouchPreference::Yes.accepts(false));
        assert!(TouchPreference::No.accepts(false));
        assert!(!TouchPreference::No.accepts(true));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut prefs = Preferences {
            min_price: 500.0,
            brand: "Dell".into(),
            touch_screen: TouchPreference::Yes,
            ..Preferences::default()
        };
        prefs.reset();
        assert_eq!(prefs.min_price, 0.0);
        assert_eq!(prefs.max_price, 10000.0);
        assert_eq!(prefs.brand, "");
        assert_eq!(prefs.laptop_type, "Any");
        assert_eq!(prefs.min_screen_size, 11.0);
        assert_eq!(prefs.touch_screen, TouchPreference::Any);
        assert_eq!(prefs.min_ram, 4.0);
        assert_eq!(prefs.min_storage, 128.0);
        assert_eq!(prefs.cpu_brand, "Any");
        assert_eq!(prefs.gpu_type, "Any");
        assert_eq!(prefs.gpu_brand, "Any");
    }

    #[test]
    fn test_rank_rating_then_price() {
        let laptops = vec![
            laptop("A", 4.8, 999.0),
            laptop("B", 4.9, 500.0),
            laptop("C", 4.8, 1299.0),
        ];
        let view = filter_and_rank(&laptops, &Preferences::default(), "");
        let brands: Vec<&str> = view.iter().map(|l| l.brand.as_str()).collect();
        assert_eq!(brands, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_rank_is_stable_for_exact_ties() {
        let mut first = laptop("Same", 4.5, 800.0);
        first.ref_id = "REF-001".into();
        let mut second = first.clone();
        second.ref_id = "REF-002".into();
        let laptops = vec![first, second];

        let view = filter_and_rank(&laptops, &Preferences::default(), "");
        assert_eq!(view[0].ref_id, "REF-001");
        assert_eq!(view[1].ref_id, "REF-002");
    }

    #[test]
    fn test_query_matches_segment() {
        let mut gaming = laptop("MSI", 4.0, 1500.0);
        gaming.segment = "Gaming".into();
        assert!(matches_query(&gaming, "GAM"));
        assert!(matches_query(&gaming, "msi"));
        assert!(!matches_query(&gaming, "zenbook"));
        assert!(matches_query(&gaming, ""));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let l = laptop("Dell", 4.0, 1000.0);
        let prefs = Preferences {
            min_price: 1000.0,
            max_price: 1000.0,
            ..Preferences::default()
        };
        assert!(matches(&l, &prefs, ""));
    }

    #[test]
    fn test_gpu_type_is_case_sensitive() {
        let mut l = laptop("Dell", 4.0, 1000.0);
        l.gpu_type = "Dedicated".into();
        let exact = Preferences {
            gpu_type: "Dedicated".into(),
            ..Preferences::default()
        };
        let lower = Preferences {
            gpu_type: "dedicated".into(),
            ..Preferences::default()
        };
        assert!(matches(&l, &exact, ""));
        assert!(!matches(&l, &lower, ""));
    }

    #[test]
    fn test_cpu_and_gpu_brand_substring() {
        let mut l = laptop("Lenovo", 4.0, 1000.0);
        l.cpu_brand = "AMD Ryzen".into();
        l.gpu_brand = "NVIDIA GeForce".into();
        let prefs = Preferences {
            cpu_brand: "amd".into(),
            gpu_brand: "Nvidia".into(),
            ..Preferences::default()
        };
        assert!(matches(&l, &prefs, ""));

        let intel = Preferences {
            cpu_brand: "Intel".into(),
            ..Preferences::default()
        };
        assert!(!matches(&l, &intel, ""));
    }

    #[test]
    fn test_filter_active_detection() {
        let prefs = Preferences::default();
        assert!(!is_any_filter_active(&prefs, ""));
        assert!(is_any_filter_active(&prefs, "asus"));

        let changed = Preferences {
            max_price: 5000.0,
            ..Preferences::default()
        };
        assert!(is_any_filter_active(&changed, ""));
    }

    #[test]
    fn test_search_rows_brand_or_model_only() {
        let mut l = laptop("Acer", 4.0, 700.0);
        l.segment = "Budget".into();
        let laptops = vec![l];
        assert_eq!(search_rows(&laptops, "acer").len(), 1);
        assert_eq!(search_rows(&laptops, "budget").len(), 0);
        assert_eq!(search_rows(&laptops, "").len(), 1);
    }

    #[test]
    fn test_preferences_partial_deserialize() {
        let prefs: Preferences = serde_json::from_str(r#"{"min_ram": 16, "touch_screen": "yes"}"#).unwrap();
        assert_eq!(prefs.min_ram, 16.0);
        assert_eq!(prefs.touch_screen, TouchPreference::Yes);
        assert_eq!(prefs.max_price, 10000.0);
        assert_eq!(prefs.laptop_type, "Any");
    }
}
