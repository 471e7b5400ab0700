//! Integration tests for the filter/rank engine and facets

use lapify_common::filter::{
    distinct_brands, distinct_segments, filter_and_rank, is_any_filter_active, Preferences,
    TouchPreference,
};
use lapify_common::{parse_catalog, Laptop};

fn listing(brand: &str, model: &str, ram: f64, storage: f64, price: f64, rating: f64) -> Laptop {
    Laptop {
        ref_id: format!("REF-{}", model),
        brand: brand.to_string(),
        model: model.to_string(),
        ram_gb: ram,
        storage_gb: storage,
        price,
        star_rating: rating,
        size_inches: 15.6,
        ..Laptop::default()
    }
}

#[test]
fn test_brand_ram_storage_price_example() {
    let pool = vec![
        listing("ASUS", "Vivobook 16", 16.0, 1024.0, 1099.0, 4.5),
        listing("Dell", "XPS 15", 32.0, 1024.0, 1400.0, 4.6),
    ];
    let prefs = Preferences {
        min_ram: 16.0,
        min_storage: 512.0,
        brand: "Asus".into(),
        max_price: 1500.0,
        ..Preferences::default()
    };

    let view = filter_and_rank(&pool, &prefs, "");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].brand, "ASUS");
}

#[test]
fn test_equal_ratings_rank_higher_price_first() {
    let pool = vec![
        listing("HP", "Cheaper", 16.0, 512.0, 999.0, 4.8),
        listing("HP", "Pricier", 16.0, 512.0, 1299.0, 4.8),
    ];
    let view = filter_and_rank(&pool, &Preferences::default(), "");
    assert_eq!(view[0].price, 1299.0);
    assert_eq!(view[1].price, 999.0);
}

#[test]
fn test_filtering_does_not_mutate_input() {
    let pool = vec![
        listing("HP", "A", 16.0, 512.0, 999.0, 3.0),
        listing("HP", "B", 16.0, 512.0, 1299.0, 4.8),
    ];
    let before = pool.clone();
    let _ = filter_and_rank(&pool, &Preferences::default(), "");
    assert_eq!(pool, before);
}

#[test]
fn test_defaults_exclude_small_and_underspecced() {
    let mut tiny = listing("Acer", "Tiny", 8.0, 256.0, 300.0, 4.0);
    tiny.size_inches = 10.1;
    let low_ram = listing("Acer", "LowRam", 2.0, 256.0, 300.0, 4.0);
    let low_storage = listing("Acer", "LowStorage", 8.0, 64.0, 300.0, 4.0);
    let ok = listing("Acer", "Ok", 8.0, 256.0, 300.0, 4.0);

    let pool = vec![tiny, low_ram, low_storage, ok];
    let view = filter_and_rank(&pool, &Preferences::default(), "");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].model, "Ok");
}

#[test]
fn test_segment_filter_trimmed_case_insensitive() {
    let mut gaming = listing("MSI", "Katana", 16.0, 512.0, 1100.0, 4.1);
    gaming.segment = " Gaming ".into();
    let office = listing("HP", "ProBook", 16.0, 512.0, 800.0, 4.0);

    let pool = vec![gaming, office];
    let prefs = Preferences {
        laptop_type: "gaming".into(),
        ..Preferences::default()
    };
    let view = filter_and_rank(&pool, &prefs, "");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].brand, "MSI");
}

#[test]
fn test_touch_requirement() {
    let mut touch = listing("HP", "Touch", 16.0, 512.0, 900.0, 4.0);
    touch.touch = true;
    let plain = listing("HP", "Plain", 16.0, 512.0, 900.0, 4.0);
    let pool = vec![touch, plain];

    let yes = Preferences {
        touch_screen: TouchPreference::Yes,
        ..Preferences::default()
    };
    let no = Preferences {
        touch_screen: TouchPreference::No,
        ..Preferences::default()
    };
    assert_eq!(filter_and_rank(&pool, &yes, "")[0].model, "Touch");
    assert_eq!(filter_and_rank(&pool, &no, "")[0].model, "Plain");
    assert_eq!(filter_and_rank(&pool, &Preferences::default(), "").len(), 2);
}

#[test]
fn test_reset_after_changes_matches_default() {
    let mut prefs = Preferences {
        min_price: 100.0,
        max_price: 2000.0,
        brand: "Dell".into(),
        laptop_type: "Gaming".into(),
        min_screen_size: 15.0,
        touch_screen: TouchPreference::No,
        min_ram: 32.0,
        min_storage: 1024.0,
        cpu_brand: "Intel".into(),
        gpu_type: "Dedicated".into(),
        gpu_brand: "NVIDIA".into(),
    };
    assert!(is_any_filter_active(&prefs, ""));
    prefs.reset();
    assert_eq!(prefs, Preferences::default());
    assert!(!is_any_filter_active(&prefs, ""));
}

#[test]
fn test_facets_from_parsed_sheet() {
    let text = "Brand,Model,Segment\nasus,Zenbook,ultraportable\nASUS ,Vivobook,Budget\nDell,XPS,Ultraportable\nLenovo,ThinkPad";
    let laptops = parse_catalog(text);
    assert_eq!(distinct_brands(&laptops), vec!["Asus", "Dell", "Lenovo"]);
    assert_eq!(
        distinct_segments(&laptops),
        vec!["Budget", "General", "Ultraportable"]
    );
}
