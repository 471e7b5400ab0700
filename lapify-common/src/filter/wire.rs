//! Lenient wire form of [`Preferences`]
//!
//! Browsers send a cleared number input as an empty value (`min_price=`).
//! Blank numbers read as absent and take the field default; text that is not
//! a number is still rejected.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::{Preferences, TouchPreference};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PreferencesWire {
    #[serde(deserialize_with = "blank_as_none")]
    min_price: Option<f64>,
    #[serde(deserialize_with = "blank_as_none")]
    max_price: Option<f64>,
    brand: Option<String>,
    laptop_type: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    min_screen_size: Option<f64>,
    touch_screen: Option<TouchPreference>,
    #[serde(deserialize_with = "blank_as_none")]
    min_ram: Option<f64>,
    #[serde(deserialize_with = "blank_as_none")]
    min_storage: Option<f64>,
    cpu_brand: Option<String>,
    gpu_type: Option<String>,
    gpu_brand: Option<String>,
}

impl From<PreferencesWire> for Preferences {
    fn from(wire: PreferencesWire) -> Self {
        let d = Preferences::default();
        Self {
            min_price: wire.min_price.unwrap_or(d.min_price),
            max_price: wire.max_price.unwrap_or(d.max_price),
            brand: wire.brand.unwrap_or(d.brand),
            laptop_type: wire.laptop_type.unwrap_or(d.laptop_type),
            min_screen_size: wire.min_screen_size.unwrap_or(d.min_screen_size),
            touch_screen: wire.touch_screen.unwrap_or(d.touch_screen),
            min_ram: wire.min_ram.unwrap_or(d.min_ram),
            min_storage: wire.min_storage.unwrap_or(d.min_storage),
            cpu_brand: wire.cpu_brand.unwrap_or(d.cpu_brand),
            gpu_type: wire.gpu_type.unwrap_or(d.gpu_type),
            gpu_brand: wire.gpu_brand.unwrap_or(d.gpu_brand),
        }
    }
}

/// Number from a JSON number or a query-string value; blank or null is `None`
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BlankAsNone;

    impl<'de> Visitor<'de> for BlankAsNone {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or an empty value")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }
            v.parse::<f64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(BlankAsNone)
}
