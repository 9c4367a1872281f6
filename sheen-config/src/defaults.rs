//! Default values for font configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! [`FontConfig`](crate::FontConfig) fields.

pub fn font_size() -> f64 {
    12.0
}
