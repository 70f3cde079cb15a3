//! Rule builders: base styles, attribute encodings, and weight coloring.

pub mod attribute;
pub mod base;
pub mod weight;

pub use attribute::{
    SIZE_ACCENT_COLOR, SizeStatistic, categorical_color_rules, numeric_size_rules,
    size_rules_for_statistic, sizing_rules,
};
pub use base::{DEFAULT_COLOR, base_rules, line_color};
pub use weight::{WEIGHT_FALLBACK_COLOR, weight_color_rules};
