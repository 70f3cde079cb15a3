//! Lenient validation of free-form visual values. Invalid input never fails a run; it falls
//! back to the caller's default.

use crate::color::Rgb;

/// Returns `raw` with whitespace removed if it is a usable color, otherwise `default`.
///
/// Accepted: CSS named colors (any case), `#rgb`, `#rrggbb`, and `rgb(r,g,b)` with exactly
/// three integer channels in `[0, 255]`.
pub fn validate_color(raw: &str, default: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return default.to_string();
    }
    match Rgb::parse(&compact) {
        Some(_) => compact,
        None => {
            tracing::debug!(value = raw, default, "rejected color value");
            default.to_string()
        }
    }
}

/// Returns `raw` (trimmed) if it is a finite number followed by `px` or `%`, otherwise
/// `default`.
pub fn validate_px_or_percent(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix('%'));
    match number {
        Some(n) if n.trim().parse::<f64>().is_ok_and(f64::is_finite) => trimmed.to_string(),
        _ => default.to_string(),
    }
}
