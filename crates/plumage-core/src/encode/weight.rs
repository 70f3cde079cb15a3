use crate::color::Rgb;
use crate::encode::base::DEFAULT_COLOR;
use crate::model::GraphModel;
use crate::style::{Selector, StyleRule};

/// Base color used when the line color is left at its default.
pub const WEIGHT_FALLBACK_COLOR: &str = "#003319";

/// Per-edge `line-color` rules shading each edge from white (lightest weight) to the base
/// color (heaviest weight). Empty when every finite weight is the same.
pub fn weight_color_rules(model: &GraphModel, line_color: &str) -> Vec<StyleRule> {
    let base = if line_color != DEFAULT_COLOR {
        line_color
    } else {
        WEIGHT_FALLBACK_COLOR
    };
    let Some(base) = Rgb::parse(base) else {
        tracing::warn!(color = base, "unparseable base color; skipping weight coloring");
        return Vec::new();
    };

    let (min, max) = model
        .edges()
        .map(|(_, _, w)| w)
        .filter(|w| w.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
            (lo.min(w), hi.max(w))
        });
    if min >= max {
        return Vec::new();
    }

    model
        .edges()
        .filter(|(_, _, w)| w.is_finite())
        .map(|(source, target, w)| {
            let t = (w - min) / (max - min);
            StyleRule::new(Selector::edge_between(source, target))
                .with("line-color", base.tint_toward_white(t).to_hex())
        })
        .collect()
}
