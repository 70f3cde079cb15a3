//! Data-driven node encodings: size by a numeric statistic, color by a categorical column.

use crate::classify::{
    AttributeColumns, BETWEENNESS_CENTRALITY, CLOSENESS_CENTRALITY, DEGREE_CENTRALITY, NONE_CHOICE,
};
use crate::model::{AttrValue, GraphModel, ID_COLUMN};
use crate::palette::Palette;
use crate::style::{Literal, Selector, StyleRule};
use indexmap::IndexMap;

/// Background of nodes sized by a statistic.
pub const SIZE_ACCENT_COLOR: &str = "#736899";
pub const DEFAULT_MAX_SIZE: f64 = 50.0;

/// What drives node size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeStatistic {
    RawColumn(String),
    DegreeCentrality,
    BetweennessCentrality,
    ClosenessCentrality,
}

impl SizeStatistic {
    /// Maps a sizing menu choice. `None` for the `"None"` entry and for columns that are not
    /// numeric.
    pub fn from_choice(choice: &str, columns: &AttributeColumns) -> Option<Self> {
        match choice {
            NONE_CHOICE | "" => None,
            DEGREE_CENTRALITY => Some(SizeStatistic::DegreeCentrality),
            BETWEENNESS_CENTRALITY => Some(SizeStatistic::BetweennessCentrality),
            CLOSENESS_CENTRALITY => Some(SizeStatistic::ClosenessCentrality),
            column if columns.is_numeric(column) => {
                Some(SizeStatistic::RawColumn(column.to_string()))
            }
            unknown => {
                tracing::warn!(choice = unknown, "unknown sizing statistic; skipping node sizing");
                None
            }
        }
    }
}

fn scale_for(values: impl Iterator<Item = f64>, max_size: f64) -> f64 {
    let max = values
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 || !max.is_finite() {
        1.0
    } else {
        max_size / max
    }
}

fn size_rule(selector: Selector, size: f64) -> StyleRule {
    StyleRule::new(selector)
        .with("width", size)
        .with("height", size)
        .with("background-color", SIZE_ACCENT_COLOR)
}

/// The selector value for a node's `ID` cell: numbers bare, text quoted verbatim. Nodes
/// without a stored id (edge endpoints with no table row) are matched by their quoted id.
fn id_literal(model: &GraphModel, id: &str) -> Literal {
    match model.attributes(id).and_then(|row| row.get(ID_COLUMN)) {
        Some(AttrValue::Int(i)) => Literal::Number(*i as f64),
        Some(AttrValue::Float(f)) if f.is_finite() => Literal::Number(*f),
        Some(AttrValue::Text(s)) => Literal::Text(s.clone()),
        _ => Literal::Text(id.to_string()),
    }
}

/// One `[ID = value]` rule per entry of a per-node statistic, in map order.
pub fn size_rules_for_statistic(
    model: &GraphModel,
    stat: &IndexMap<String, f64>,
    max_size: f64,
) -> Vec<StyleRule> {
    let scale = scale_for(stat.values().copied(), max_size);
    stat.iter()
        .filter(|(_, v)| !v.is_nan())
        .map(|(id, value)| {
            size_rule(
                Selector::attr_equals(ID_COLUMN, id_literal(model, id)),
                value * scale,
            )
        })
        .collect()
}

/// One `[column = value]` rule per distinct non-null value of a numeric node column, in
/// first-occurrence order.
pub fn numeric_size_rules(model: &GraphModel, column: &str, max_size: f64) -> Vec<StyleRule> {
    let mut distinct: Vec<f64> = Vec::new();
    for value in model.node_table().column(column).filter_map(AttrValue::as_f64) {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    let scale = scale_for(distinct.iter().copied(), max_size);
    distinct
        .into_iter()
        .map(|value| {
            size_rule(
                Selector::attr_equals(column, Literal::Number(value)),
                value * scale,
            )
        })
        .collect()
}

/// Sizing rules for `stat`; statistics are read from the model's cached analytics.
pub fn sizing_rules(model: &GraphModel, stat: &SizeStatistic, max_size: f64) -> Vec<StyleRule> {
    match stat {
        SizeStatistic::RawColumn(column) => numeric_size_rules(model, column, max_size),
        SizeStatistic::DegreeCentrality => {
            size_rules_for_statistic(model, &model.degree_centrality_map(), max_size)
        }
        SizeStatistic::BetweennessCentrality => {
            size_rules_for_statistic(model, &model.betweenness_centrality_map(), max_size)
        }
        SizeStatistic::ClosenessCentrality => {
            size_rules_for_statistic(model, &model.closeness_centrality_map(), max_size)
        }
    }
}

/// One `[column = "value"]` rule per distinct non-null value, colored from `palette` in
/// first-occurrence order.
pub fn categorical_color_rules(
    model: &GraphModel,
    column: &str,
    palette: Palette,
) -> Vec<StyleRule> {
    let mut distinct: Vec<String> = Vec::new();
    for value in model.node_table().column(column).filter(|v| !v.is_null()) {
        let text = value.to_string();
        if !distinct.contains(&text) {
            distinct.push(text);
        }
    }
    let colors = palette.colors(distinct.len());
    distinct
        .into_iter()
        .zip(colors)
        .map(|(value, color)| {
            StyleRule::new(Selector::attr_equals(column, Literal::Text(value)))
                .with("background-color", color)
        })
        .collect()
}
