mod controls;
mod palette;
mod style;

use crate::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

pub(crate) fn node_table(rows: serde_json::Value) -> NodeTable {
    serde_json::from_value(rows).unwrap()
}

pub(crate) fn edge_rows(rows: serde_json::Value) -> Vec<EdgeRow> {
    serde_json::from_value(rows).unwrap()
}

/// `a -> b -> c -> a` plus `a -> d`, with a numeric `age` and categorical `team` column.
pub(crate) fn sample_model() -> GraphModel {
    let nodes = node_table(json!([
        { "ID": "a", "age": 30, "team": "red" },
        { "ID": "b", "age": 40, "team": "blue" },
        { "ID": "c", "age": null, "team": "red" },
        { "ID": "d", "age": 20, "team": null },
    ]));
    let edges = edge_rows(json!([
        { "Source": "a", "Target": "b", "Weight": 1.0 },
        { "Source": "b", "Target": "c", "Weight": 2.0 },
        { "Source": "c", "Target": "a", "Weight": 3.0 },
        { "Source": "a", "Target": "d", "Weight": 4.0 },
    ]));
    GraphModel::from_tables_with_rng(nodes, edges, &mut StdRng::seed_from_u64(7)).unwrap()
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
