//! Graph model: the attributed directed graph plus lazily computed, cached analytics.

use crate::error::{Error, Result};
use crate::utils::fmt_number;
use indexmap::IndexMap;
use plumage_graphlib::{Graph, alg};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Column holding the node identifier in the node table.
pub const ID_COLUMN: &str = "ID";

/// A single attribute cell. Columns may mix variants; classification decides how a column
/// is used for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Null, or a float NaN (the table representation of a missing number).
    pub fn is_null(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Identifier form used for node ids taken from table cells.
    pub fn to_id(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(v) => f.write_str(&fmt_number(*v)),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

pub type Row = IndexMap<String, AttrValue>;

/// Node attribute table: rows in input order plus the union of their columns in first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<Row>")]
pub struct NodeTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl From<Vec<Row>> for NodeTable {
    fn from(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }
}

impl NodeTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// A table with no `ID` column at all gets one holding each row's index.
    fn with_row_ids(mut self) -> Self {
        if self.rows.is_empty() || self.columns.iter().any(|c| c == ID_COLUMN) {
            return self;
        }
        for (ix, row) in self.rows.iter_mut().enumerate() {
            row.insert(ID_COLUMN.to_string(), AttrValue::Int(ix as i64));
        }
        self.columns.push(ID_COLUMN.to_string());
        self
    }

    /// Cells of `column` in row order; rows lacking the column yield `Null`.
    pub fn column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a AttrValue> + 'a {
        static NULL: AttrValue = AttrValue::Null;
        self.rows.iter().map(move |r| r.get(column).unwrap_or(&NULL))
    }
}

/// One edge-table row. Columns other than `Source`/`Target`/`Weight` become edge attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeRow {
    #[serde(rename = "Source", default)]
    pub source: AttrValue,
    #[serde(rename = "Target", default)]
    pub target: AttrValue,
    #[serde(rename = "Weight", default)]
    pub weight: Option<f64>,
    #[serde(flatten)]
    pub attributes: Row,
}

impl EdgeRow {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            source: AttrValue::Text(source.into()),
            target: AttrValue::Text(target.into()),
            weight,
            attributes: Row::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub weight: f64,
    pub attributes: Row,
}

/// Whole-graph results, each computed on first use.
#[derive(Debug, Default)]
struct Analytics {
    degree_centrality: OnceLock<Vec<f64>>,
    betweenness: OnceLock<Vec<f64>>,
    closeness: OnceLock<Vec<f64>>,
    edge_betweenness: OnceLock<Vec<f64>>,
    clustering: OnceLock<Vec<f64>>,
    triangles: OnceLock<Vec<usize>>,
}

/// The attributed graph a session explores.
///
/// Read-only once built; analytics are cached per instance and discarded whenever
/// [`GraphModel::add_node`] or [`GraphModel::add_edge`] changes the structure.
#[derive(Debug, Default)]
pub struct GraphModel {
    graph: Graph<Row, EdgeData>,
    nodes: NodeTable,
    analytics: Analytics,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model from tables, drawing missing edge weights from the thread RNG.
    pub fn from_tables(nodes: NodeTable, edges: Vec<EdgeRow>) -> Result<Self> {
        Self::from_tables_with_rng(nodes, edges, &mut rand::thread_rng())
    }

    /// Edges are inserted first (so their endpoints lead the node order), then node rows
    /// attach attributes. A row without a weight gets one drawn uniformly from `[0, 1)`.
    pub fn from_tables_with_rng<R: Rng + ?Sized>(
        nodes: NodeTable,
        edges: Vec<EdgeRow>,
        rng: &mut R,
    ) -> Result<Self> {
        let mut model = Self::new();

        let mut synthesized = 0usize;
        for (row_ix, row) in edges.into_iter().enumerate() {
            let source = row.source.to_id().ok_or(Error::MissingColumn {
                table: "edge",
                column: "Source",
                row: row_ix,
            })?;
            let target = row.target.to_id().ok_or(Error::MissingColumn {
                table: "edge",
                column: "Target",
                row: row_ix,
            })?;
            let weight = match row.weight.filter(|w| !w.is_nan()) {
                Some(w) => w,
                None => {
                    synthesized += 1;
                    rng.r#gen::<f64>()
                }
            };
            model.add_edge(source, target, weight, row.attributes);
        }
        if synthesized > 0 {
            tracing::debug!(synthesized, "drew missing edge weights uniformly from [0, 1)");
        }

        let nodes = nodes.with_row_ids();
        for (row_ix, row) in nodes.rows().iter().enumerate() {
            let id = row
                .get(ID_COLUMN)
                .and_then(AttrValue::to_id)
                .ok_or(Error::MissingColumn {
                    table: "node",
                    column: ID_COLUMN,
                    row: row_ix,
                })?;
            model.add_node(id, row.clone());
        }
        model.nodes = nodes;

        tracing::debug!(
            nodes = model.graph.node_count(),
            edges = model.graph.edge_count(),
            "graph model loaded"
        );
        Ok(model)
    }

    /// Adds `id` or merges `attributes` into an existing node's attributes.
    pub fn add_node(&mut self, id: impl Into<String>, attributes: Row) -> &mut Self {
        let id = id.into();
        match self.graph.node_mut(&id) {
            Some(existing) => existing.extend(attributes),
            None => {
                self.graph.set_node(id, attributes);
                self.analytics = Analytics::default();
            }
        }
        self
    }

    /// Adds or replaces the `source -> target` edge; unknown endpoints are created with
    /// empty attribute sets.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
        attributes: Row,
    ) -> &mut Self {
        let before = self.graph.generation();
        self.graph
            .set_edge(source, target, EdgeData { weight, attributes });
        if self.graph.generation() != before {
            self.analytics = Analytics::default();
        }
        self
    }

    pub fn graph(&self) -> &Graph<Row, EdgeData> {
        &self.graph
    }

    /// The node attribute table as loaded (drives attribute classification and raw-column
    /// encodings).
    pub fn node_table(&self) -> &NodeTable {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.graph.has_edge(source, target)
    }

    /// `(source, target, weight)` in edge insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edges().map(move |k| {
            let weight = self
                .graph
                .edge(&k.v, &k.w)
                .map(|e| e.weight)
                .unwrap_or(f64::NAN);
            (k.v.as_str(), k.w.as_str(), weight)
        })
    }

    pub fn degree(&self, id: &str) -> Option<usize> {
        self.graph.degree(id)
    }

    pub fn in_degree(&self, id: &str) -> Option<usize> {
        self.graph.in_degree(id)
    }

    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.graph.out_degree(id)
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.graph.edge(source, target).map(|e| e.weight)
    }

    pub fn attributes(&self, id: &str) -> Option<&Row> {
        self.graph.node(id)
    }

    pub fn edge_attributes(&self, source: &str, target: &str) -> Option<&Row> {
        self.graph.edge(source, target).map(|e| &e.attributes)
    }

    fn node_metric<T: Copy>(&self, id: &str, values: &[T]) -> Option<T> {
        self.graph.node_ix(id).map(|ix| values[ix])
    }

    fn degree_centralities(&self) -> &[f64] {
        self.analytics
            .degree_centrality
            .get_or_init(|| alg::degree_centrality(&self.graph))
    }

    fn betweenness_centralities(&self) -> &[f64] {
        self.analytics
            .betweenness
            .get_or_init(|| alg::betweenness_centrality(&self.graph))
    }

    fn closeness_centralities(&self) -> &[f64] {
        self.analytics
            .closeness
            .get_or_init(|| alg::closeness_centrality(&self.graph))
    }

    fn edge_betweenness_centralities(&self) -> &[f64] {
        self.analytics
            .edge_betweenness
            .get_or_init(|| alg::edge_betweenness_centrality(&self.graph))
    }

    pub fn degree_centrality(&self, id: &str) -> Option<f64> {
        self.node_metric(id, self.degree_centralities())
    }

    pub fn betweenness_centrality(&self, id: &str) -> Option<f64> {
        self.node_metric(id, self.betweenness_centralities())
    }

    pub fn closeness_centrality(&self, id: &str) -> Option<f64> {
        self.node_metric(id, self.closeness_centralities())
    }

    pub fn clustering_coefficient(&self, id: &str) -> Option<f64> {
        let values = self
            .analytics
            .clustering
            .get_or_init(|| alg::clustering(&self.graph));
        self.node_metric(id, values)
    }

    pub fn triangle_count(&self, id: &str) -> Option<usize> {
        let values = self
            .analytics
            .triangles
            .get_or_init(|| alg::triangles(&self.graph));
        self.node_metric(id, values)
    }

    pub fn edge_betweenness_centrality(&self, source: &str, target: &str) -> Option<f64> {
        let ix = self.graph.edge_ix(source, target)?;
        Some(self.edge_betweenness_centralities()[ix])
    }

    /// Hop counts from `id` to every node it reaches, in breadth-first order (itself first).
    pub fn shortest_path_lengths(&self, id: &str) -> Option<IndexMap<String, usize>> {
        let ix = self.graph.node_ix(id)?;
        Some(
            alg::shortest_path_lengths(&self.graph, ix)
                .into_iter()
                .filter_map(|(v, d)| self.graph.node_id(v).map(|s| (s.to_string(), d)))
                .collect(),
        )
    }

    fn keyed(&self, values: &[f64]) -> IndexMap<String, f64> {
        self.graph
            .nodes()
            .zip(values.iter().copied())
            .map(|(id, v)| (id.to_string(), v))
            .collect()
    }

    /// Node id -> degree centrality, in node order.
    pub fn degree_centrality_map(&self) -> IndexMap<String, f64> {
        self.keyed(self.degree_centralities())
    }

    pub fn betweenness_centrality_map(&self) -> IndexMap<String, f64> {
        self.keyed(self.betweenness_centralities())
    }

    pub fn closeness_centrality_map(&self) -> IndexMap<String, f64> {
        self.keyed(self.closeness_centralities())
    }
}
