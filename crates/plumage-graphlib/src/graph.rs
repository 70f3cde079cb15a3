//! The core `Graph` container plus whole-graph algorithms in [`alg`].

pub mod alg;
mod edge_key;
mod entries;

use rustc_hash::FxBuildHasher;

pub use edge_key::EdgeKey;
use edge_key::EdgeKeyView;
use entries::{Adjacency, EdgeEntry, NodeEntry};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph<N, E>
where
    N: Default,
{
    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    adjacency: Adjacency,

    // Bumped on every structural change (new node, new edge). Label updates leave it alone.
    generation: u64,
}

impl<N, E> Default for Graph<N, E>
where
    N: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E>
where
    N: Default,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            adjacency: Adjacency::default(),
            generation: 0,
        }
    }

    /// Structural version of the graph. Results derived from the structure can be cached
    /// against this value.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        self.push_node(id, label);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.push_node(id, N::default());
        self
    }

    fn push_node(&mut self, id: String, label: N) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self.adjacency.push_node();
        self.generation = self.generation.wrapping_add(1);
        idx
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Insertion position of `id`, the index used by every [`alg`] result vector.
    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_id(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    /// Adds the `v -> w` edge, creating missing endpoints with default labels. Setting an
    /// existing ordered pair replaces its label.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>, label: E) -> &mut Self {
        let v = v.into();
        let w = w.into();

        if let Some(idx) = self.edge_ix(&v, &w) {
            self.edges[idx].label = label;
            return self;
        }

        self.ensure_node(v.as_str());
        self.ensure_node(w.as_str());
        let v_ix = self.node_index[v.as_str()];
        let w_ix = self.node_index[w.as_str()];

        let idx = self.edges.len();
        let key = EdgeKey { v, w };
        self.edges.push(EdgeEntry {
            key: key.clone(),
            v_ix,
            w_ix,
            label,
        });
        self.edge_index.insert(key, idx);
        self.adjacency.push_edge(idx, v_ix, w_ix);
        self.generation = self.generation.wrapping_add(1);
        self
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_ix(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        let idx = self.edge_ix(v, w)?;
        Some(&self.edges[idx].label)
    }

    /// Insertion position of the `v -> w` edge, the index used by per-edge [`alg`] results.
    pub fn edge_ix(&self, v: &str, w: &str) -> Option<usize> {
        self.edge_index.get(&EdgeKeyView { v, w }).copied()
    }

    pub fn out_degree(&self, v: &str) -> Option<usize> {
        let &v_ix = self.node_index.get(v)?;
        Some(self.adjacency.out[v_ix].len())
    }

    pub fn in_degree(&self, v: &str) -> Option<usize> {
        let &v_ix = self.node_index.get(v)?;
        Some(self.adjacency.in_[v_ix].len())
    }

    /// In-degree plus out-degree; a self-loop therefore counts twice.
    pub fn degree(&self, v: &str) -> Option<usize> {
        let &v_ix = self.node_index.get(v)?;
        Some(self.adjacency.out[v_ix].len() + self.adjacency.in_[v_ix].len())
    }

    pub(crate) fn out_edge_ixs(&self, v_ix: usize) -> &[usize] {
        &self.adjacency.out[v_ix]
    }

    pub(crate) fn in_edge_ixs(&self, v_ix: usize) -> &[usize] {
        &self.adjacency.in_[v_ix]
    }

    pub(crate) fn edge_entry_endpoints(&self, edge_ix: usize) -> (usize, usize) {
        let e = &self.edges[edge_ix];
        (e.v_ix, e.w_ix)
    }
}
