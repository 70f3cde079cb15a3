//! Internal storage entries for [`Graph`](super::Graph).

use super::EdgeKey;

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry<N> {
    pub(in crate::graph) id: String,
    pub(in crate::graph) label: N,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) key: EdgeKey,
    pub(in crate::graph) v_ix: usize,
    pub(in crate::graph) w_ix: usize,
    pub(in crate::graph) label: E,
}

/// Incidence lists, indexed by node position, holding edge positions.
///
/// Kept up to date on every insertion (the graph never removes elements), so queries stay on
/// `&self` without interior mutability and a built graph is `Sync`.
#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct Adjacency {
    pub(in crate::graph) out: Vec<Vec<usize>>,
    pub(in crate::graph) in_: Vec<Vec<usize>>,
}

impl Adjacency {
    pub(in crate::graph) fn push_node(&mut self) {
        self.out.push(Vec::new());
        self.in_.push(Vec::new());
    }

    pub(in crate::graph) fn push_edge(&mut self, edge_ix: usize, v_ix: usize, w_ix: usize) {
        self.out[v_ix].push(edge_ix);
        self.in_[w_ix].push(edge_ix);
    }
}
