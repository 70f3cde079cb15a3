//! Whole-graph analytics.
//!
//! Every function returns a dense vector aligned with node insertion order (or edge insertion
//! order for per-edge results). All path-based measures are unweighted hop counts.
//!
//! Normalization conventions:
//! - degree centrality: `degree / (n - 1)`; a single-node graph reports `1.0`.
//! - betweenness: Brandes accumulation over ordered pairs, scaled by `1 / ((n - 1)(n - 2))`
//!   when `n > 2` and left raw otherwise.
//! - edge betweenness: scaled by `1 / (n (n - 1))` when `n > 1`.
//! - closeness: computed from incoming distances (how close every other node is *to* the
//!   node), with the Wasserman-Faust correction for partially reachable graphs.
//! - clustering and triangles: computed on the undirected projection, self-loops ignored.

use super::Graph;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Breadth-first hop counts from `source_ix` along outgoing edges, in visit order.
///
/// The source itself is the first entry with distance `0`.
pub fn shortest_path_lengths<N, E>(g: &Graph<N, E>, source_ix: usize) -> Vec<(usize, usize)>
where
    N: Default,
{
    let n = g.node_count();
    if source_ix >= n {
        return Vec::new();
    }
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut out: Vec<(usize, usize)> = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();
    dist[source_ix] = Some(0);
    q.push_back(source_ix);
    while let Some(v) = q.pop_front() {
        let d = dist[v].unwrap_or(0);
        out.push((v, d));
        for &edge_ix in g.out_edge_ixs(v) {
            let (_, w) = g.edge_entry_endpoints(edge_ix);
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                q.push_back(w);
            }
        }
    }
    out
}

pub fn degree_centrality<N, E>(g: &Graph<N, E>) -> Vec<f64>
where
    N: Default,
{
    let n = g.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }
    let s = 1.0 / (n as f64 - 1.0);
    (0..n)
        .map(|v| (g.out_edge_ixs(v).len() + g.in_edge_ixs(v).len()) as f64 * s)
        .collect()
}

/// Shortest-path DAG from one source, as used by Brandes' accumulation.
struct SingleSource {
    /// Nodes in non-decreasing distance order.
    order: Vec<usize>,
    /// For each node, `(predecessor node, edge)` pairs on shortest paths.
    preds: Vec<Vec<(usize, usize)>>,
    sigma: Vec<f64>,
}

fn single_source<N, E>(g: &Graph<N, E>, s: usize) -> SingleSource
where
    N: Default,
{
    let n = g.node_count();
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut preds: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<i64> = vec![-1; n];

    sigma[s] = 1.0;
    dist[s] = 0;
    let mut q: VecDeque<usize> = VecDeque::new();
    q.push_back(s);
    while let Some(v) = q.pop_front() {
        order.push(v);
        for &edge_ix in g.out_edge_ixs(v) {
            let (_, w) = g.edge_entry_endpoints(edge_ix);
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                q.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                preds[w].push((v, edge_ix));
            }
        }
    }

    SingleSource {
        order,
        preds,
        sigma,
    }
}

pub fn betweenness_centrality<N, E>(g: &Graph<N, E>) -> Vec<f64>
where
    N: Default,
{
    let n = g.node_count();
    let mut cb: Vec<f64> = vec![0.0; n];
    for s in 0..n {
        let ss = single_source(g, s);
        let mut delta: Vec<f64> = vec![0.0; n];
        for &w in ss.order.iter().rev() {
            for &(v, _) in &ss.preds[w] {
                delta[v] += ss.sigma[v] / ss.sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
        for v in &mut cb {
            *v *= scale;
        }
    }
    cb
}

pub fn edge_betweenness_centrality<N, E>(g: &Graph<N, E>) -> Vec<f64>
where
    N: Default,
{
    let n = g.node_count();
    let mut eb: Vec<f64> = vec![0.0; g.edge_count()];
    for s in 0..n {
        let ss = single_source(g, s);
        let mut delta: Vec<f64> = vec![0.0; n];
        for &w in ss.order.iter().rev() {
            for &(v, edge_ix) in &ss.preds[w] {
                let c = ss.sigma[v] / ss.sigma[w] * (1.0 + delta[w]);
                eb[edge_ix] += c;
                delta[v] += c;
            }
        }
    }

    if n > 1 {
        let scale = 1.0 / (n as f64 * (n as f64 - 1.0));
        for v in &mut eb {
            *v *= scale;
        }
    }
    eb
}

pub fn closeness_centrality<N, E>(g: &Graph<N, E>) -> Vec<f64>
where
    N: Default,
{
    let n = g.node_count();
    let mut out: Vec<f64> = vec![0.0; n];
    if n <= 1 {
        return out;
    }

    for (u, slot) in out.iter_mut().enumerate() {
        // BFS against edge direction: distances from every other node to `u`.
        let mut dist: Vec<Option<usize>> = vec![None; n];
        let mut q: VecDeque<usize> = VecDeque::new();
        dist[u] = Some(0);
        q.push_back(u);
        let mut reached: usize = 0;
        let mut total: usize = 0;
        while let Some(v) = q.pop_front() {
            let d = dist[v].unwrap_or(0);
            reached += 1;
            total += d;
            for &edge_ix in g.in_edge_ixs(v) {
                let (p, _) = g.edge_entry_endpoints(edge_ix);
                if dist[p].is_none() {
                    dist[p] = Some(d + 1);
                    q.push_back(p);
                }
            }
        }

        if total > 0 {
            let r = (reached - 1) as f64;
            *slot = r / total as f64 * (r / (n as f64 - 1.0));
        }
    }
    out
}

/// Neighbor sets of the undirected projection (edge direction dropped, self-loops removed).
pub fn undirected_neighbors<N, E>(g: &Graph<N, E>) -> Vec<HashSet<usize>>
where
    N: Default,
{
    let mut out: Vec<HashSet<usize>> = vec![HashSet::default(); g.node_count()];
    for edge_ix in 0..g.edge_count() {
        let (v, w) = g.edge_entry_endpoints(edge_ix);
        if v == w {
            continue;
        }
        out[v].insert(w);
        out[w].insert(v);
    }
    out
}

fn triangles_from(nbrs: &[HashSet<usize>]) -> Vec<usize> {
    nbrs.iter()
        .map(|vs| {
            let twice: usize = vs
                .iter()
                .map(|&u| nbrs[u].iter().filter(|w| vs.contains(*w)).count())
                .sum();
            twice / 2
        })
        .collect()
}

pub fn triangles<N, E>(g: &Graph<N, E>) -> Vec<usize>
where
    N: Default,
{
    triangles_from(&undirected_neighbors(g))
}

pub fn clustering<N, E>(g: &Graph<N, E>) -> Vec<f64>
where
    N: Default,
{
    let nbrs = undirected_neighbors(g);
    let tris = triangles_from(&nbrs);
    nbrs.iter()
        .zip(tris)
        .map(|(vs, t)| {
            let k = vs.len();
            if k < 2 {
                0.0
            } else {
                2.0 * t as f64 / (k as f64 * (k as f64 - 1.0))
            }
        })
        .collect()
}
