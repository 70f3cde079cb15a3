#![forbid(unsafe_code)]

//! Graph container APIs used by `plumage-core`.
//!
//! The container is a directed, simple graph (one edge per ordered node pair) keyed by string
//! node ids. Nodes and edges keep their insertion order, and every algorithm in [`alg`]
//! reports results aligned with that order so callers get deterministic output.

mod graph;

pub use graph::{EdgeKey, Graph, alg};
