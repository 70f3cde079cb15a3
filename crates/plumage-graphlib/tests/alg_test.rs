use plumage_graphlib::{Graph, alg};

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
    }
}

/// `a -> b -> c -> a` plus a pendant `a -> d`.
fn cycle_with_tail() -> Graph<(), ()> {
    let mut g: Graph<(), ()> = Graph::new();
    g.set_edge("a", "b", ());
    g.set_edge("b", "c", ());
    g.set_edge("c", "a", ());
    g.set_edge("a", "d", ());
    g
}

#[test]
fn degree_centrality_divides_by_n_minus_one() {
    let g = cycle_with_tail();
    assert_close(
        &alg::degree_centrality(&g),
        &[1.0, 2.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0],
    );
}

#[test]
fn degree_centrality_of_single_node_is_one() {
    let mut g: Graph<(), ()> = Graph::new();
    g.ensure_node("solo");
    assert_eq!(alg::degree_centrality(&g), vec![1.0]);
    assert_eq!(alg::closeness_centrality(&g), vec![0.0]);
    assert_eq!(alg::betweenness_centrality(&g), vec![0.0]);
    assert_eq!(alg::clustering(&g), vec![0.0]);
}

#[test]
fn betweenness_counts_directed_shortest_paths() {
    let g = cycle_with_tail();
    assert_close(
        &alg::betweenness_centrality(&g),
        &[0.5, 1.0 / 6.0, 1.0 / 3.0, 0.0],
    );
}

#[test]
fn betweenness_splits_credit_between_equal_paths() {
    // Two equal-length routes from s to t.
    let mut g: Graph<(), ()> = Graph::new();
    g.set_edge("s", "x", ());
    g.set_edge("s", "y", ());
    g.set_edge("x", "t", ());
    g.set_edge("y", "t", ());
    let n = 4.0_f64;
    let scale = 1.0 / ((n - 1.0) * (n - 2.0));
    assert_close(
        &alg::betweenness_centrality(&g),
        &[0.0, 0.5 * scale, 0.5 * scale, 0.0],
    );
}

#[test]
fn edge_betweenness_is_normalized_by_ordered_pairs() {
    let g = cycle_with_tail();
    assert_close(
        &alg::edge_betweenness_centrality(&g),
        &[3.0 / 12.0, 4.0 / 12.0, 5.0 / 12.0, 3.0 / 12.0],
    );
}

#[test]
fn closeness_uses_incoming_distances() {
    let g = cycle_with_tail();
    assert_close(
        &alg::closeness_centrality(&g),
        &[4.0 / 9.0, 4.0 / 9.0, 4.0 / 9.0, 0.5],
    );
}

#[test]
fn shortest_path_lengths_are_listed_in_bfs_order() {
    let g = cycle_with_tail();
    let a = g.node_ix("a").unwrap();
    let named: Vec<(&str, usize)> = alg::shortest_path_lengths(&g, a)
        .into_iter()
        .map(|(ix, d)| (g.node_id(ix).unwrap(), d))
        .collect();
    assert_eq!(named, vec![("a", 0), ("b", 1), ("d", 1), ("c", 2)]);

    let d = g.node_ix("d").unwrap();
    assert_eq!(alg::shortest_path_lengths(&g, d), vec![(d, 0)]);
    assert!(alg::shortest_path_lengths(&g, 99).is_empty());
}

#[test]
fn triangles_and_clustering_use_the_undirected_projection() {
    let mut g = cycle_with_tail();
    // A reciprocal edge and a self-loop must not change the projection's triangles.
    g.set_edge("b", "a", ());
    g.set_edge("d", "d", ());

    assert_eq!(alg::triangles(&g), vec![1, 1, 1, 0]);
    assert_close(&alg::clustering(&g), &[1.0 / 3.0, 1.0, 1.0, 0.0]);
}
