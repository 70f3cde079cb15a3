use plumage_graphlib::Graph;

#[test]
fn set_edge_creates_missing_endpoints_with_default_labels() {
    let mut g: Graph<Vec<String>, f64> = Graph::new();
    g.set_node("a", vec!["seed".to_string()]);
    g.set_edge("a", "b", 0.5);

    assert!(g.has_node("b"));
    assert_eq!(g.node("a"), Some(&vec!["seed".to_string()]));
    assert_eq!(g.node("b"), Some(&Vec::new()));
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn edges_are_directed_and_unique_per_ordered_pair() {
    let mut g: Graph<(), f64> = Graph::new();
    g.set_edge("a", "b", 0.1);
    g.set_edge("b", "a", 0.2);
    g.set_edge("a", "b", 0.9);

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge("a", "b"), Some(&0.9));
    assert_eq!(g.edge("b", "a"), Some(&0.2));
    assert!(!g.has_edge("a", "c"));

    let keys: Vec<(&str, &str)> = g.edges().map(|k| (k.v.as_str(), k.w.as_str())).collect();
    assert_eq!(keys, vec![("a", "b"), ("b", "a")]);
}

#[test]
fn generation_tracks_structure_but_not_labels() {
    let mut g: Graph<(), f64> = Graph::new();
    let g0 = g.generation();
    g.set_edge("a", "b", 1.0);
    let g1 = g.generation();
    assert_ne!(g0, g1);

    g.set_edge("a", "b", 2.0);
    g.set_node("a", ());
    assert_eq!(g.generation(), g1);
}

#[test]
fn degrees_count_incoming_and_outgoing_edges() {
    let mut g: Graph<(), ()> = Graph::new();
    g.set_edge("a", "b", ());
    g.set_edge("a", "c", ());
    g.set_edge("c", "a", ());
    g.set_edge("c", "c", ());

    assert_eq!(g.out_degree("a"), Some(2));
    assert_eq!(g.in_degree("a"), Some(1));
    assert_eq!(g.degree("a"), Some(3));
    // Self-loop counts once in each direction.
    assert_eq!(g.degree("c"), Some(4));
    assert_eq!(g.degree("missing"), None);
}

#[test]
fn positions_follow_insertion_order() {
    let mut g: Graph<(), ()> = Graph::new();
    g.set_edge("x", "y", ());
    g.ensure_node("z");

    assert_eq!(g.node_ix("y"), Some(1));
    assert_eq!(g.node_id(2), Some("z"));
    assert_eq!(g.edge_ix("x", "y"), Some(0));
    assert_eq!(g.edge_ix("y", "x"), None);
}
