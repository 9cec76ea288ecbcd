use super::*;

// Helper to build the three-vertex graph with a cheaper two-hop route
fn create_triangle_graph() -> WeightedDigraph<&'static str> {
    let mut graph = WeightedDigraph::new(vec!["A", "B", "C"]);
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(0, 2, 10).unwrap();
    graph
}

// Helper for a small road network with a detour and a dead end
fn create_test_graph() -> WeightedDigraph<u32> {
    let mut graph = WeightedDigraph::new((0..7).collect());
    graph.add_edge(0, 1, 7).unwrap();
    graph.add_edge(0, 2, 9).unwrap();
    graph.add_edge(0, 5, 14).unwrap();
    graph.add_edge(1, 2, 10).unwrap();
    graph.add_edge(1, 3, 15).unwrap();
    graph.add_edge(2, 3, 11).unwrap();
    graph.add_edge(2, 5, 2).unwrap();
    graph.add_edge(3, 4, 6).unwrap();
    graph.add_edge(5, 4, 9).unwrap();
    // vertex 6 only has an outgoing arc
    graph.add_edge(6, 0, 1).unwrap();
    graph
}

#[test]
fn test_new_graph_has_no_edges() {
    let graph = WeightedDigraph::new(vec!['x', 'y', 'z']);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    for i in 0..3 {
        assert!(graph.neighbors(i).is_empty());
    }
    assert_eq!(graph.vertex(1), Ok(&'y'));
}

#[test]
fn test_add_edge_then_weight() {
    let mut graph = WeightedDigraph::new(vec![1, 2, 3]);
    for (weight, target) in [(0, 1), (4, 2)] {
        graph.add_edge(0, target, weight).unwrap();
        assert_eq!(graph.edge_weight(0, target), Ok(Some(weight)));
    }
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_parallel_edges_report_first_weight() {
    let mut graph = WeightedDigraph::new(vec![1, 2]);
    graph.add_edge(0, 1, 8).unwrap();
    graph.add_edge(0, 1, 3).unwrap();
    assert_eq!(graph.edge_weight(0, 1), Ok(Some(8)));

    // removing drops one arc per call, in list order
    assert_eq!(graph.remove_edge(0, 1), Ok(Some(8)));
    assert_eq!(graph.edge_weight(0, 1), Ok(Some(3)));
    assert_eq!(graph.remove_edge(0, 1), Ok(Some(3)));
    assert_eq!(graph.edge_weight(0, 1), Ok(None));
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph = create_triangle_graph();
    let before = graph.neighbors(0).to_vec();

    let result = graph.add_edge(0, 1, -1);
    assert_eq!(result, Err(GraphError::InvalidWeight { weight: -1 }));
    assert_eq!(graph.neighbors(0), before.as_slice());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_out_of_range_indices() {
    let mut graph = create_triangle_graph();
    let error = GraphError::IndexOutOfRange { index: 3, size: 3 };

    assert_eq!(graph.add_edge(0, 3, 1), Err(error.clone()));
    assert_eq!(graph.add_edge(3, 0, 1), Err(error.clone()));
    assert_eq!(graph.remove_edge(3, 0), Err(error.clone()));
    assert_eq!(graph.edge_weight(0, 3), Err(error.clone()));
    assert_eq!(graph.vertex(3), Err(error.clone()));
    assert_eq!(graph.shortest_path(0, 3), Err(error));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let mut graph = create_triangle_graph();
    assert_eq!(graph.remove_edge(2, 0), Ok(None));
    assert_eq!(graph.edge_count(), 3);

    assert_eq!(graph.remove_edge(0, 2), Ok(Some(10)));
    assert_eq!(graph.edge_weight(0, 2), Ok(None));
    assert_eq!(graph.edge_weight(0, 1), Ok(Some(5)));
}

#[test]
fn test_vertex_lookup() {
    let graph = create_triangle_graph();
    assert_eq!(graph.vertex_index(&"B"), Some(1));
    assert_eq!(graph.vertex_index(&"D"), None);
    assert!(graph.contains(&"C"));
    assert!(!graph.contains(&"c"));
}

#[test]
fn test_add_vertex_keeps_indices() {
    let mut graph = create_triangle_graph();
    let before: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|v| graph.vertex_index(v))
        .collect();

    assert_eq!(graph.add_vertex("D"), 3);
    assert_eq!(graph.add_vertex("E"), 4);

    let after: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|v| graph.vertex_index(v))
        .collect();
    assert_eq!(before, after);
    assert_eq!(graph.vertex_index(&"E"), Some(4));
    assert!(graph.neighbors(4).is_empty());

    graph.add_edge(2, 4, 1).unwrap();
    assert_eq!(graph.shortest_path(0, 4).unwrap().length, 9);
}

#[test]
fn test_shortest_path_prefers_cheaper_detour() {
    let graph = create_triangle_graph();
    let path = graph.shortest_path(0, 2).unwrap();
    assert_eq!(path.length, 8);
    assert_eq!(path.nodes, vec![0, 1, 2]);
    assert_eq!(path.source(), Some(0));
    assert_eq!(path.target(), Some(2));
}

#[test]
fn test_shortest_path_to_self() {
    let graph = create_triangle_graph();
    for i in 0..3 {
        let path = graph.shortest_path(i, i).unwrap();
        assert_eq!(path.length, 0);
        assert_eq!(path.nodes, vec![i]);
    }
}

#[test]
fn test_shortest_path_unreachable() {
    let graph = create_triangle_graph();
    assert_eq!(
        graph.shortest_path(2, 0),
        Err(GraphError::TargetUnreachable { from: 2, to: 0 })
    );

    // nothing reaches vertex 6
    let graph = create_test_graph();
    assert_eq!(
        graph.shortest_path(0, 6),
        Err(GraphError::TargetUnreachable { from: 0, to: 6 })
    );
}

#[test]
fn test_shortest_path_larger_graph() {
    let graph = create_test_graph();

    let expected = [
        (4, 20, vec![0, 2, 5, 4]),
        (3, 20, vec![0, 2, 3]),
        (5, 11, vec![0, 2, 5]),
        (1, 7, vec![0, 1]),
    ];
    for (target, length, nodes) in expected {
        let path = graph.shortest_path(0, target).unwrap();
        assert_eq!(path.length, length, "wrong length to {}", target);
        assert_eq!(path.nodes, nodes, "wrong route to {}", target);
    }

    let path = graph.shortest_path(6, 4).unwrap();
    assert_eq!(path.length, 21);
    assert_eq!(path.nodes, vec![6, 0, 2, 5, 4]);
}

#[test]
fn test_shortest_path_path_is_consistent() {
    // every consecutive pair on the returned route is an arc and the weights add up
    let graph = create_test_graph();
    for target in 0..6 {
        let path = graph.shortest_path(0, target).unwrap();
        let total: Weight = path
            .nodes
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap().unwrap())
            .sum();
        assert_eq!(total, path.length);
    }
}

#[test]
fn test_shortest_path_with_zero_weights_and_cycles() {
    let mut graph = WeightedDigraph::new(vec![0, 1, 2, 3]);
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 0, 0).unwrap();
    graph.add_edge(1, 1, 4).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_edge(2, 3, 2).unwrap();
    graph.add_edge(0, 3, 5).unwrap();

    let path = graph.shortest_path(0, 3).unwrap();
    assert_eq!(path.length, 2);
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
}

#[test]
fn test_shortest_path_tracks_edge_changes() {
    let mut graph = create_triangle_graph();
    graph.remove_edge(1, 2).unwrap();
    let path = graph.shortest_path(0, 2).unwrap();
    assert_eq!(path.length, 10);
    assert_eq!(path.nodes, vec![0, 2]);

    graph.remove_edge(0, 2).unwrap();
    assert!(graph.shortest_path(0, 2).is_err());
}

#[test]
fn test_shortest_path_is_deterministic_with_ties() {
    // two routes of equal cost
    let mut graph = WeightedDigraph::new(vec![0, 1, 2, 3]);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 1).unwrap();
    graph.add_edge(1, 3, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();

    let first = graph.shortest_path(0, 3).unwrap();
    for _ in 0..10 {
        assert_eq!(graph.shortest_path(0, 3).unwrap().length, first.length);
    }
    assert_eq!(first.length, 2);
    assert_eq!(first.nodes.len(), 3);
}

#[test]
fn test_dijkstra_over_trait_object() {
    let graph = create_triangle_graph();
    let as_dyn: &dyn Graph = &graph;
    let path = dijkstra::shortest_path(as_dyn, 1, 2).unwrap();
    assert_eq!(path.length, 3);
    assert_eq!(path.nodes, vec![1, 2]);
}

#[test]
fn test_dijkstra_checks_indices() {
    let graph = create_triangle_graph();
    let as_dyn: &dyn Graph = &graph;
    assert_eq!(
        dijkstra::shortest_path(as_dyn, 0, 7),
        Err(GraphError::IndexOutOfRange { index: 7, size: 3 })
    );
    assert_eq!(
        dijkstra::shortest_path(as_dyn, 9, 0),
        Err(GraphError::IndexOutOfRange { index: 9, size: 3 })
    );
}

#[test]
fn test_shortest_path_length_overflow() {
    let half = Weight::MAX / 2 + 1;
    let mut graph = WeightedDigraph::new(vec![0, 1, 2]);
    graph.add_edge(0, 1, half).unwrap();
    graph.add_edge(1, 2, half).unwrap();
    assert_eq!(
        graph.shortest_path(0, 2),
        Err(GraphError::LengthOverflow { from: 0, to: 2 })
    );
    assert_eq!(graph.shortest_path(0, 1).unwrap().length, half);

    // a representable route still wins over an overflowing one
    graph.add_edge(0, 2, 5).unwrap();
    let path = graph.shortest_path(0, 2).unwrap();
    assert_eq!(path.length, 5);
    assert_eq!(path.nodes, vec![0, 2]);
}

#[test]
fn test_empty_path_has_no_endpoints() {
    let path = ShortestPath {
        length: 0,
        nodes: Vec::new(),
    };
    assert_eq!(path.source(), None);
    assert_eq!(path.target(), None);
}
