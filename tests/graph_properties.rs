//! 图不变量与场景测试

use graphbase::{Graph, GraphConfig, GraphError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

type TestGraph = Graph<u32, u32>;

/// 检查所有公开不变量
fn check_invariants(graph: &TestGraph) {
    // 键稠密
    let keys: BTreeSet<usize> = graph.vertices().map(|v| graph.get_key(v).unwrap()).collect();
    assert_eq!(keys, (0..graph.num_vertices()).collect::<BTreeSet<_>>());
    assert_eq!(graph.vertices().count(), graph.num_vertices());

    // 边数一致
    let out_sum: usize = graph.vertices().map(|v| graph.out_degree(v).unwrap()).sum();
    let in_sum: usize = graph.vertices().map(|v| graph.in_degree(v).unwrap()).sum();
    assert_eq!(graph.num_edges(), out_sum);
    assert_eq!(graph.num_edges(), in_sum);
    assert_eq!(graph.edges().count(), graph.num_edges());

    for edge in graph.edges() {
        // 无悬挂边
        assert!(graph.valid_vertex(edge.origin()));
        assert!(graph.valid_vertex(edge.destination()));
        assert_eq!(graph.end_vertices(edge), Some(edge.endpoints()));

        // 无向镜像
        if !graph.is_directed() {
            let mirror = graph
                .get_edge(edge.destination(), edge.origin())
                .expect("缺少镜像边");
            assert_eq!(mirror.element(), edge.element());
            assert_eq!(mirror.weight(), edge.weight());
        }
    }
}

fn random_walk(config: GraphConfig, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = TestGraph::with_config(config);

    for step in 0..400u32 {
        let a = rng.gen_range(0..24);
        let b = rng.gen_range(0..24);
        match rng.gen_range(0..10) {
            0..=1 => {
                graph.insert_vertex(a);
            }
            2..=5 => {
                graph.insert_edge(a, b, step, f64::from(step) * 0.5);
            }
            6..=7 => {
                graph.remove_edge(&a, &b);
            }
            _ => {
                let existed = graph.valid_vertex(&a);
                assert_eq!(graph.remove_vertex(&a), existed);
                assert!(!graph.valid_vertex(&a));
                assert!(graph
                    .edges()
                    .all(|e| e.origin() != &a && e.destination() != &a));
            }
        }
        check_invariants(&graph);
    }
}

#[test]
fn test_random_operations_directed() {
    for seed in 0..8 {
        random_walk(GraphConfig::directed(), seed);
    }
}

#[test]
fn test_random_operations_undirected() {
    for seed in 0..8 {
        random_walk(GraphConfig::undirected().with_adjacency_capacity(4), seed);
    }
}

#[test]
fn test_duplicate_inserts_are_noops() {
    let mut graph = TestGraph::undirected();
    graph.insert_edge(1, 2, 10, 1.0);

    let (vertices, edges) = (graph.num_vertices(), graph.num_edges());
    assert!(!graph.insert_vertex(1));
    assert!(!graph.insert_edge(1, 2, 99, 9.0));
    assert!(!graph.insert_edge(2, 1, 99, 9.0));
    assert_eq!(
        graph.try_insert_edge(1, 2, 99, 9.0),
        Err(GraphError::EdgeAlreadyExists("1 -> 2".to_string()))
    );
    assert_eq!((graph.num_vertices(), graph.num_edges()), (vertices, edges));
    assert_eq!(graph.get_edge(&2, &1).unwrap().element(), &10);
}

#[test]
fn test_remove_missing_edge_keeps_counts() {
    let mut graph: Graph<&str, &str> = Graph::undirected();
    for v in ["A", "B", "C"] {
        graph.insert_vertex(v);
    }
    graph.insert_edge("A", "B", "x", 1.0);

    assert!(!graph.remove_edge(&"A", &"C"));
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn test_undirected_self_loop_counts_once() {
    let mut graph: Graph<&str, &str> = Graph::undirected();
    graph.insert_edge("A", "B", "x", 1.0);
    let before = graph.num_edges();

    assert!(graph.insert_edge("A", "A", "s", 0.0));
    assert_eq!(graph.num_edges(), before + 1);

    assert!(graph.remove_vertex(&"A"));
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.get_key(&"B"), Ok(0));
}

#[test]
fn test_remove_vertex_rekeys_scenario() {
    let mut graph: Graph<&str, &str> = Graph::undirected();
    for v in ["A", "B", "C", "D"] {
        graph.insert_vertex(v);
    }
    assert_eq!(graph.get_key(&"D"), Ok(3));

    assert!(graph.remove_vertex(&"B"));

    assert_eq!(graph.get_key(&"C"), Ok(1));
    assert_eq!(graph.get_key(&"D"), Ok(2));
    assert_eq!(graph.num_vertices(), 3);
}

#[test]
fn test_clone_fidelity() {
    let mut rng = StdRng::seed_from_u64(42);
    for config in [GraphConfig::directed(), GraphConfig::undirected()] {
        let mut graph = TestGraph::with_config(config);
        for i in 0..60 {
            graph.insert_edge(rng.gen_range(0..15), rng.gen_range(0..15), i, rng.gen());
        }

        let mut copy = graph.clone();
        assert_eq!(copy.num_vertices(), graph.num_vertices());
        assert_eq!(copy.num_edges(), graph.num_edges());
        assert_eq!(copy.key_vertices(), graph.key_vertices());
        for edge in graph.edges() {
            assert_eq!(copy.get_edge(edge.origin(), edge.destination()), Some(edge));
        }
        check_invariants(&copy);

        let snapshot: Vec<(u32, u32)> = graph
            .edges()
            .map(|e| (*e.origin(), *e.destination()))
            .collect();
        let victim = *copy.vertices().next().unwrap();
        copy.remove_vertex(&victim);
        copy.insert_edge(100, 101, 0, 0.0);

        assert!(graph.valid_vertex(&victim));
        assert!(!graph.valid_vertex(&100));
        assert_eq!(
            graph
                .edges()
                .map(|e| (*e.origin(), *e.destination()))
                .collect::<Vec<_>>(),
            snapshot
        );
    }
}
