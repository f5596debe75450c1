use super::*;
use crate::config::{Algorithm, OrderingHeuristic};

fn run(tasks: &[&str], edges: &[(&str, &str)], config: &LayoutConfig) -> Layout {
    let graph = TaskGraph::build(tasks, edges).unwrap();
    SugiyamaLayout::new(config).layout(&graph).unwrap()
}

fn run_default(tasks: &[&str], edges: &[(&str, &str)]) -> Layout {
    run(tasks, edges, &LayoutConfig::default())
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn test_linear_chain() {
    let l = run_default(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
    assert_eq!(l.mode, LayoutMode::Hierarchical);
    assert_eq!(l.layer_count, 4);
    for (i, id) in ["A", "B", "C", "D"].iter().enumerate() {
        assert_eq!(l.layer_of(id), Some(i));
    }
    let ys: Vec<f64> = l.nodes.iter().map(|n| n.y).collect();
    assert!(ys.windows(2).all(|w| w[1] > w[0]));
    assert!(l.nodes.iter().all(|n| n.x == l.nodes[0].x));
    assert!(l.virtual_nodes.is_empty());
    assert_eq!(l.crossings, 0);
}

#[test]
fn test_diamond() {
    let l = run_default(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    assert_eq!(l.layer_of("A"), Some(0));
    assert_eq!(l.layer_of("B"), Some(1));
    assert_eq!(l.layer_of("C"), Some(1));
    assert_eq!(l.layer_of("D"), Some(2));
    let (b, c, d) = (l.position("B").unwrap(), l.position("C").unwrap(), l.position("D").unwrap());
    assert_eq!(b.y, c.y);
    assert_ne!(b.x, c.x);
    assert!(d.y > b.y);
}

#[test]
fn test_isolated_node_in_layer() {
    let l = run_default(&["A", "B", "C"], &[("A", "B")]);
    assert_eq!(l.layer_of("C"), Some(0));
    let (a, b, c) = (l.position("A").unwrap(), l.position("B").unwrap(), l.position("C").unwrap());
    assert_ne!(c, a);
    assert_ne!(c, b);
}

#[test]
fn test_long_edge_has_virtual_node() {
    let l = run_default(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    assert_eq!(l.virtual_nodes.len(), 1);
    let v = &l.virtual_nodes[0];
    assert_eq!((v.from.as_str(), v.to.as_str()), ("A", "C"));
    assert_eq!(v.layer, 1);
    assert_eq!(v.edge, 2);
    assert_eq!(l.virtual_nodes_of(2).count(), 1);
    assert_eq!(l.edges[2].points.len(), 3);
    assert_eq!(l.edges[2].points[1], Point::new(v.x, v.y));
    // Virtual nodes never appear among real tasks.
    assert_eq!(l.nodes.len(), 3);
    assert_eq!(l.coordinates().len(), 3);
}

// ── Cycles ───────────────────────────────────────────────────────────────

#[test]
fn test_cycle_reported_in_original_orientation() {
    let l = run_default(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
    assert_eq!(l.reversed_edges, vec![("C".to_string(), "A".to_string())]);
    assert!(l.is_reversed("C", "A"));
    assert!(l.edges[2].reversed);
    assert_eq!(l.edges[2].from, "C");
    assert_eq!(l.layer_of("A"), Some(0));
    assert_eq!(l.layer_of("C"), Some(2));
}

#[test]
fn test_mutual_dependency() {
    let l = run_default(&["A", "B"], &[("A", "B"), ("B", "A")]);
    assert_eq!(l.len(), 2);
    assert_ne!(l.position("A"), l.position("B"));
    assert_eq!(l.reversed_edges.len(), 1);
}

// ── Options ──────────────────────────────────────────────────────────────

#[test]
fn test_crossings_reported_after_reduction() {
    let l = run_default(&["A", "B", "C", "D"], &[("A", "D"), ("B", "C")]);
    assert_eq!(l.crossings, 0);
    let c = l.node("C").unwrap();
    let d = l.node("D").unwrap();
    assert_eq!((d.order, c.order), (0, 1));
    assert!(d.x < c.x);
}

#[test]
fn test_isolated_aside() {
    let config = LayoutConfig::new().with_isolated(IsolatedPlacement::Aside);
    let l = run(&["A", "B", "C"], &[("A", "B")], &config);
    let c = l.node("C").unwrap();
    assert_eq!((c.layer, c.order), (0, 0));
    assert_eq!((c.x, c.y), (-200.0, 0.0));
    assert_eq!(l.position("A"), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_aside_ignored_when_everything_is_isolated() {
    let config = LayoutConfig::new()
        .with_isolated(IsolatedPlacement::Aside)
        .with_algorithm(Algorithm::Hierarchical);
    let l = run(&["A", "B"], &[], &config);
    assert_eq!(l.position("A"), Some(Point::new(-75.0, 0.0)));
    assert_eq!(l.position("B"), Some(Point::new(75.0, 0.0)));
}

#[test]
fn test_sink_sources_option() {
    let edges = [("A", "B"), ("B", "C"), ("D", "C")];
    let plain = run_default(&["A", "B", "C", "D"], &edges);
    assert_eq!(plain.layer_of("D"), Some(0));

    let config = LayoutConfig::new().with_sink_sources(true);
    let sunk = run(&["A", "B", "C", "D"], &edges, &config);
    assert_eq!(sunk.layer_of("D"), Some(1));
    assert_eq!(sunk.layer_count, 3);
}

#[test]
fn test_node_sizes_shape_routes() {
    let config = LayoutConfig::new()
        .with_node_size("A", Size::new(100.0, 40.0))
        .with_node_size("B", Size::new(100.0, 40.0));
    let l = run(&["A", "B"], &[("A", "B")], &config);
    assert_eq!(l.edges[0].points[0], Point::new(0.0, 12.0));
    assert_eq!(l.edges[0].points[1], Point::new(0.0, 188.0));
}

#[test]
fn test_median_heuristic_end_to_end() {
    let config = LayoutConfig::new().with_ordering(OrderingHeuristic::Median);
    let l = run(&["A", "B", "C", "D"], &[("A", "D"), ("B", "C")], &config);
    assert_eq!(l.crossings, 0);
}
