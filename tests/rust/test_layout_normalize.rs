use super::*;
use crate::layout::acyclic::break_cycles;
use crate::layout::graph::TaskGraph;
use crate::layout::rank::longest_path;

fn layered(tasks: &[&str], edges: &[(&str, &str)]) -> LayeredGraph {
    let g = TaskGraph::build(tasks, edges).unwrap();
    let dag = break_cycles(&g);
    let ranking = longest_path(&dag).unwrap();
    subdivide(&dag, &ranking, vec![false; tasks.len()])
}

#[test]
fn test_short_edges_need_no_virtual_nodes() {
    let lg = layered(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert!(lg.virtuals.is_empty());
    assert_eq!(lg.node_count(), 3);
    assert_eq!(lg.paths, vec![vec![0, 1], vec![1, 2]]);
    assert!(lg.chain(0).is_empty());
}

#[test]
fn test_long_edge_gets_one_virtual_per_layer() {
    let lg = layered(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    assert_eq!(lg.real_count, 3);
    assert_eq!(lg.layer_count, 3);
    assert_eq!(lg.virtuals, vec![VirtualSlot { edge: 2, layer: 1 }]);
    assert_eq!(lg.paths[2], vec![0, 3, 2]);
    assert_eq!(lg.chain(2), &[3]);
    assert_eq!(lg.layer_of[3], 1);
    assert_eq!(lg.lower[0], vec![1, 3]);
    assert_eq!(lg.upper[2], vec![1, 3]);
}

#[test]
fn test_chain_spans_every_intermediate_layer() {
    let lg = layered(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "E")],
    );
    let chain = lg.chain(4);
    assert_eq!(chain.len(), 3);
    let layers: Vec<usize> = chain.iter().map(|&v| lg.layer_of[v]).collect();
    assert_eq!(layers, vec![1, 2, 3]);
}

#[test]
fn test_every_segment_joins_adjacent_layers() {
    let lg = layered(
        &["A", "B", "C", "D"],
        &[("A", "D"), ("A", "B"), ("B", "C"), ("C", "D"), ("B", "D")],
    );
    for path in &lg.paths {
        for pair in path.windows(2) {
            assert_eq!(lg.layer_of[pair[1]], lg.layer_of[pair[0]] + 1);
        }
    }
}

#[test]
fn test_node_refs() {
    let lg = layered(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    assert_eq!(lg.node_ref(1), NodeRef::Real(1));
    assert_eq!(lg.node_ref(3), NodeRef::Virtual(0));
    assert_eq!(lg.dense(NodeRef::Virtual(0)), 3);
    assert_eq!(lg.dense(NodeRef::Real(2)), 2);
}

#[test]
fn test_aside_only_applies_to_real_nodes() {
    let g = TaskGraph::build(&["A", "B", "C"], &[("A", "B")]).unwrap();
    let dag = break_cycles(&g);
    let ranking = longest_path(&dag).unwrap();
    let lg = subdivide(&dag, &ranking, vec![false, false, true]);
    assert!(!lg.is_aside(0));
    assert!(lg.is_aside(2));
    assert!(!lg.is_aside(7));
}

#[test]
fn test_every_dense_id_maps_to_one_node_ref() {
    let lg = layered(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
    );
    assert_eq!(lg.virtuals.len(), 2);
    for dense in 0..lg.node_count() {
        let node = lg.node_ref(dense);
        assert_eq!(lg.dense(node), dense);
        assert_eq!(matches!(node, NodeRef::Virtual(_)), dense >= lg.real_count);
    }
}

#[test]
fn test_virtual_nodes_have_no_size() {
    let lg = layered(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("A", "C")]);
    // One entry more than there are tasks: the virtual node must not pick it up.
    let sizes = vec![Some(Size::new(40.0, 20.0)); 4];
    assert_eq!(lg.size_of(0, &sizes), Some(Size::new(40.0, 20.0)));
    assert_eq!(lg.size_of(3, &sizes), None);
    assert_eq!(lg.size_of(2, &[]), None);
}

#[test]
fn test_aside_tasks_in_input_order() {
    let g = TaskGraph::build(&["A", "B", "C", "D"], &[("B", "C")]).unwrap();
    let dag = break_cycles(&g);
    let ranking = longest_path(&dag).unwrap();
    let lg = subdivide(&dag, &ranking, vec![true, false, false, true]);
    assert_eq!(lg.aside_tasks().collect::<Vec<_>>(), vec![0, 3]);
}
