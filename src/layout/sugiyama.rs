//! Sugiyama layered graph layout.
//!
//! Phases:
//!   1. Cycle removal (DFS back-edge reversal)
//!   2. Layer assignment (longest path, optional sinking)
//!   3. Virtual node insertion
//!   4. Crossing minimisation (barycenter / median sweeps)
//!   5. Coordinate assignment
//!   6. Edge routing through virtual nodes

use super::acyclic::{AcyclicGraph, break_cycles};
use super::graph::TaskGraph;
use super::normalize::{LayeredGraph, subdivide};
use super::order::{Reduction, initial_order, reduce_crossings};
use super::position::assign_coordinates;
use super::rank::{longest_path, sink_sources};
use super::routing::route_edges;
use super::types::{Layout, LayoutMode, NodeRef, PlacedNode, Point, RoutedEdge, Size, VirtualNode};
use crate::config::{IsolatedPlacement, LayoutConfig};

/// Sugiyama layered layout engine.
pub struct SugiyamaLayout<'a> {
    config: &'a LayoutConfig,
}

impl<'a> SugiyamaLayout<'a> {
    /// `config` is expected to be normalized already.
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline. Returns None if layering cannot proceed
    /// (the working graph is still cyclic).
    pub fn layout(&self, graph: &TaskGraph) -> Option<Layout> {
        let config = self.config;

        let dag = break_cycles(graph);
        if !dag.is_acyclic() {
            tracing::warn!("cycle breaker left a cycle behind");
            return None;
        }

        let mut ranking = longest_path(&dag)?;
        if config.sink_sources {
            sink_sources(&dag, &mut ranking)?;
        }

        let lg = subdivide(&dag, &ranking, self.aside_mask(graph));
        let reduction = reduce_crossings(&lg, initial_order(&lg), config.ordering, config.max_sweeps);

        let sizes: Vec<Option<Size>> = graph.ids().iter().map(|id| config.size_of(id)).collect();
        let coords = assign_coordinates(&lg, &reduction.order, config, &sizes);
        let edges = route_edges(graph, &dag, &lg, &coords, &sizes, config.direction);

        Some(self.assemble(graph, &dag, &lg, &reduction, &coords, edges))
    }

    fn aside_mask(&self, graph: &TaskGraph) -> Vec<bool> {
        let n = graph.node_count();
        if self.config.isolated != IsolatedPlacement::Aside {
            return vec![false; n];
        }
        let mask: Vec<bool> = (0..n).map(|i| graph.is_isolated(i)).collect();
        if mask.iter().all(|&isolated| isolated) {
            // Nothing to stand beside.
            return vec![false; n];
        }
        mask
    }

    fn assemble(
        &self,
        graph: &TaskGraph,
        dag: &AcyclicGraph,
        lg: &LayeredGraph,
        reduction: &Reduction,
        coords: &[Point],
        edges: Vec<RoutedEdge>,
    ) -> Layout {
        let mut order = vec![0usize; lg.node_count()];
        for layer in &reduction.order {
            for (i, &node) in layer.iter().enumerate() {
                order[node] = i;
            }
        }
        for (i, task) in lg.aside_tasks().enumerate() {
            order[task] = i;
        }

        let nodes = graph
            .ids()
            .iter()
            .enumerate()
            .map(|(task, id)| {
                let dense = lg.dense(NodeRef::Real(task));
                PlacedNode {
                    id: id.clone(),
                    layer: lg.layer_of[dense],
                    order: order[dense],
                    x: coords[dense].x,
                    y: coords[dense].y,
                }
            })
            .collect();

        let virtual_nodes = lg
            .virtuals
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let dense = lg.dense(NodeRef::Virtual(i));
                let (from, to) = graph.edges()[dag.edges[slot.edge].original];
                VirtualNode {
                    edge: slot.edge,
                    from: graph.id(from).to_string(),
                    to: graph.id(to).to_string(),
                    layer: slot.layer,
                    order: order[dense],
                    x: coords[dense].x,
                    y: coords[dense].y,
                }
            })
            .collect();

        let reversed_edges = dag
            .reversed()
            .map(|e| {
                let (from, to) = graph.edges()[e.original];
                (graph.id(from).to_string(), graph.id(to).to_string())
            })
            .collect();

        let mut layout = Layout::assemble(LayoutMode::Hierarchical, self.config.direction, nodes);
        layout.layer_count = lg.layer_count;
        layout.virtual_nodes = virtual_nodes;
        layout.edges = edges;
        layout.reversed_edges = reversed_edges;
        layout.crossings = reduction.crossings;
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
