//! Virtual node insertion.
//!
//! Every acyclic edge spanning more than one layer is replaced by a chain
//! of virtual nodes, one per intermediate layer, so that all segments of
//! the layered graph join adjacent layers.
//!
//! Nodes are addressed by a dense id: real tasks keep their task index
//! (`0..real_count`), virtual nodes follow (`real_count..`). Dense order is
//! therefore input order with virtual nodes after all real ones.

use super::acyclic::AcyclicGraph;
use super::rank::Ranking;
use super::types::{NodeRef, Size};

/// A virtual node: one bend of a long edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualSlot {
    /// Index into [`AcyclicGraph::edges`] of the edge it subdivides.
    pub edge: usize,
    pub layer: usize,
}

#[derive(Debug, Clone)]
pub struct LayeredGraph {
    pub real_count: usize,
    pub layer_count: usize,
    /// Layer of every dense node.
    pub layer_of: Vec<usize>,
    pub virtuals: Vec<VirtualSlot>,
    /// Per acyclic edge: internal source, its virtual chain, internal target.
    pub paths: Vec<Vec<usize>>,
    /// Dense node → neighbors one layer up (one entry per segment).
    pub upper: Vec<Vec<usize>>,
    /// Dense node → neighbors one layer down (one entry per segment).
    pub lower: Vec<Vec<usize>>,
    /// Real tasks left out of the layer orders (placed aside).
    pub aside: Vec<bool>,
}

pub fn subdivide(dag: &AcyclicGraph, ranking: &Ranking, aside: Vec<bool>) -> LayeredGraph {
    let real_count = dag.node_count;
    let mut layer_of = ranking.layers.clone();
    let mut virtuals: Vec<VirtualSlot> = Vec::new();
    let mut paths: Vec<Vec<usize>> = Vec::with_capacity(dag.edges.len());

    for (edge_idx, edge) in dag.edges.iter().enumerate() {
        let src_layer = ranking.layers[edge.from];
        let dst_layer = ranking.layers[edge.to];
        debug_assert!(dst_layer > src_layer, "acyclic edge must point downward");

        let mut path = vec![edge.from];
        for layer in (src_layer + 1)..dst_layer {
            let dense = real_count + virtuals.len();
            virtuals.push(VirtualSlot {
                edge: edge_idx,
                layer,
            });
            layer_of.push(layer);
            path.push(dense);
        }
        path.push(edge.to);
        paths.push(path);
    }

    let total = real_count + virtuals.len();
    let mut upper: Vec<Vec<usize>> = vec![Vec::new(); total];
    let mut lower: Vec<Vec<usize>> = vec![Vec::new(); total];
    for path in &paths {
        for pair in path.windows(2) {
            lower[pair[0]].push(pair[1]);
            upper[pair[1]].push(pair[0]);
        }
    }

    let layer_count = layer_of.iter().map(|&l| l + 1).max().unwrap_or(0);
    tracing::debug!(
        "inserted {} virtual node(s) across {} layer(s)",
        virtuals.len(),
        layer_count
    );

    LayeredGraph {
        real_count,
        layer_count,
        layer_of,
        virtuals,
        paths,
        upper,
        lower,
        aside,
    }
}

impl LayeredGraph {
    pub fn node_count(&self) -> usize {
        self.layer_of.len()
    }

    pub fn node_ref(&self, dense: usize) -> NodeRef {
        if dense < self.real_count {
            NodeRef::Real(dense)
        } else {
            NodeRef::Virtual(dense - self.real_count)
        }
    }

    pub fn dense(&self, node: NodeRef) -> usize {
        match node {
            NodeRef::Real(i) => i,
            NodeRef::Virtual(i) => self.real_count + i,
        }
    }

    /// Virtual nodes of acyclic edge `edge`, upper layer first.
    pub fn chain(&self, edge: usize) -> &[usize] {
        let path = &self.paths[edge];
        &path[1..path.len() - 1]
    }

    pub fn is_aside(&self, dense: usize) -> bool {
        match self.node_ref(dense) {
            NodeRef::Real(task) => self.aside[task],
            NodeRef::Virtual(_) => false,
        }
    }

    /// Tasks placed aside, in input order.
    pub fn aside_tasks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.real_count).filter(|&task| self.aside[task])
    }

    /// Box size of a dense node. `sizes` is indexed by task; virtual nodes
    /// are points.
    pub fn size_of(&self, dense: usize, sizes: &[Option<Size>]) -> Option<Size> {
        match self.node_ref(dense) {
            NodeRef::Real(task) => sizes.get(task).copied().flatten(),
            NodeRef::Virtual(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_normalize.rs"]
mod tests;
