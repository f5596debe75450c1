//! Layer assignment by longest path.
//!
//! `layer(v) = 0` without predecessors, else `1 + max(layer(pred))`.
//! Isolated tasks land on layer 0.

use petgraph::Direction::{Incoming, Outgoing};
use petgraph::algo::toposort;

use super::acyclic::AcyclicGraph;

/// Layer of every real task, indexed by task index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub layers: Vec<usize>,
    pub layer_count: usize,
}

impl Ranking {
    fn new(layers: Vec<usize>) -> Self {
        let layer_count = layers.iter().map(|&l| l + 1).max().unwrap_or(0);
        Self {
            layers,
            layer_count,
        }
    }
}

/// Longest-path layering. Returns None if `dag` still contains a cycle.
pub fn longest_path(dag: &AcyclicGraph) -> Option<Ranking> {
    let g = dag.to_digraph();
    let order = toposort(&g, None).ok()?;

    let mut layers = vec![0usize; dag.node_count];
    for idx in order {
        layers[idx.index()] = g
            .neighbors_directed(idx, Incoming)
            .map(|pred| layers[pred.index()] + 1)
            .max()
            .unwrap_or(0);
    }
    Some(Ranking::new(layers))
}

/// Pull every node with successors down to just above its nearest successor.
///
/// Walks a reverse topological order so successors are final before their
/// predecessors move. The edges out of a moved node get shorter, but no
/// span ever drops below 1. Edges into a moved node from predecessors that
/// stay put get longer.
pub fn sink_sources(dag: &AcyclicGraph, ranking: &mut Ranking) -> Option<usize> {
    let g = dag.to_digraph();
    let order = toposort(&g, None).ok()?;

    let mut moved = 0;
    for idx in order.into_iter().rev() {
        let Some(nearest) = g
            .neighbors_directed(idx, Outgoing)
            .map(|succ| ranking.layers[succ.index()])
            .min()
        else {
            continue;
        };
        let target = nearest.saturating_sub(1);
        let current = &mut ranking.layers[idx.index()];
        if target > *current {
            *current = target;
            moved += 1;
        }
    }
    tracing::debug!("layer sinking moved {} node(s)", moved);
    *ranking = Ranking::new(std::mem::take(&mut ranking.layers));
    Some(moved)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_rank.rs"]
mod tests;
