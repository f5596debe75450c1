//! Cycle removal by DFS back-edge reversal.
//!
//! Roots are visited in task input order and outgoing edges in edge input
//! order. An edge whose destination is still on the DFS stack closes a
//! cycle and is flipped. The source graph is left untouched; the result is
//! a separate edge list where each edge carries a `reversed` flag.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::graph::TaskGraph;

/// An edge of the acyclic working graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcyclicEdge {
    /// Index of the edge in [`TaskGraph::edges`].
    pub original: usize,
    /// Internal source (the original destination when reversed).
    pub from: usize,
    /// Internal destination (the original source when reversed).
    pub to: usize,
    pub reversed: bool,
}

/// The cycle-free edge set produced by [`break_cycles`].
#[derive(Debug, Clone)]
pub struct AcyclicGraph {
    pub node_count: usize,
    /// Same length and order as [`TaskGraph::edges`].
    pub edges: Vec<AcyclicEdge>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnStack,
    Done,
}

pub fn break_cycles(graph: &TaskGraph) -> AcyclicGraph {
    let n = graph.node_count();
    let mut reversed = vec![false; graph.edge_count()];
    let mut state = vec![Visit::New; n];
    // (task, next outgoing edge to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if state[root] != Visit::New {
            continue;
        }
        state[root] = Visit::OnStack;
        stack.push((root, 0));

        while let Some(&(node, next)) = stack.last() {
            let Some(&edge) = graph.out_edges(node).get(next) else {
                state[node] = Visit::Done;
                stack.pop();
                continue;
            };
            let top = stack.len() - 1;
            stack[top].1 += 1;

            let dst = graph.edges()[edge].1;
            match state[dst] {
                Visit::New => {
                    state[dst] = Visit::OnStack;
                    stack.push((dst, 0));
                }
                Visit::OnStack => {
                    tracing::trace!(
                        "reversing back edge {} -> {}",
                        graph.id(node),
                        graph.id(dst)
                    );
                    reversed[edge] = true;
                }
                Visit::Done => {}
            }
        }
    }

    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(i, &(src, dst))| {
            if reversed[i] {
                AcyclicEdge {
                    original: i,
                    from: dst,
                    to: src,
                    reversed: true,
                }
            } else {
                AcyclicEdge {
                    original: i,
                    from: src,
                    to: dst,
                    reversed: false,
                }
            }
        })
        .collect();

    let dag = AcyclicGraph {
        node_count: n,
        edges,
    };
    tracing::debug!("cycle breaker reversed {} edge(s)", dag.reversed_count());
    dag
}

impl AcyclicGraph {
    pub fn reversed(&self) -> impl Iterator<Item = &AcyclicEdge> {
        self.edges.iter().filter(|e| e.reversed)
    }

    pub fn reversed_count(&self) -> usize {
        self.reversed().count()
    }

    /// petgraph view of the working graph; node `i` is task `i`.
    pub fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut g = DiGraph::with_capacity(self.node_count, self.edges.len());
        for _ in 0..self.node_count {
            g.add_node(());
        }
        for e in &self.edges {
            g.add_edge(NodeIndex::new(e.from), NodeIndex::new(e.to), ());
        }
        g
    }

    pub fn is_acyclic(&self) -> bool {
        toposort(&self.to_digraph(), None).is_ok()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_acyclic.rs"]
mod tests;
