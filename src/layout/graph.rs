//! TaskGraph: normalizes a task list and edge pairs into a petgraph DiGraph.
//!
//! Node indices follow task input order, so index comparisons double as
//! the input-order tie-breaker everywhere downstream. Self-loops are
//! dropped, repeated pairs are merged, unknown endpoints are rejected.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::LayoutError;

/// Graph intermediate representation of one layout call.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    /// Node weight is the task index; edge weight the index in `edges`.
    digraph: DiGraph<usize, usize>,
    ids: Vec<String>,
    node_index: HashMap<String, usize>,
    /// Distinct non-loop edges as (source, destination) task indices, in input order.
    edges: Vec<(usize, usize)>,
    /// task index → indices into `edges` leaving it, in input order.
    out_edges: Vec<Vec<usize>>,
    degree: Vec<usize>,
    pub self_loops: usize,
    pub duplicate_edges: usize,
}

impl TaskGraph {
    /// Build the graph, validating every edge endpoint.
    pub fn build<S, E>(tasks: &[S], edges: &[(E, E)]) -> Result<Self, LayoutError>
    where
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let mut digraph: DiGraph<usize, usize> = DiGraph::with_capacity(tasks.len(), edges.len());
        let mut ids = Vec::with_capacity(tasks.len());
        let mut node_index: HashMap<String, usize> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let id = task.as_ref();
            if node_index.contains_key(id) {
                return Err(LayoutError::DuplicateTask(id.to_string()));
            }
            let idx = digraph.add_node(ids.len());
            node_index.insert(id.to_string(), idx.index());
            ids.push(id.to_string());
        }

        let mut graph = Self {
            digraph,
            out_edges: vec![Vec::new(); ids.len()],
            degree: vec![0; ids.len()],
            ids,
            node_index,
            edges: Vec::new(),
            self_loops: 0,
            duplicate_edges: 0,
        };

        for (from, to) in edges {
            let (from, to) = (from.as_ref(), to.as_ref());
            let src = graph.lookup(from, from, to)?;
            let dst = graph.lookup(to, from, to)?;
            graph.add_edge(src, dst);
        }

        tracing::debug!(
            "normalized graph: {} tasks, {} edges ({} self-loops ignored, {} duplicates merged)",
            graph.node_count(),
            graph.edge_count(),
            graph.self_loops,
            graph.duplicate_edges
        );
        Ok(graph)
    }

    fn lookup(&self, task: &str, from: &str, to: &str) -> Result<usize, LayoutError> {
        self.node_index
            .get(task)
            .copied()
            .ok_or_else(|| LayoutError::UnknownTask {
                task: task.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn add_edge(&mut self, src: usize, dst: usize) {
        if src == dst {
            tracing::debug!("ignoring self-loop on task {}", self.ids[src]);
            self.self_loops += 1;
            return;
        }
        let (a, b) = (NodeIndex::new(src), NodeIndex::new(dst));
        if self.digraph.find_edge(a, b).is_some() {
            self.duplicate_edges += 1;
            return;
        }
        let edge = self.edges.len();
        self.digraph.add_edge(a, b, edge);
        self.edges.push((src, dst));
        self.out_edges[src].push(edge);
        self.degree[src] += 1;
        self.degree[dst] += 1;
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Task ids in input order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn id(&self, task: usize) -> &str {
        &self.ids[task]
    }

    /// Distinct edges as (source, destination) task indices.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Indices into [`TaskGraph::edges`] leaving `task`, in input order.
    pub fn out_edges(&self, task: usize) -> &[usize] {
        &self.out_edges[task]
    }

    /// True when the task has no edge at all (self-loops excluded).
    pub fn is_isolated(&self, task: usize) -> bool {
        self.degree[task] == 0
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
