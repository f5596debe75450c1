//! Layout engine: entry points for a full graph layout.
//!
//! `Input → Normalized → Acyclic → Layered → Subdivided → Ordered →
//! Coordinated`, or a short-circuit to a fallback layout for empty,
//! single-task or edgeless input.

pub mod acyclic;
pub mod fallback;
pub mod graph;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;
pub mod routing;
pub mod sugiyama;
pub mod types;

use std::collections::HashMap;

pub use graph::TaskGraph;
pub use sugiyama::SugiyamaLayout;
pub use types::{
    Bounds, Direction, Layout, LayoutMode, NodeRef, PlacedNode, Point, RoutedEdge, Size,
    VirtualNode,
};

use crate::config::{Algorithm, LayoutConfig};
use crate::error::LayoutError;

/// Lay out `tasks` with the dependency `edges` (`(source, destination)`).
///
/// Every task appears exactly once in the result. Fails only on malformed
/// input: an edge naming an unknown task, or a repeated task id.
pub fn layout<S, E>(tasks: &[S], edges: &[(E, E)], config: &LayoutConfig) -> Result<Layout, LayoutError>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    LayoutEngine::new(config.clone()).layout(tasks, edges)
}

/// Coordinates only; identical to `layout(..)?.coordinates()`.
pub fn layout_positions<S, E>(
    tasks: &[S],
    edges: &[(E, E)],
    config: &LayoutConfig,
) -> Result<HashMap<String, Point>, LayoutError>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    Ok(layout(tasks, edges, config)?.coordinates())
}

/// A reusable, immutable layout engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// The configuration is normalized once here.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout<S, E>(&self, tasks: &[S], edges: &[(E, E)]) -> Result<Layout, LayoutError>
    where
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let _span = tracing::debug_span!("layout", tasks = tasks.len(), edges = edges.len()).entered();
        let graph = TaskGraph::build(tasks, edges)?;
        let config = &self.config;

        if graph.node_count() == 0 {
            return Ok(Layout::empty(config.direction));
        }

        let layout = match config.algorithm {
            Algorithm::Grid => self.grid(&graph),
            Algorithm::SimpleHierarchy => self.simple_hierarchy(&graph),
            Algorithm::Auto if graph.node_count() == 1 || graph.edge_count() == 0 => {
                tracing::debug!("trivial input, using grid layout");
                self.grid(&graph)
            }
            Algorithm::Auto | Algorithm::Hierarchical => SugiyamaLayout::new(config)
                .layout(&graph)
                .unwrap_or_else(|| {
                    tracing::warn!("hierarchical pipeline could not proceed, using simple hierarchy");
                    self.simple_hierarchy(&graph)
                }),
        };

        tracing::debug!(
            "layout done: mode {:?}, {} layer(s), {} crossing(s)",
            layout.mode,
            layout.layer_count,
            layout.crossings
        );
        Ok(layout)
    }

    fn grid(&self, graph: &TaskGraph) -> Layout {
        let nodes = fallback::grid_layout(graph.ids(), &self.config);
        self.fallback_layout(graph, LayoutMode::Grid, nodes)
    }

    fn simple_hierarchy(&self, graph: &TaskGraph) -> Layout {
        let nodes = fallback::simple_hierarchy(graph.ids(), &self.config);
        self.fallback_layout(graph, LayoutMode::SimpleHierarchy, nodes)
    }

    fn fallback_layout(&self, graph: &TaskGraph, mode: LayoutMode, nodes: Vec<PlacedNode>) -> Layout {
        let edges = routing::straight_edges(graph, &nodes);
        let mut layout = Layout::assemble(mode, self.config.direction, nodes);
        layout.edges = edges;
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
