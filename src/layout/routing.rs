//! Edge routing: one polyline per input edge.
//!
//! A hierarchical route runs from the source port through the edge's
//! virtual nodes to the target port. Routes of reversed edges are flipped
//! back so every polyline starts at the edge's original source.

use super::acyclic::AcyclicGraph;
use super::graph::TaskGraph;
use super::normalize::LayeredGraph;
use super::types::{Direction, NodeRef, PlacedNode, Point, RoutedEdge, Size};
use crate::config::PORT_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// Side facing the next layer.
    Out,
    /// Side facing the previous layer.
    In,
}

/// Where an edge leaves or enters a node. Unsized nodes are points.
pub fn port(center: Point, size: Option<Size>, direction: Direction, side: Port) -> Point {
    let Some(size) = size else {
        return center;
    };
    let (along, _) = direction.extents(size);
    let inset = (along / 2.0 - PORT_MARGIN).max(0.0);
    let sign = match side {
        Port::Out => direction.layer_sign(),
        Port::In => -direction.layer_sign(),
    };
    let delta = inset * sign;
    if direction.is_horizontal() {
        Point::new(center.x + delta, center.y)
    } else {
        Point::new(center.x, center.y + delta)
    }
}

pub fn route_edges(
    graph: &TaskGraph,
    dag: &AcyclicGraph,
    lg: &LayeredGraph,
    coords: &[Point],
    sizes: &[Option<Size>],
    direction: Direction,
) -> Vec<RoutedEdge> {
    dag.edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let head = lg.dense(NodeRef::Real(edge.from));
            let tail = lg.dense(NodeRef::Real(edge.to));
            let chain = lg.chain(i);
            let mut points = Vec::with_capacity(chain.len() + 2);
            points.push(port(coords[head], lg.size_of(head, sizes), direction, Port::Out));
            points.extend(chain.iter().map(|&v| coords[v]));
            points.push(port(coords[tail], lg.size_of(tail, sizes), direction, Port::In));
            if edge.reversed {
                points.reverse();
            }

            let (from, to) = graph.edges()[edge.original];
            RoutedEdge {
                from: graph.id(from).to_string(),
                to: graph.id(to).to_string(),
                reversed: edge.reversed,
                points,
            }
        })
        .collect()
}

/// Center-to-center segments for layouts that ignore edge structure.
pub fn straight_edges(graph: &TaskGraph, nodes: &[PlacedNode]) -> Vec<RoutedEdge> {
    graph
        .edges()
        .iter()
        .map(|&(from, to)| RoutedEdge {
            from: graph.id(from).to_string(),
            to: graph.id(to).to_string(),
            reversed: false,
            points: vec![nodes[from].position(), nodes[to].position()],
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_routing.rs"]
mod tests;
