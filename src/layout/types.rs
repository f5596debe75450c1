//! Layout types: Direction, Point, PlacedNode, VirtualNode, RoutedEdge, Layout.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Flow direction of the layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction {
    /// Layers stacked top to bottom.
    #[default]
    TB,
    /// Layers stacked bottom to top.
    BT,
    /// Layers laid out left to right.
    LR,
    /// Layers laid out right to left.
    RL,
}

impl Direction {
    /// True when layers are columns (LR / RL).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }

    /// +1 when layer coordinates grow with the layer index, -1 when mirrored.
    pub fn layer_sign(self) -> f64 {
        match self {
            Direction::TB | Direction::LR => 1.0,
            Direction::BT | Direction::RL => -1.0,
        }
    }

    /// Map a (layer-axis, cross-axis) pair into Cartesian coordinates.
    pub fn place(self, along: f64, across: f64) -> Point {
        let along = along * self.layer_sign();
        if self.is_horizontal() {
            Point::new(along, across)
        } else {
            Point::new(across, along)
        }
    }

    /// Split a size into (extent along the layer axis, extent across it).
    pub fn extents(self, size: Size) -> (f64, f64) {
        if self.is_horizontal() {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        }
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TB" | "TD" => Ok(Direction::TB),
            "BT" => Ok(Direction::BT),
            "LR" => Ok(Direction::LR),
            "RL" => Ok(Direction::RL),
            _ => Err(LayoutError::InvalidOption {
                option: "direction",
                value: s.to_string(),
                expected: "TB, TD, BT, LR, RL",
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::TB => "TB",
            Direction::BT => "BT",
            Direction::LR => "LR",
            Direction::RL => "RL",
        };
        f.write_str(s)
    }
}

// ─── Point / Size ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Box size of a node, used for overlap-free packing and edge ports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ─── NodeRef ─────────────────────────────────────────────────────────────────

/// A node of the layered graph: a real task (by input index) or a
/// virtual node (by index into the virtual node registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Real(usize),
    Virtual(usize),
}

// ─── Placed nodes and edges ──────────────────────────────────────────────────

/// A real task with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: String,
    /// Dependency layer. Grid and simple-hierarchy layouts put every task
    /// on layer 0.
    pub layer: usize,
    /// Position within the layer after crossing reduction; input index in
    /// the fallback layouts.
    pub order: usize,
    pub x: f64,
    pub y: f64,
}

impl PlacedNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A synthetic bend point of an edge spanning several layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VirtualNode {
    /// Index into [`Layout::edges`] of the edge this node belongs to.
    pub edge: usize,
    /// Original source of that edge.
    pub from: String,
    /// Original destination of that edge.
    pub to: String,
    pub layer: usize,
    pub order: usize,
    pub x: f64,
    pub y: f64,
}

/// An input edge drawn as a polyline, in its original orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutedEdge {
    pub from: String,
    pub to: String,
    /// Set when the cycle breaker flipped this edge for layering.
    pub reversed: bool,
    pub points: Vec<Point>,
}

/// Which path of the engine produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Empty,
    Hierarchical,
    Grid,
    SimpleHierarchy,
}

/// Axis-aligned bounds of the real node centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// The full output of one engine call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub direction: Direction,
    /// Real tasks, in task input order.
    pub nodes: Vec<PlacedNode>,
    pub virtual_nodes: Vec<VirtualNode>,
    /// One polyline per distinct, non-loop input edge, in input order.
    pub edges: Vec<RoutedEdge>,
    /// Edges flipped by the cycle breaker, in their original orientation.
    pub reversed_edges: Vec<(String, String)>,
    pub layer_count: usize,
    /// Total crossings between adjacent layers of the final ordering.
    pub crossings: usize,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Layout {
    pub(crate) fn assemble(mode: LayoutMode, direction: Direction, nodes: Vec<PlacedNode>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        let layer_count = nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0);
        Self {
            mode,
            direction,
            nodes,
            virtual_nodes: Vec::new(),
            edges: Vec::new(),
            reversed_edges: Vec::new(),
            layer_count,
            crossings: 0,
            index,
        }
    }

    pub(crate) fn empty(direction: Direction) -> Self {
        Self::assemble(LayoutMode::Empty, direction, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.node(id).map(PlacedNode::position)
    }

    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.node(id).map(|n| n.layer)
    }

    /// task id → (x, y) for every real task.
    pub fn coordinates(&self) -> HashMap<String, Point> {
        self.nodes
            .iter()
            .map(|n| (n.id.clone(), n.position()))
            .collect()
    }

    /// task id → layer index for every real task.
    pub fn layers(&self) -> HashMap<String, usize> {
        self.nodes.iter().map(|n| (n.id.clone(), n.layer)).collect()
    }

    /// Whether the edge `from -> to` (original orientation) was reversed.
    pub fn is_reversed(&self, from: &str, to: &str) -> bool {
        self.reversed_edges
            .iter()
            .any(|(f, t)| f == from && t == to)
    }

    /// Virtual nodes of the routed edge at `edge`, in layer order.
    pub fn virtual_nodes_of(&self, edge: usize) -> impl Iterator<Item = &VirtualNode> {
        self.virtual_nodes.iter().filter(move |v| v.edge == edge)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.nodes.first()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.nodes.iter().fold(init, |b, n| Bounds {
            min_x: b.min_x.min(n.x),
            min_y: b.min_y.min(n.y),
            max_x: b.max_x.max(n.x),
            max_y: b.max_y.max(n.y),
        }))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
