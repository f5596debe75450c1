//! Configuration for the layout pipeline.
//!
//! Every tunable is carried in [`LayoutConfig`] and passed into each call;
//! the engine keeps no process-wide settings.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::types::{Direction, Size};

pub const DEFAULT_LAYER_SPACING: f64 = 200.0;
pub const DEFAULT_NODE_SPACING: f64 = 150.0;
pub const DEFAULT_ISOLATED_SPACING: f64 = 100.0;
pub const DEFAULT_MIN_NODE_GAP: f64 = 30.0;
pub const DEFAULT_MAX_SWEEPS: usize = 8;
pub const MAX_SWEEPS_CAP: usize = 64;
pub const DEFAULT_GRID_COLUMNS: usize = 5;
pub const DEFAULT_GROUP_SIZE: usize = 4;
/// Inset of an edge port from the border of a sized node.
pub const PORT_MARGIN: f64 = 8.0;
/// Clearance between the main drawing and isolated nodes placed aside.
pub const ISOLATED_MARGIN: f64 = 200.0;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Which placement strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Hierarchical pipeline, or the grid for trivial inputs.
    #[default]
    Auto,
    /// Always the hierarchical pipeline.
    Hierarchical,
    /// Rows of `grid_columns`, ignoring edges.
    Grid,
    /// Groups of `group_size` per level, ignoring edges.
    SimpleHierarchy,
}

impl FromStr for Algorithm {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Algorithm::Auto),
            "hierarchical" | "sugiyama" => Ok(Algorithm::Hierarchical),
            "grid" => Ok(Algorithm::Grid),
            "simple" | "simple_hierarchy" | "simple-hierarchy" => Ok(Algorithm::SimpleHierarchy),
            _ => Err(LayoutError::InvalidOption {
                option: "algorithm",
                value: s.to_string(),
                expected: "auto, hierarchical, grid, simple",
            }),
        }
    }
}

/// Key used to reorder a layer during crossing reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingHeuristic {
    /// Mean position of the neighbors in the fixed layer.
    #[default]
    Barycenter,
    /// Median position of the neighbors in the fixed layer.
    Median,
}

impl FromStr for OrderingHeuristic {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "barycenter" | "mean" => Ok(OrderingHeuristic::Barycenter),
            "median" => Ok(OrderingHeuristic::Median),
            _ => Err(LayoutError::InvalidOption {
                option: "ordering heuristic",
                value: s.to_string(),
                expected: "barycenter, median",
            }),
        }
    }
}

/// Where nodes without any edge end up in a hierarchical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolatedPlacement {
    /// Layer 0, ordered with the other nodes.
    #[default]
    InLayer,
    /// A separate line beside the main drawing.
    Aside,
}

// ─── LayoutConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub direction: Direction,
    /// Distance between consecutive layers.
    pub layer_spacing: f64,
    /// Distance between neighbors within a layer.
    pub node_spacing: f64,
    /// Distance between isolated nodes placed aside.
    pub isolated_spacing: f64,
    /// Border-to-border gap kept between sized nodes of one layer.
    pub min_node_gap: f64,
    /// Cap on crossing-reduction passes.
    pub max_sweeps: usize,
    pub ordering: OrderingHeuristic,
    pub algorithm: Algorithm,
    pub isolated: IsolatedPlacement,
    /// Move nodes down toward their successors after longest-path layering.
    pub sink_sources: bool,
    pub grid_columns: usize,
    pub group_size: usize,
    /// Optional box sizes by task id; unsized tasks are points.
    pub node_sizes: HashMap<String, Size>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::TB,
            layer_spacing: DEFAULT_LAYER_SPACING,
            node_spacing: DEFAULT_NODE_SPACING,
            isolated_spacing: DEFAULT_ISOLATED_SPACING,
            min_node_gap: DEFAULT_MIN_NODE_GAP,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            ordering: OrderingHeuristic::Barycenter,
            algorithm: Algorithm::Auto,
            isolated: IsolatedPlacement::InLayer,
            sink_sources: false,
            grid_columns: DEFAULT_GRID_COLUMNS,
            group_size: DEFAULT_GROUP_SIZE,
            node_sizes: HashMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_spacing(mut self, layer_spacing: f64, node_spacing: f64) -> Self {
        self.layer_spacing = layer_spacing;
        self.node_spacing = node_spacing;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingHeuristic) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    pub fn with_isolated(mut self, isolated: IsolatedPlacement) -> Self {
        self.isolated = isolated;
        self
    }

    pub fn with_sink_sources(mut self, sink_sources: bool) -> Self {
        self.sink_sources = sink_sources;
        self
    }

    pub fn with_node_size(mut self, id: impl Into<String>, size: Size) -> Self {
        self.node_sizes.insert(id.into(), size);
        self
    }

    /// Replace unusable values with safe defaults.
    ///
    /// Spacings must be positive and finite; gaps non-negative and finite;
    /// counts at least 1; sizes non-negative and finite (others are dropped).
    pub fn normalized(&self) -> Self {
        let mut cfg = self.clone();
        cfg.layer_spacing = positive_or(cfg.layer_spacing, DEFAULT_LAYER_SPACING);
        cfg.node_spacing = positive_or(cfg.node_spacing, DEFAULT_NODE_SPACING);
        cfg.isolated_spacing = positive_or(cfg.isolated_spacing, DEFAULT_ISOLATED_SPACING);
        cfg.min_node_gap = non_negative_or(cfg.min_node_gap, DEFAULT_MIN_NODE_GAP);
        cfg.max_sweeps = cfg.max_sweeps.clamp(1, MAX_SWEEPS_CAP);
        cfg.grid_columns = cfg.grid_columns.max(1);
        cfg.group_size = cfg.group_size.max(1);
        cfg.node_sizes.retain(|id, size| {
            let ok = size.width.is_finite()
                && size.height.is_finite()
                && size.width >= 0.0
                && size.height >= 0.0;
            if !ok {
                tracing::debug!("dropping unusable size for task {}: {:?}", id, size);
            }
            ok
        });
        cfg
    }

    pub fn size_of(&self, id: &str) -> Option<Size> {
        self.node_sizes.get(id).copied()
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

fn non_negative_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
