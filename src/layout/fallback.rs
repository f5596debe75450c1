//! Degenerate layouts that ignore edge structure.
//!
//! Both place every task exactly once, in input order, and cannot fail.
//! Rows and levels only shape coordinates: every task is reported on
//! layer 0 with its input index as order.

use super::types::PlacedNode;
use crate::config::LayoutConfig;

/// Rows of `grid_columns` tasks; the column axis is centered on column
/// `grid_columns / 2`.
pub fn grid_layout<S: AsRef<str>>(ids: &[S], config: &LayoutConfig) -> Vec<PlacedNode> {
    let cols = config.grid_columns.max(1);
    let center = (cols / 2) as f64;
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let (row, col) = (i / cols, i % cols);
            let p = config.direction.place(
                row as f64 * config.layer_spacing,
                (col as f64 - center) * config.node_spacing,
            );
            PlacedNode {
                id: id.as_ref().to_string(),
                layer: 0,
                order: i,
                x: p.x,
                y: p.y,
            }
        })
        .collect()
}

/// Consecutive groups of `group_size` tasks per level, each group centered.
pub fn simple_hierarchy<S: AsRef<str>>(ids: &[S], config: &LayoutConfig) -> Vec<PlacedNode> {
    let group = config.group_size.max(1);
    let start = -((group - 1) as f64) * config.node_spacing / 2.0;
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let (level, pos) = (i / group, i % group);
            let p = config.direction.place(
                level as f64 * config.layer_spacing,
                start + pos as f64 * config.node_spacing,
            );
            PlacedNode {
                id: id.as_ref().to_string(),
                layer: 0,
                order: i,
                x: p.x,
                y: p.y,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_fallback.rs"]
mod tests;
