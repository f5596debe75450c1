//! Coordinate assignment.
//!
//! A node's layer sets its coordinate along the layer axis
//! (`layer * layer_spacing`, mirrored for BT / RL). Within a layer nodes
//! sit `node_spacing` apart, or further when sized boxes would otherwise
//! touch, and every layer is centered on 0 on its own. Virtual nodes take a
//! slot like real ones so routed edges stay clear of the tasks.

use super::normalize::LayeredGraph;
use super::types::{Point, Size};
use crate::config::{ISOLATED_MARGIN, LayoutConfig};

/// Coordinates of every dense node of `g`.
///
/// `sizes` is indexed by task; virtual nodes are points.
pub fn assign_coordinates(
    g: &LayeredGraph,
    order: &[Vec<usize>],
    config: &LayoutConfig,
    sizes: &[Option<Size>],
) -> Vec<Point> {
    let direction = config.direction;
    let across_extent = |dense: usize| -> Option<f64> {
        g.size_of(dense, sizes).map(|size| direction.extents(size).1)
    };

    let mut coords = vec![Point::default(); g.node_count()];
    for (layer, nodes) in order.iter().enumerate() {
        let along = layer as f64 * config.layer_spacing;
        let extents: Vec<Option<f64>> = nodes.iter().map(|&n| across_extent(n)).collect();
        let offsets = pack_layer(&extents, config.node_spacing, config.min_node_gap);
        for (&node, across) in nodes.iter().zip(offsets) {
            coords[node] = direction.place(along, across);
        }
    }

    place_aside(g, &mut coords, config, sizes);
    coords
}

/// Centered in-layer offsets for a sequence of nodes.
///
/// Unsized neighbors are exactly `spacing` apart; a sized pair keeps at
/// least `min_gap` between their borders.
pub fn pack_layer(extents: &[Option<f64>], spacing: f64, min_gap: f64) -> Vec<f64> {
    let mut offsets: Vec<f64> = Vec::with_capacity(extents.len());
    for (i, extent) in extents.iter().enumerate() {
        let Some(prev_offset) = offsets.last().copied() else {
            offsets.push(0.0);
            continue;
        };
        let step = match (extents[i - 1], *extent) {
            (None, None) => spacing,
            (a, b) => {
                let needed = (a.unwrap_or(0.0) + b.unwrap_or(0.0)) / 2.0 + min_gap;
                spacing.max(needed)
            }
        };
        offsets.push(prev_offset + step);
    }

    if let (Some(&first), Some(&last)) = (offsets.first(), offsets.last()) {
        let shift = (first + last) / 2.0;
        for offset in &mut offsets {
            *offset -= shift;
        }
    }
    offsets
}

/// Line up tasks marked aside beyond the low edge of the drawing on the
/// in-layer axis (left for TB / BT, above for LR / RL), in input order.
fn place_aside(g: &LayeredGraph, coords: &mut [Point], config: &LayoutConfig, sizes: &[Option<Size>]) {
    let aside: Vec<usize> = g.aside_tasks().collect();
    if aside.is_empty() {
        return;
    }

    let direction = config.direction;
    let horizontal = direction.is_horizontal();
    let across_of = |p: Point| if horizontal { p.y } else { p.x };
    let half_extent = |dense: usize| -> f64 {
        g.size_of(dense, sizes)
            .map_or(0.0, |size| direction.extents(size).1 / 2.0)
    };

    let low_edge = (0..g.node_count())
        .filter(|&d| !g.is_aside(d))
        .map(|d| across_of(coords[d]) - half_extent(d))
        .reduce(f64::min)
        .unwrap_or(0.0);

    let mut offset = 0.0;
    for task in aside {
        let half = half_extent(task);
        let across = low_edge - ISOLATED_MARGIN - offset - half;
        coords[task] = if horizontal {
            Point::new(0.0, across)
        } else {
            Point::new(across, 0.0)
        };
        offset += 2.0 * half + config.isolated_spacing;
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_position.rs"]
mod tests;
