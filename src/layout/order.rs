//! Crossing reduction.
//!
//! Alternating downward / upward sweeps reorder each layer by the
//! barycenter (or median) of its neighbors in the layer just fixed. Sorting
//! is stable on `(key, dense id)`, and dense ids follow input order, so ties
//! always resolve the same way. The pass loop stops once the total crossing
//! count has failed to improve twice in a row, reaches zero, or hits the
//! pass cap; the best ordering seen is kept.

use super::normalize::LayeredGraph;
use crate::config::OrderingHeuristic;

/// Result of crossing reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Dense node ids per layer, left to right (top to bottom for LR).
    pub order: Vec<Vec<usize>>,
    pub crossings: usize,
    pub initial_crossings: usize,
    pub passes: usize,
}

/// Input order per layer: real tasks by task index, then virtual nodes by
/// creation order. Tasks placed aside are left out.
pub fn initial_order(g: &LayeredGraph) -> Vec<Vec<usize>> {
    let mut order = vec![Vec::new(); g.layer_count];
    for dense in 0..g.node_count() {
        if !g.is_aside(dense) {
            order[g.layer_of[dense]].push(dense);
        }
    }
    order
}

pub fn reduce_crossings(
    g: &LayeredGraph,
    mut order: Vec<Vec<usize>>,
    heuristic: OrderingHeuristic,
    max_sweeps: usize,
) -> Reduction {
    let mut positions = vec![0usize; g.node_count()];
    for layer in &order {
        record_positions(layer, &mut positions);
    }

    let initial_crossings = total_crossings(&order, g);
    let mut best = initial_crossings;
    let mut best_order = order.clone();
    let mut stale = 0;
    let mut passes = 0;

    if order.len() >= 2 && best > 0 {
        for pass in 0..max_sweeps {
            if pass % 2 == 0 {
                for layer in 1..order.len() {
                    reorder_layer(&mut order[layer], &g.upper, &mut positions, heuristic);
                }
            } else {
                for layer in (0..order.len() - 1).rev() {
                    reorder_layer(&mut order[layer], &g.lower, &mut positions, heuristic);
                }
            }
            passes += 1;

            let crossings = total_crossings(&order, g);
            tracing::trace!("pass {}: {} crossing(s)", passes, crossings);
            if crossings < best {
                best = crossings;
                best_order = order.clone();
                stale = 0;
            } else {
                stale += 1;
            }
            if best == 0 || stale >= 2 {
                break;
            }
        }
    }

    tracing::debug!(
        "crossing reduction: {} -> {} after {} pass(es)",
        initial_crossings,
        best,
        passes
    );
    Reduction {
        order: best_order,
        crossings: best,
        initial_crossings,
        passes,
    }
}

fn record_positions(layer: &[usize], positions: &mut [usize]) {
    for (i, &node) in layer.iter().enumerate() {
        positions[node] = i;
    }
}

/// Sort one layer by its neighbors' positions in the adjacent fixed layer.
fn reorder_layer(
    layer: &mut Vec<usize>,
    neighbors: &[Vec<usize>],
    positions: &mut [usize],
    heuristic: OrderingHeuristic,
) {
    let mut keyed: Vec<(f64, usize)> = layer
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let mut pos: Vec<f64> = neighbors[node]
                .iter()
                .map(|&nb| positions[nb] as f64)
                .collect();
            let key = match heuristic {
                OrderingHeuristic::Barycenter => barycenter(&pos),
                OrderingHeuristic::Median => median(&mut pos),
            };
            // Nodes without neighbors there hold their slot.
            (key.unwrap_or(i as f64), node)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    *layer = keyed.into_iter().map(|(_, node)| node).collect();
    record_positions(layer, positions);
}

fn barycenter(positions: &[f64]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    Some(positions.iter().sum::<f64>() / positions.len() as f64)
}

fn median(positions: &mut [f64]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    positions.sort_by(f64::total_cmp);
    let mid = positions.len() / 2;
    if positions.len() % 2 == 1 {
        Some(positions[mid])
    } else {
        Some((positions[mid - 1] + positions[mid]) / 2.0)
    }
}

// ─── Crossing count ──────────────────────────────────────────────────────────

/// Sum of crossings over every pair of adjacent layers.
pub fn total_crossings(order: &[Vec<usize>], g: &LayeredGraph) -> usize {
    order
        .windows(2)
        .map(|pair| count_crossings(&pair[0], &pair[1], g))
        .sum()
}

/// Count segment crossings between two adjacent layers.
///
/// Segments are listed by upper position; a crossing is a pair whose
/// lower positions are inverted. Inversions are counted with a Fenwick
/// tree in `O(E log V)`. Segments sharing an upper endpoint never cross.
pub fn count_crossings(upper: &[usize], lower: &[usize], g: &LayeredGraph) -> usize {
    let mut pos_lower = vec![usize::MAX; g.node_count()];
    for (i, &node) in lower.iter().enumerate() {
        pos_lower[node] = i;
    }

    let mut crossings = 0usize;
    let mut seen = 0usize;
    let mut tree = Fenwick::new(lower.len());
    let mut group: Vec<usize> = Vec::new();

    for &node in upper {
        group.clear();
        group.extend(
            g.lower[node]
                .iter()
                .map(|&nb| pos_lower[nb])
                .filter(|&p| p != usize::MAX),
        );
        for &b in &group {
            crossings += seen - tree.prefix(b + 1);
        }
        for &b in &group {
            tree.add(b);
            seen += 1;
        }
    }
    crossings
}

struct Fenwick {
    tree: Vec<usize>,
}

impl Fenwick {
    fn new(size: usize) -> Self {
        Self {
            tree: vec![0; size + 1],
        }
    }

    fn add(&mut self, idx: usize) {
        let mut i = idx + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
    }

    /// Number of entries in `[0, idx)`.
    fn prefix(&self, idx: usize) -> usize {
        let mut acc = 0;
        let mut i = idx.min(self.tree.len() - 1);
        while i > 0 {
            acc += self.tree[i];
            i &= i - 1;
        }
        acc
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_order.rs"]
mod tests;
