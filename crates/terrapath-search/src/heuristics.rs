//! Admissible distance heuristics.

use std::f64::consts::SQRT_2;

use terrapath_core::{NodeId, node_pos};

use crate::fastmap::Embedding;

/// Octile distance between two cells of a grid with the given width.
///
/// The exact shortest-path distance on an unobstructed uniform-cost
/// 8-connected grid with diagonal cost √2, and therefore an admissible
/// lower bound on any obstructed or cost-graded variant of that grid.
#[inline]
pub fn octile(u: NodeId, v: NodeId, width: usize) -> f64 {
    let (ur, uc) = node_pos(u, width);
    let (vr, vc) = node_pos(v, width);
    let dx = uc.abs_diff(vc) as f64;
    let dy = ur.abs_diff(vr) as f64;
    dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
}

/// Heuristic closure estimating distance to `goal` by octile distance.
pub fn octile_heuristic(goal: NodeId, width: usize) -> impl Fn(NodeId) -> f64 {
    move |n| octile(n, goal, width)
}

/// Heuristic closure taking the pointwise max of octile distance and the
/// embedding L1 distance to `goal`.
///
/// Both bounds are admissible, so the max is admissible too and at least
/// as tight as either alone.
pub fn combined_heuristic(
    goal: NodeId,
    emb: &Embedding,
    width: usize,
) -> impl Fn(NodeId) -> f64 + '_ {
    move |n| octile(n, goal, width).max(emb.l1(n, goal))
}
