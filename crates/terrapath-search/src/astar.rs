//! Optimal path cost via A*.

use std::collections::BinaryHeap;

use terrapath_core::{Graph, NodeId};

use crate::error::{SearchError, SearchResult};
use crate::frontier::OpenEntry;

/// Optimal path cost from `start` to `goal` under heuristic `h`.
///
/// Returns [`f64::INFINITY`] when the goal is unreachable; that is a
/// normal result, not an error. Fails only when an endpoint id lies
/// outside the graph's id space.
///
/// `h` must be admissible (never overestimate the remaining cost) for
/// the returned cost to be optimal. Consistency is not required: instead
/// of a decrease-key operation, superseded frontier entries are left in
/// the heap and discarded at pop time by comparing against the best
/// known cost. The input graph is never mutated.
pub fn shortest_path_cost<H>(graph: &Graph, start: NodeId, goal: NodeId, h: H) -> SearchResult<f64>
where
    H: Fn(NodeId) -> f64,
{
    let cells = graph.cells();
    for node in [start, goal] {
        if node >= cells {
            return Err(SearchError::NodeOutOfRange { node, cells });
        }
    }

    let mut best_g = vec![f64::INFINITY; cells];
    best_g[start] = 0.0;

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f: h(start),
        g: 0.0,
        node: start,
    });

    while let Some(OpenEntry { g, node, .. }) = open.pop() {
        if g > best_g[node] {
            // Stale entry, already relaxed through a cheaper path.
            continue;
        }
        if node == goal {
            return Ok(g);
        }
        for &(next, w) in graph.neighbors(node) {
            let ng = g + w;
            if ng < best_g[next] {
                best_g[next] = ng;
                open.push(OpenEntry {
                    f: ng + h(next),
                    g: ng,
                    node: next,
                });
            }
        }
    }

    Ok(f64::INFINITY)
}
