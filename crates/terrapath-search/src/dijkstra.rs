//! Single-source shortest-path distance tables.

use std::collections::BinaryHeap;

use terrapath_core::{Graph, NodeId};

use crate::frontier::OpenEntry;

/// Sentinel distance for cells no path reaches.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Compute the full single-source distance table from `source`.
///
/// Returns one entry per cell of the graph's id space; cells without a
/// path from `source` (impassable cells included) hold [`UNREACHABLE`].
/// An out-of-range source yields an all-[`UNREACHABLE`] table.
pub fn dijkstra(graph: &Graph, source: NodeId) -> Vec<f64> {
    let mut dist = vec![UNREACHABLE; graph.cells()];
    if source >= graph.cells() {
        return dist;
    }
    dist[source] = 0.0;

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        f: 0.0,
        g: 0.0,
        node: source,
    });

    while let Some(OpenEntry { g, node, .. }) = open.pop() {
        if g > dist[node] {
            // Stale entry, already relaxed through a cheaper path.
            continue;
        }
        for &(next, w) in graph.neighbors(node) {
            let ng = g + w;
            if ng < dist[next] {
                dist[next] = ng;
                open.push(OpenEntry {
                    f: ng,
                    g: ng,
                    node: next,
                });
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::TerrainGrid;

    fn graph(lines: &[&str]) -> Graph {
        Graph::from_grid(&TerrainGrid::from_lines(lines.iter().copied()).unwrap())
    }

    #[test]
    fn distances_accumulate_edge_weights() {
        // 0 -1.5- 1 -1.5- 2 through swamp.
        let g = graph(&[".S."]);
        let dist = dijkstra(&g, 0);
        assert_eq!(dist[0], 0.0);
        assert_eq!(dist[1], 1.5);
        assert_eq!(dist[2], 3.0);
    }

    #[test]
    fn walls_stay_unreachable() {
        let g = graph(&[".@."]);
        let dist = dijkstra(&g, 0);
        assert_eq!(dist[0], 0.0);
        assert!(dist[1].is_infinite());
        assert!(dist[2].is_infinite());
    }

    #[test]
    fn diagonal_shortcut_beats_orthogonal_detour() {
        let g = graph(&["..", ".."]);
        let dist = dijkstra(&g, 0);
        assert!((dist[3] - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_source_is_all_unreachable() {
        let g = graph(&[".."]);
        let dist = dijkstra(&g, 99);
        assert!(dist.iter().all(|d| d.is_infinite()));
    }
}
