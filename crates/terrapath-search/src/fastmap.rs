//! FastMap graph embeddings.
//!
//! FastMap assigns every node a `k`-dimensional coordinate vector whose
//! L1 distance approximates, and never exceeds, shortest-path distance.
//! Each dimension picks a far-apart pivot pair with two Dijkstra sweeps,
//! projects every node of the pivots' component onto that axis, then
//! subtracts the projected distance from the edge weights so later
//! dimensions capture the structure that remains.

use rand::Rng;
use rand::RngExt;
use rand::rngs::ThreadRng;

use terrapath_core::{Graph, NodeId};

use crate::dijkstra::dijkstra;
use crate::error::{EmbedError, EmbedResult};

/// Reseeding attempts per dimension before pivot selection gives up.
pub const MAX_PIVOT_RETRIES: usize = 32;

/// A `k`-dimensional coordinate table over a graph's id space.
///
/// Coordinates start at zero and stay zero wherever the embedding never
/// writes: impassable cells, nodes outside every pivot component, and
/// dimensions past an early termination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Embedding {
    k: usize,
    coords: Vec<f64>,
}

impl Embedding {
    fn zeroed(cells: usize, k: usize) -> Self {
        Self {
            k,
            coords: vec![0.0; cells * k],
        }
    }

    /// Number of embedding dimensions.
    #[inline]
    pub fn dims(&self) -> usize {
        self.k
    }

    /// Coordinate of node `v` on dimension `dim`.
    #[inline]
    pub fn coord(&self, v: NodeId, dim: usize) -> f64 {
        self.coords[v * self.k + dim]
    }

    #[inline]
    fn coord_mut(&mut self, v: NodeId, dim: usize) -> &mut f64 {
        &mut self.coords[v * self.k + dim]
    }

    /// L1 distance between two nodes' coordinate vectors.
    ///
    /// Each dimension is a non-expansive projection of shortest-path
    /// distance, so this sum is a lower bound on the true path cost and
    /// is admissible as an A* heuristic.
    pub fn l1(&self, u: NodeId, v: NodeId) -> f64 {
        let (u0, v0) = (u * self.k, v * self.k);
        (0..self.k)
            .map(|d| (self.coords[u0 + d] - self.coords[v0 + d]).abs())
            .sum()
    }
}

/// FastMap embedding engine.
///
/// Generic over its random source so callers and tests can supply a
/// seeded generator; [`FastMap::new`] uses the thread rng.
#[derive(Debug)]
pub struct FastMap<R: Rng> {
    k: usize,
    epsilon: f64,
    rng: R,
}

impl FastMap<ThreadRng> {
    /// Engine with `k` dimensions, tolerance `epsilon` and the thread rng.
    pub fn new(k: usize, epsilon: f64) -> EmbedResult<Self> {
        Self::with_rng(k, epsilon, rand::rng())
    }
}

impl<R: Rng> FastMap<R> {
    /// Engine with an explicit random source.
    ///
    /// `k` must be at least 1 and `epsilon` a positive finite tolerance.
    pub fn with_rng(k: usize, epsilon: f64, rng: R) -> EmbedResult<Self> {
        if k == 0 {
            return Err(EmbedError::InvalidK);
        }
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(EmbedError::InvalidEpsilon(epsilon));
        }
        Ok(Self { k, epsilon, rng })
    }

    /// Compute the embedding of `graph`.
    ///
    /// Runs up to `k` projection passes over successive residual
    /// snapshots of the graph, stopping early once the selected pivots
    /// are closer than `epsilon` apart; coordinate slots of skipped
    /// dimensions stay zero. A graph with fewer than two nodes has no
    /// pivot pair and embeds to the all-zero table at once.
    pub fn embed(&mut self, graph: &Graph) -> EmbedResult<Embedding> {
        let mut emb = Embedding::zeroed(graph.cells(), self.k);
        if graph.node_count() < 2 {
            return Ok(emb);
        }

        let mut cur = graph.clone();
        for dim in 0..self.k {
            let (a, b, dist_a, dist_b) = self.select_pivots(&cur)?;
            let dab = dist_a[b];
            if dab < self.epsilon {
                log::debug!(
                    "dimension {dim}: pivot separation {dab:.3e} below tolerance, stopping"
                );
                break;
            }
            log::debug!("dimension {dim}: pivots ({a}, {b}), separation {dab:.3}");

            for &v in cur.nodes() {
                let (da, db) = (dist_a[v], dist_b[v]);
                if da.is_finite() && db.is_finite() {
                    *emb.coord_mut(v, dim) = (da + dab - db) / 2.0;
                }
            }

            cur = residual(&cur, &emb, dim, &dist_a, &dist_b);
        }

        Ok(emb)
    }

    /// Double-sweep pivot selection on the current residual graph.
    ///
    /// Seeds at a uniformly random node and walks to the farthest
    /// finite-distance node, approximating the component's diameter with
    /// two Dijkstra runs. Seeds whose component contains no other node
    /// are resampled, up to [`MAX_PIVOT_RETRIES`] times.
    #[allow(clippy::type_complexity)]
    fn select_pivots(&mut self, graph: &Graph) -> EmbedResult<(NodeId, NodeId, Vec<f64>, Vec<f64>)> {
        let nodes = graph.nodes();
        for _ in 0..MAX_PIVOT_RETRIES {
            let a = nodes[self.rng.random_range(0..nodes.len())];
            let dist_a = dijkstra(graph, a);
            let Some(b) = farthest_finite(nodes, &dist_a, a) else {
                log::debug!("pivot seed {a} is isolated, resampling");
                continue;
            };
            let dist_b = dijkstra(graph, b);
            if !dist_b[a].is_finite() {
                // Both pivots must lie in one component.
                continue;
            }
            return Ok((a, b, dist_a, dist_b));
        }
        Err(EmbedError::DegenerateGraph {
            retries: MAX_PIVOT_RETRIES,
        })
    }
}

/// The node with the largest finite distance in `dist`, excluding `from`
/// itself; `None` when nothing else is reachable. Ties resolve to the
/// smallest node id.
fn farthest_finite(nodes: &[NodeId], dist: &[f64], from: NodeId) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for &v in nodes {
        if v == from || !dist[v].is_finite() {
            continue;
        }
        if best.is_none_or(|(_, d)| dist[v] > d) {
            best = Some((v, dist[v]));
        }
    }
    best.map(|(v, _)| v)
}

/// Rebuild the residual graph after a projection pass.
///
/// Edges between two projected nodes shed the distance the new axis
/// explains, floored at zero; edges touching an unprojected node keep
/// their weight. Returns a fresh graph value, leaving the input alone.
fn residual(graph: &Graph, emb: &Embedding, dim: usize, dist_a: &[f64], dist_b: &[f64]) -> Graph {
    let projected = |v: NodeId| dist_a[v].is_finite() && dist_b[v].is_finite();

    let mut next = Graph::new(graph.width(), graph.cells());
    for &u in graph.nodes() {
        next.add_node(u);
        for &(v, w) in graph.neighbors(u) {
            if v <= u {
                // One insert per unordered pair.
                continue;
            }
            let w = if projected(u) && projected(v) {
                (w - (emb.coord(u, dim) - emb.coord(v, dim)).abs()).max(0.0)
            } else {
                w
            };
            next.add_edge(u, v, w);
        }
    }
    next
}

/// Compute a `k`-dimensional FastMap embedding with the thread rng.
pub fn compute_embedding(graph: &Graph, k: usize, epsilon: f64) -> EmbedResult<Embedding> {
    FastMap::new(k, epsilon)?.embed(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use terrapath_core::TerrainGrid;

    use crate::astar::shortest_path_cost;

    const EPSILON: f64 = 1e-3;

    fn graph(lines: &[&str]) -> Graph {
        Graph::from_grid(&TerrainGrid::from_lines(lines.iter().copied()).unwrap())
    }

    fn embed(graph: &Graph, k: usize) -> Embedding {
        FastMap::with_rng(k, EPSILON, StdRng::seed_from_u64(7))
            .unwrap()
            .embed(graph)
            .unwrap()
    }

    // -----------------------------------------------------------------------
    // Parameter validation
    // -----------------------------------------------------------------------

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(FastMap::new(0, EPSILON).unwrap_err(), EmbedError::InvalidK);
    }

    #[test]
    fn bad_epsilon_rejected() {
        for eps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                FastMap::new(3, eps).unwrap_err(),
                EmbedError::InvalidEpsilon(_)
            ));
        }
    }

    // -----------------------------------------------------------------------
    // Degenerate graphs
    // -----------------------------------------------------------------------

    #[test]
    fn single_node_embeds_to_zero_immediately() {
        let g = graph(&["."]);
        let emb = embed(&g, 4);
        assert_eq!(emb.dims(), 4);
        for dim in 0..4 {
            assert_eq!(emb.coord(0, dim), 0.0);
        }
    }

    #[test]
    fn all_isolated_nodes_fail_after_retries() {
        // Two passable cells with a wall between them, no edges at all.
        let g = graph(&[".@."]);
        let err = FastMap::with_rng(2, EPSILON, StdRng::seed_from_u64(7))
            .unwrap()
            .embed(&g)
            .unwrap_err();
        assert_eq!(
            err,
            EmbedError::DegenerateGraph {
                retries: MAX_PIVOT_RETRIES
            }
        );
    }

    // -----------------------------------------------------------------------
    // Projection and early termination
    // -----------------------------------------------------------------------

    #[test]
    fn two_node_graph_recovers_exact_distance() {
        let g = graph(&[".."]);
        let emb = embed(&g, 3);
        assert!((emb.l1(0, 1) - 1.0).abs() < 1e-12);
        // One axis explains everything; later dimensions stay zero.
        for v in [0, 1] {
            assert_eq!(emb.coord(v, 1), 0.0);
            assert_eq!(emb.coord(v, 2), 0.0);
        }
    }

    #[test]
    fn excess_dimensions_stay_zero() {
        // A 1x4 corridor has three edges; every pass zeroes at least one
        // residual edge on the pivot path, so by dimension 3 the pivots
        // coincide and the remaining slots stay zero.
        let g = graph(&["...."]);
        let emb = embed(&g, 6);
        for &v in g.nodes() {
            for dim in 3..6 {
                assert_eq!(emb.coord(v, dim), 0.0, "node {v} dim {dim}");
            }
        }
    }

    #[test]
    fn l1_is_admissible_on_weighted_map() {
        let g = graph(&["....", ".@S.", "..S.", "...."]);
        let emb = embed(&g, 4);
        for &u in g.nodes() {
            for &v in g.nodes() {
                let truth = shortest_path_cost(&g, u, v, |_| 0.0).unwrap();
                assert!(
                    emb.l1(u, v) <= truth + 1e-9,
                    "l1({u}, {v}) = {} exceeds {truth}",
                    emb.l1(u, v)
                );
            }
        }
    }

    // -----------------------------------------------------------------------
    // Disconnected components
    // -----------------------------------------------------------------------

    #[test]
    fn disconnected_blocks_embed_independently() {
        // Two open 2x2 blocks separated by a wall row.
        let g = graph(&["..", "..", "@@", "..", ".."]);
        let emb = embed(&g, 2);

        // Every coordinate is finite, and at least one pass wrote
        // something inside a block.
        for &v in g.nodes() {
            for dim in 0..2 {
                assert!(emb.coord(v, dim).is_finite());
            }
        }
        assert!(g.nodes().iter().any(|&v| emb.l1(0, v) > 0.0));

        // Within each block the L1 bound stays admissible.
        for &(u, v) in &[(0, 3), (6, 9)] {
            let truth = shortest_path_cost(&g, u, v, |_| 0.0).unwrap();
            assert!(truth.is_finite());
            assert!(emb.l1(u, v) <= truth + 1e-9);
        }

        // Across blocks there is no path.
        let across = shortest_path_cost(&g, 0, 9, |_| 0.0).unwrap();
        assert!(across.is_infinite());
    }

    #[test]
    fn embedding_is_deterministic_for_a_seeded_rng() {
        let g = graph(&["....", "..@.", "...."]);
        let a = embed(&g, 3);
        let b = embed(&g, 3);
        assert_eq!(a, b);
    }
}
