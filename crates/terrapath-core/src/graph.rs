//! Weighted adjacency graphs over terrain grids.

use std::f64::consts::SQRT_2;

use crate::grid::TerrainGrid;
use crate::terrain;

/// Flat identifier of a grid cell: `row * width + col`.
pub type NodeId = usize;

/// Encode `(row, col)` into a [`NodeId`] for a grid of the given width.
#[inline]
pub const fn node_id(row: usize, col: usize, width: usize) -> NodeId {
    row * width + col
}

/// Decode a [`NodeId`] back into `(row, col)` for a grid of the given width.
#[inline]
pub const fn node_pos(id: NodeId, width: usize) -> (usize, usize) {
    (id / width, id % width)
}

/// The eight grid directions, cardinal then diagonal.
const DIRS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// An undirected weighted graph over the cells of a terrain grid.
///
/// Adjacency is stored per raw cell id; impassable cells keep an empty
/// neighbor list and are absent from the node roster. Invariant: the
/// adjacency is symmetric — `(v, w)` appears in `neighbors(u)` exactly
/// when `(u, w)` appears in `neighbors(v)`. [`Graph::add_edge`] inserts
/// both arcs at once, so the invariant holds at all times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    width: usize,
    adj: Vec<Vec<(NodeId, f64)>>,
    nodes: Vec<NodeId>,
}

impl Graph {
    /// Create a graph with `cells` empty adjacency rows and no nodes.
    pub fn new(width: usize, cells: usize) -> Self {
        Self {
            width,
            adj: vec![Vec::new(); cells],
            nodes: Vec::new(),
        }
    }

    /// Build the adjacency graph for a terrain grid.
    ///
    /// Every passable cell becomes a node. Orthogonal moves connect any
    /// two passable neighbors; diagonal moves additionally require both
    /// orthogonal corner cells to be passable and all four touched cells
    /// to share one movement cost, which rules out corner cutting and
    /// diagonal shortcuts across a cost boundary. Orthogonal weight is
    /// the mean of the endpoint costs; diagonal weight is `√2` times
    /// that mean.
    pub fn from_grid(grid: &TerrainGrid) -> Self {
        let width = grid.width();
        let mut graph = Self::new(width, width * grid.height());

        for (r, c, sym) in grid.iter() {
            if !terrain::passable(sym) {
                continue;
            }
            let u = node_id(r, c, width);
            graph.add_node(u);
            let here = terrain::cost(sym);

            for (dr, dc) in DIRS_8 {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if nr < 0 || nc < 0 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                let Some(nsym) = grid.at(nr, nc) else {
                    continue;
                };
                if !terrain::passable(nsym) {
                    continue;
                }
                let v = node_id(nr, nc, width);
                if v <= u {
                    // Each unordered pair is inserted once, from its
                    // smaller endpoint.
                    continue;
                }

                let there = terrain::cost(nsym);
                let diagonal = dr != 0 && dc != 0;
                if diagonal {
                    let corners_ok = grid.at(r, nc).zip(grid.at(nr, c)).is_some_and(|(s1, s2)| {
                        terrain::passable(s1)
                            && terrain::passable(s2)
                            && terrain::cost(s1) == here
                            && terrain::cost(s2) == here
                            && there == here
                    });
                    if !corners_ok {
                        continue;
                    }
                }

                let step = if diagonal { SQRT_2 } else { 1.0 };
                graph.add_edge(u, v, step * (here + there) / 2.0);
            }
        }

        graph
    }

    /// Register `id` as a passable node.
    ///
    /// Ids must be added in ascending order, once each.
    pub fn add_node(&mut self, id: NodeId) {
        debug_assert!(self.nodes.last().is_none_or(|&last| last < id));
        self.nodes.push(id);
    }

    /// Insert the undirected edge `u — v` with weight `w` (both arcs).
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: f64) {
        self.adj[u].push((v, w));
        self.adj[v].push((u, w));
    }

    /// Grid width the node ids are encoded against.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Size of the raw id space (all grid cells, passable or not).
    #[inline]
    pub fn cells(&self) -> usize {
        self.adj.len()
    }

    /// Passable node ids in ascending order.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of passable nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` refers to a passable node.
    #[inline]
    pub fn is_node(&self, id: NodeId) -> bool {
        self.nodes.binary_search(&id).is_ok()
    }

    /// Neighbors of `u` with their edge weights.
    #[inline]
    pub fn neighbors(&self, u: NodeId) -> &[(NodeId, f64)] {
        &self.adj[u]
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}
