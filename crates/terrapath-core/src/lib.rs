//! Terrain grids and weighted adjacency graphs for shortest-path search.
//!
//! This crate covers the construction half of the terrapath pipeline:
//!
//! - **Terrain model** ([`terrain`]) — symbol passability and movement cost
//! - **Terrain grid** ([`TerrainGrid`]) — a validated rectangular symbol matrix
//! - **Graph builder** ([`Graph::from_grid`]) — 8-connected weighted adjacency
//!   with corner-cut suppression
//!
//! Cells are identified by flat `row * width + col` indices ([`NodeId`]);
//! the grid width needed to decode them travels with the [`Graph`].

mod error;
mod graph;
mod grid;
pub mod terrain;

pub use error::{GridError, GridResult};
pub use graph::{Graph, NodeId, node_id, node_pos};
pub use grid::TerrainGrid;
