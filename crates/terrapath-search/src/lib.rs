//! Shortest-path search with FastMap embedding heuristics.
//!
//! The query half of the terrapath pipeline:
//!
//! - **Dijkstra** single-source distance tables ([`dijkstra`])
//! - **FastMap** low-dimensional graph embeddings ([`FastMap`],
//!   [`compute_embedding`])
//! - **Heuristics** — grid octile distance and its admissible combination
//!   with the embedding L1 distance ([`octile_heuristic`],
//!   [`combined_heuristic`])
//! - **A\*** optimal path cost ([`shortest_path_cost`])
//!
//! The embedding L1 distance and the octile distance are both admissible
//! lower bounds on true path cost; their pointwise maximum dominates
//! either alone and stays admissible, so A* remains optimal.

mod astar;
mod dijkstra;
mod error;
mod fastmap;
mod frontier;
mod heuristics;

pub use astar::shortest_path_cost;
pub use dijkstra::{UNREACHABLE, dijkstra};
pub use error::{EmbedError, EmbedResult, SearchError, SearchResult};
pub use fastmap::{Embedding, FastMap, MAX_PIVOT_RETRIES, compute_embedding};
pub use heuristics::{combined_heuristic, octile, octile_heuristic};
