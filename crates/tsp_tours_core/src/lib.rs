//! Symmetric TSP tour construction over undirected weighted graphs
//! loaded from CSV nodes/edges files. Exact backtracking for small
//! explicit graphs, an MST-based 2-approximation, and two greedy
//! nearest-neighbor heuristics; incomplete graphs are completed on the
//! fly with great-circle distances between vertex coordinates.

mod algo;
mod error;
mod geo;
mod graph;
mod heap;
mod loader;
pub mod logging;
mod solver;

pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use graph::{Edge, EdgeHandle, Graph, Vertex, VertexId};
pub use solver::TspSolver;
