mod backtracking;
mod nearest;
mod triangular;

pub(crate) use backtracking::backtracking;
pub(crate) use nearest::{nearest_neighbor, real_world_nearest_neighbor};
pub(crate) use triangular::triangular;

/// Per-run algorithm state, indexed by dense vertex index. A fresh
/// instance is allocated at the start of every invocation, so no state
/// carries over between runs.
pub(crate) struct RunState {
    pub(crate) visited: Vec<bool>,
    pub(crate) dist: Vec<f64>,
    pub(crate) parent: Vec<Option<usize>>,
}

impl RunState {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            dist: vec![f64::INFINITY; n],
            parent: vec![None; n],
        }
    }
}
