use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::algo;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::loader;

/// Facade over the loaded graph and the four tour-construction
/// algorithms. Paths are configured first, `load` populates the graph,
/// and each algorithm call runs against the frozen graph.
#[derive(Debug, Default)]
pub struct TspSolver {
    edges_path: Option<PathBuf>,
    nodes_path: Option<PathBuf>,
    graph: Graph,
}

impl TspSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_edges_path(&mut self, path: impl Into<PathBuf>) {
        self.edges_path = Some(path.into());
    }

    pub fn set_nodes_path(&mut self, path: impl Into<PathBuf>) {
        self.nodes_path = Some(path.into());
    }

    /// Reads the configured files into a fresh graph. The nodes file is
    /// optional; without it the graph consists solely of edge-file
    /// endpoints and carries no coordinates.
    pub fn load(&mut self) -> Result<()> {
        let edges_path = self.edges_path.clone().ok_or(Error::MissingEdgesFile)?;

        let mut graph = Graph::new();
        if let Some(nodes_path) = &self.nodes_path {
            loader::read_nodes(BufReader::new(open_data_file(nodes_path)?), &mut graph)?;
        }
        loader::read_edges(BufReader::new(open_data_file(&edges_path)?), &mut graph)?;

        log::info!(
            "load: vertices={} directed_edges={}",
            graph.vertex_count(),
            graph.edge_count()
        );
        self.graph = graph;
        Ok(())
    }

    pub fn graph_loaded(&self) -> bool {
        !self.graph.is_empty()
    }

    pub fn vertex_exists(&self, id: VertexId) -> bool {
        self.graph.find_vertex(id).is_some()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Exact tour length over the explicit edges, `f64::INFINITY` when
    /// no Hamiltonian cycle exists.
    pub fn backtracking(&self) -> f64 {
        let length = algo::backtracking(&self.graph);
        log::info!("backtracking: n={} length={length}", self.graph.vertex_count());
        length
    }

    pub fn triangular(&self) -> Result<f64> {
        let length = algo::triangular(&self.graph)?;
        log::info!("triangular: n={} length={length}", self.graph.vertex_count());
        Ok(length)
    }

    pub fn nearest_neighbor(&self) -> Result<f64> {
        let length = algo::nearest_neighbor(&self.graph)?;
        log::info!(
            "nearest_neighbor: n={} length={length}",
            self.graph.vertex_count()
        );
        Ok(length)
    }

    pub fn real_world_nearest_neighbor(&self, start: VertexId) -> Result<f64> {
        let length = algo::real_world_nearest_neighbor(&self.graph, start)?;
        log::info!(
            "real_world_nearest_neighbor: n={} start={start} length={length}",
            self.graph.vertex_count()
        );
        Ok(length)
    }
}

fn open_data_file(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        )));
    }
    Ok(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::TspSolver;
    use crate::error::Error;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        // Unique per call so parallel tests never share a file.
        static SEQ: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
        let seq = SEQ.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "tsp-tours-test-{}-{seq}-{name}",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    fn loaded_triangle() -> TspSolver {
        let edges = write_temp("triangle-edges.csv", "0,1,1.0\n1,2,1.0\n0,2,1.0\n");
        let mut solver = TspSolver::new();
        solver.set_edges_path(&edges);
        solver.load().expect("load");
        fs::remove_file(edges).ok();
        solver
    }

    #[test]
    fn load_without_edges_path_fails() {
        let mut solver = TspSolver::new();
        let err = solver.load().expect_err("no edges path configured");
        assert!(matches!(err, Error::MissingEdgesFile));
        assert!(!solver.graph_loaded());
    }

    #[test]
    fn load_with_missing_file_fails_with_io_error() {
        let mut solver = TspSolver::new();
        solver.set_edges_path("/nonexistent/edges.csv");
        let err = solver.load().expect_err("missing file");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_rejects_directory_paths() {
        let mut solver = TspSolver::new();
        solver.set_edges_path(std::env::temp_dir());
        let err = solver.load().expect_err("directory path");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_populates_graph_and_vertex_lookup() {
        let solver = loaded_triangle();
        assert!(solver.graph_loaded());
        assert!(solver.vertex_exists(0));
        assert!(solver.vertex_exists(2));
        assert!(!solver.vertex_exists(9));
    }

    #[test]
    fn nodes_file_supplies_coordinates_for_the_oracle() {
        let nodes = write_temp("square-nodes.csv", "0,0.0,0.0\n1,1.0,0.0\n2,1.0,1.0\n3,0.0,1.0\n");
        let edges = write_temp("square-edges.csv", "\n");
        let mut solver = TspSolver::new();
        solver.set_nodes_path(&nodes);
        solver.set_edges_path(&edges);
        solver.load().expect("load");
        fs::remove_file(nodes).ok();
        fs::remove_file(edges).ok();

        // No explicit edges anywhere: backtracking finds no cycle, the
        // metric algorithms work off the coordinates.
        assert!(solver.backtracking().is_infinite());
        let triangular = solver.triangular().expect("triangular");
        let nearest = solver.nearest_neighbor().expect("nearest neighbor");
        assert!(triangular.is_finite() && nearest.is_finite());
    }

    #[test]
    fn all_algorithms_agree_on_the_unit_triangle() {
        let solver = loaded_triangle();
        assert_eq!(solver.backtracking(), 3.0);
        assert_eq!(solver.triangular().expect("triangular"), 3.0);
        assert_eq!(solver.nearest_neighbor().expect("nearest neighbor"), 3.0);
        assert_eq!(
            solver
                .real_world_nearest_neighbor(0)
                .expect("real-world nearest neighbor"),
            3.0
        );
    }

    #[test]
    fn runs_do_not_leak_state_between_algorithms() {
        let solver = loaded_triangle();
        let first = solver.triangular().expect("triangular");
        solver.backtracking();
        solver.nearest_neighbor().expect("nearest neighbor");
        let again = solver.triangular().expect("triangular after other runs");
        assert_eq!(first, again);
    }

    #[test]
    fn heuristics_never_beat_backtracking() {
        let edges = write_temp(
            "metric-edges.csv",
            "0,1,2.0\n0,2,4.0\n0,3,5.0\n1,2,3.0\n1,3,4.0\n2,3,2.0\n",
        );
        let mut solver = TspSolver::new();
        solver.set_edges_path(&edges);
        solver.load().expect("load");
        fs::remove_file(edges).ok();

        let optimal = solver.backtracking();
        assert!(optimal.is_finite());
        assert!(solver.nearest_neighbor().expect("nearest neighbor") >= optimal);
        let triangular = solver.triangular().expect("triangular");
        assert!(triangular >= optimal);
        // Complete metric instance: the MST walk is a 2-approximation.
        assert!(triangular <= 2.0 * optimal);
    }
}
