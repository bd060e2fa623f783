use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use tsp_tours_core::{Result, TspSolver, VertexId};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Menu states as data: each state knows what to show and which state
/// follows a given line of input.
#[derive(Debug, PartialEq)]
enum MenuState {
    Main,
    LoadNodesPrompt,
    NodesPath,
    EdgesPath,
    StartVertex,
    TryAgain {
        retry: Box<MenuState>,
        back: Box<MenuState>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Algorithm {
    Backtracking,
    Triangular,
    NearestNeighbor,
    RealWorld(VertexId),
}

impl Algorithm {
    fn label(self) -> &'static str {
        match self {
            Self::Backtracking => "TSP Backtracking",
            Self::Triangular => "TSP Triangular Approximation",
            Self::NearestNeighbor => "TSP Nearest Neighbor",
            Self::RealWorld(_) => "TSP Real World Nearest Neighbor",
        }
    }
}

pub fn run(mut solver: TspSolver) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = MenuState::Main;

    loop {
        state.display(&solver);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF on stdin ends the session.
            println!();
            return Ok(());
        };
        match state.handle(&mut solver, line?.trim()) {
            Some(next) => state = next,
            None => return Ok(()),
        }
    }
}

impl MenuState {
    fn display(&self, solver: &TspSolver) {
        match self {
            Self::Main => {
                println!("{GREEN}------------------------------{RESET}");
                if solver.graph_loaded() {
                    println!("> Loaded Graph?: Yes");
                } else {
                    println!("> Loaded Graph?: {RED}No{RESET}");
                }
                println!("{GREEN}========== MAIN MENU =========={RESET}");
                println!("   1. Load Graph");
                println!("   2. Backtracking Algorithm");
                println!("   3. Triangular Approximation");
                println!("   4. Nearest Neighbor Heuristic");
                println!("   5. TSP in Real World Graphs");
                println!();
                println!("   q. Exit");
                println!("{GREEN}------------------------------{RESET}");
                print!("Enter your choice: ");
            }
            Self::LoadNodesPrompt => {
                println!("{GREEN}============================={RESET}");
                println!(" Load nodes file?");
                println!();
                println!("   1. Yes");
                println!("   2. No");
                println!();
                println!("   q. Main Menu");
                println!("{GREEN}-----------------------------{RESET}");
                print!("Enter your choice: ");
            }
            Self::NodesPath => {
                print!("Insert path to the nodes file (Ex: ./dataset/nodes.csv): ");
            }
            Self::EdgesPath => {
                print!("Insert path to the edges file (Ex: ./dataset/edges.csv): ");
            }
            Self::StartVertex => {
                print!("Insert starting vertex id (Ex: 0): ");
            }
            Self::TryAgain { .. } => {
                println!("{RED}----------------{RESET}");
                println!("  1. Try Again");
                println!("  b. Go back");
                println!("  q. Main Menu");
                println!("{RED}----------------{RESET}");
                print!("Enter your choice: ");
            }
        }
    }

    fn handle(self, solver: &mut TspSolver, input: &str) -> Option<MenuState> {
        match self {
            Self::Main => handle_main(solver, input),
            Self::LoadNodesPrompt => Some(handle_load_nodes_prompt(input)),
            Self::NodesPath => Some(handle_nodes_path(solver, input)),
            Self::EdgesPath => Some(handle_edges_path(solver, input)),
            Self::StartVertex => Some(handle_start_vertex(solver, input)),
            Self::TryAgain { retry, back } => Some(handle_try_again(retry, back, input)),
        }
    }
}

fn handle_main(solver: &mut TspSolver, input: &str) -> Option<MenuState> {
    if input == "q" {
        println!();
        println!("{GREEN}========================================{RESET}");
        println!("Exiting the program...");
        println!("{GREEN}========================================{RESET}");
        return None;
    }

    if !solver.graph_loaded() {
        return match input {
            "1" => Some(MenuState::LoadNodesPrompt),
            _ => {
                println!();
                println!("{RED}> No graph loaded. Please load a graph first.{RESET}");
                println!();
                Some(MenuState::Main)
            }
        };
    }

    match input {
        "1" => {
            // Discard the previous graph before loading a new one.
            *solver = TspSolver::new();
            Some(MenuState::LoadNodesPrompt)
        }
        "2" => {
            run_algorithm(solver, Algorithm::Backtracking);
            Some(MenuState::Main)
        }
        "3" => {
            run_algorithm(solver, Algorithm::Triangular);
            Some(MenuState::Main)
        }
        "4" => {
            run_algorithm(solver, Algorithm::NearestNeighbor);
            Some(MenuState::Main)
        }
        "5" => Some(MenuState::StartVertex),
        _ => {
            println!("{RED}Invalid choice. Please try again.{RESET}");
            Some(MenuState::Main)
        }
    }
}

fn handle_load_nodes_prompt(input: &str) -> MenuState {
    match input {
        "1" => MenuState::NodesPath,
        "2" => MenuState::EdgesPath,
        "q" => MenuState::Main,
        _ => {
            println!("{RED}Invalid choice. Please try again.{RESET}");
            MenuState::LoadNodesPrompt
        }
    }
}

fn handle_nodes_path(solver: &mut TspSolver, input: &str) -> MenuState {
    if !is_readable_file(input) {
        println!("{RED}Invalid path. Please enter a valid file path.{RESET}");
        return MenuState::TryAgain {
            retry: Box::new(MenuState::NodesPath),
            back: Box::new(MenuState::LoadNodesPrompt),
        };
    }
    solver.set_nodes_path(input);
    MenuState::EdgesPath
}

fn handle_edges_path(solver: &mut TspSolver, input: &str) -> MenuState {
    if !is_readable_file(input) {
        println!("{RED}Invalid path. Please enter a valid file path.{RESET}");
        return MenuState::TryAgain {
            retry: Box::new(MenuState::EdgesPath),
            back: Box::new(MenuState::LoadNodesPrompt),
        };
    }
    solver.set_edges_path(input);

    println!("This might take some time...");
    println!();
    let start = Instant::now();
    match solver.load() {
        Ok(()) => {
            println!("Network loaded successfully!");
            println!("Elapsed time: {:.2}s", start.elapsed().as_secs_f64());
            println!();
        }
        Err(err) => {
            println!("{RED}There was an error loading the graph: {err}{RESET}");
            println!();
        }
    }
    MenuState::Main
}

fn handle_start_vertex(solver: &mut TspSolver, input: &str) -> MenuState {
    let id = match input.parse::<VertexId>() {
        Ok(id) if solver.vertex_exists(id) => id,
        _ => {
            println!("{RED}Vertex does not exist.{RESET}");
            return MenuState::TryAgain {
                retry: Box::new(MenuState::StartVertex),
                back: Box::new(MenuState::Main),
            };
        }
    };
    run_algorithm(solver, Algorithm::RealWorld(id));
    MenuState::Main
}

fn handle_try_again(retry: Box<MenuState>, back: Box<MenuState>, input: &str) -> MenuState {
    match input {
        "1" => *retry,
        "b" => *back,
        "q" => MenuState::Main,
        _ => {
            println!("{RED}Invalid choice.{RESET}");
            MenuState::TryAgain { retry, back }
        }
    }
}

fn run_algorithm(solver: &TspSolver, algorithm: Algorithm) {
    println!();
    if let Algorithm::RealWorld(id) = algorithm {
        println!("Starting vertex id: {id}");
    }

    let start = Instant::now();
    let outcome = match algorithm {
        Algorithm::Backtracking => Ok(solver.backtracking()),
        Algorithm::Triangular => solver.triangular(),
        Algorithm::NearestNeighbor => solver.nearest_neighbor(),
        Algorithm::RealWorld(id) => solver.real_world_nearest_neighbor(id),
    };
    let elapsed = start.elapsed().as_secs_f64();

    match outcome {
        Ok(length) if length.is_finite() => {
            println!();
            println!("{} result: {length:.1}", algorithm.label());
            println!("Elapsed time: {elapsed:.2}s");
        }
        Ok(_) => {
            println!();
            println!("{RED}There is no possible solution!{RESET}");
        }
        Err(err) => {
            log::debug!("{}: {err}", algorithm.label());
            println!();
            println!("{RED}There is no possible solution!{RESET}");
        }
    }
    println!();
}

fn is_readable_file(input: &str) -> bool {
    let path = Path::new(input);
    path.exists() && !path.is_dir()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tsp_tours_core::TspSolver;

    use super::MenuState;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tsp-tours-menu-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn algorithms_require_a_loaded_graph() {
        let mut solver = TspSolver::new();
        for choice in ["2", "3", "4", "5"] {
            let next = MenuState::Main.handle(&mut solver, choice);
            assert_eq!(next, Some(MenuState::Main));
        }
    }

    #[test]
    fn quit_ends_the_session() {
        let mut solver = TspSolver::new();
        assert_eq!(MenuState::Main.handle(&mut solver, "q"), None);
    }

    #[test]
    fn load_flow_can_skip_the_nodes_file() {
        let mut solver = TspSolver::new();
        assert_eq!(
            MenuState::Main.handle(&mut solver, "1"),
            Some(MenuState::LoadNodesPrompt)
        );
        assert_eq!(
            MenuState::LoadNodesPrompt.handle(&mut solver, "2"),
            Some(MenuState::EdgesPath)
        );
    }

    #[test]
    fn invalid_path_offers_try_again() {
        let mut solver = TspSolver::new();
        let next = MenuState::EdgesPath
            .handle(&mut solver, "/definitely/not/a/file.csv")
            .expect("state");
        let MenuState::TryAgain { retry, back } = next else {
            panic!("expected try-again state");
        };
        assert_eq!(*retry, MenuState::EdgesPath);
        assert_eq!(*back, MenuState::LoadNodesPrompt);
    }

    #[test]
    fn try_again_routes_to_retry_back_and_main() {
        let mut solver = TspSolver::new();
        let state = || MenuState::TryAgain {
            retry: Box::new(MenuState::NodesPath),
            back: Box::new(MenuState::LoadNodesPrompt),
        };
        assert_eq!(state().handle(&mut solver, "1"), Some(MenuState::NodesPath));
        assert_eq!(
            state().handle(&mut solver, "b"),
            Some(MenuState::LoadNodesPrompt)
        );
        assert_eq!(state().handle(&mut solver, "q"), Some(MenuState::Main));
    }

    #[test]
    fn valid_edges_path_loads_the_graph() {
        let path = temp_csv("edges.csv", "0,1,1.0\n1,2,1.0\n0,2,1.0\n");
        let mut solver = TspSolver::new();
        let next = MenuState::EdgesPath.handle(&mut solver, path.to_str().expect("utf8 path"));
        fs::remove_file(&path).ok();
        assert_eq!(next, Some(MenuState::Main));
        assert!(solver.graph_loaded());
    }

    #[test]
    fn start_vertex_must_exist() {
        let mut solver = TspSolver::new();
        let next = MenuState::StartVertex
            .handle(&mut solver, "42")
            .expect("state");
        let MenuState::TryAgain { retry, back } = next else {
            panic!("expected try-again state");
        };
        assert_eq!(*retry, MenuState::StartVertex);
        assert_eq!(*back, MenuState::Main);
    }
}
