use crate::algo::RunState;
use crate::graph::{Graph, Vertex, VertexId};

const START_ID: VertexId = 0;

/// Exact tour length by exhaustive search over Hamiltonian cycles rooted
/// at vertex 0. Only explicit edges are considered; the coordinate
/// fallback is never consulted. Returns `f64::INFINITY` when no cycle
/// exists over the explicit edges, and 0.0 for graphs with at most one
/// vertex.
pub(crate) fn backtracking(graph: &Graph) -> f64 {
    let n = graph.vertex_count();
    if n <= 1 {
        return 0.0;
    }
    let Some(start) = graph.find_vertex(START_ID) else {
        return f64::INFINITY;
    };

    let mut state = RunState::new(n);
    state.visited[start.index()] = true;
    let mut best = f64::INFINITY;
    explore(graph, &mut state, start, 1, 0.0, &mut best);
    best
}

fn explore(
    graph: &Graph,
    state: &mut RunState,
    current: &Vertex,
    count: usize,
    cost: f64,
    best: &mut f64,
) {
    if count == graph.vertex_count() {
        if let Some(closing) = graph.find_edge(current.id(), START_ID) {
            *best = best.min(cost + closing.weight());
        }
        return;
    }

    for &handle in current.adj().values() {
        let edge = graph.edge(handle);
        let next = graph.vertex(edge.dest());
        if state.visited[next.index()] {
            continue;
        }
        state.visited[next.index()] = true;
        explore(graph, state, next, count + 1, cost + edge.weight(), best);
        state.visited[next.index()] = false;
    }
}
