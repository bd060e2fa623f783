use crate::algo::RunState;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId, WeightPolicy};

/// Greedy tour from vertex 0 over the effective-weight oracle. Fails
/// with `MissingEdge` when the oracle cannot weigh a candidate pair.
pub(crate) fn nearest_neighbor(graph: &Graph) -> Result<f64> {
    greedy_tour(graph, WeightPolicy::ExplicitOrHaversine, 0)
}

/// Greedy tour from `start` using explicit edges only. A step or the
/// closing hop with no explicit edge fails with `NoPath`.
pub(crate) fn real_world_nearest_neighbor(graph: &Graph, start: VertexId) -> Result<f64> {
    greedy_tour(graph, WeightPolicy::ExplicitOnly, start)
}

fn greedy_tour(graph: &Graph, policy: WeightPolicy, start_id: VertexId) -> Result<f64> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(Error::NoNeighbour);
    }
    if n == 1 {
        return Ok(0.0);
    }
    let Some(start) = graph.find_vertex(start_id) else {
        return Err(Error::NoPath);
    };

    let mut state = RunState::new(n);
    state.visited[start.index()] = true;
    let mut current = start;
    let mut total = 0.0;

    for _ in 1..n {
        let mut best: Option<(&Vertex, f64)> = None;
        for candidate in graph.vertices() {
            if state.visited[candidate.index()] {
                continue;
            }
            let weight = policy.weight(graph, current.id(), candidate.id())?;
            // Strict comparison keeps the first candidate on ties.
            if best.is_none_or(|(_, w)| weight < w) {
                best = Some((candidate, weight));
            }
        }

        let Some((next, weight)) = best else {
            return Err(Error::NoNeighbour);
        };
        if weight.is_infinite() {
            return Err(Error::NoPath);
        }
        total += weight;
        state.visited[next.index()] = true;
        current = next;
    }

    let closing = policy.weight(graph, current.id(), start_id)?;
    if closing.is_infinite() {
        return Err(Error::NoPath);
    }
    Ok(total + closing)
}
