use crate::algo::RunState;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::heap::MutableMinHeap;

const ROOT_ID: VertexId = 0;

/// Metric 2-approximation: Prim's MST over the effective-weight oracle,
/// then a preorder walk of the tree shortcut into a Hamiltonian cycle.
///
/// Fails with `MissingEdge` when some vertex pair has neither an
/// explicit edge nor coordinates on both endpoints.
pub(crate) fn triangular(graph: &Graph) -> Result<f64> {
    let n = graph.vertex_count();
    if n <= 1 {
        return Ok(0.0);
    }
    if graph.find_vertex(ROOT_ID).is_none() {
        return Err(Error::NoPath);
    }

    let mut state = RunState::new(n);
    prim(graph, &mut state)?;

    let preorder = preorder_indices(graph, &state);

    let mut total = 0.0;
    for pair in preorder.windows(2) {
        total += graph.edge_weight(graph.id_at(pair[0]), graph.id_at(pair[1]))?;
    }
    let last = preorder[preorder.len() - 1];
    total += graph.edge_weight(graph.id_at(last), graph.id_at(preorder[0]))?;

    log::debug!("triangular: n={n} preorder_len={}", preorder.len());
    Ok(total)
}

/// Prim's algorithm over the implicit complete graph whose weights come
/// from the oracle, rooted at vertex 0. Fills `state.dist` and
/// `state.parent`; on return the parent relation is an MST.
pub(crate) fn prim(graph: &Graph, state: &mut RunState) -> Result<()> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(());
    }

    let root = graph.vertex(ROOT_ID).index();
    state.dist[root] = 0.0;
    let mut heap = MutableMinHeap::new(n);
    heap.insert(root, &state.dist);

    while let Some(v_idx) = heap.extract_min(&state.dist) {
        state.visited[v_idx] = true;
        let v_id = graph.id_at(v_idx);

        for u in graph.vertices() {
            let u_idx = u.index();
            if u_idx == v_idx {
                continue;
            }
            let weight = graph.edge_weight(v_id, u.id())?;
            if state.visited[u_idx] || weight >= state.dist[u_idx] {
                continue;
            }
            state.dist[u_idx] = weight;
            state.parent[u_idx] = Some(v_idx);
            if heap.contains(u_idx) {
                heap.decrease_key(u_idx, &state.dist);
            } else {
                heap.insert(u_idx, &state.dist);
            }
        }
    }

    Ok(())
}

/// Preorder over the MST described by `state.parent`, starting at vertex
/// 0. Children of a vertex are visited in ascending id order.
fn preorder_indices(graph: &Graph, state: &RunState) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in graph.vertices() {
        if let Some(parent) = state.parent[v.index()] {
            children[parent].push(v.index());
        }
    }

    let mut preorder = Vec::with_capacity(n);
    let mut stack = vec![graph.vertex(ROOT_ID).index()];
    while let Some(v) = stack.pop() {
        preorder.push(v);
        for &child in children[v].iter().rev() {
            stack.push(child);
        }
    }
    preorder
}
