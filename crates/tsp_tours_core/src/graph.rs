use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

pub type VertexId = u32;

/// Stable handle into the graph's edge vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeHandle(usize);

#[derive(Debug)]
pub struct Edge {
    origin: VertexId,
    dest: VertexId,
    weight: f64,
    twin: Option<EdgeHandle>,
}

impl Edge {
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn dest(&self) -> VertexId {
        self.dest
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Handle of the opposite-direction edge, when both directions were
    /// created together with the same weight.
    pub fn twin(&self) -> Option<EdgeHandle> {
        self.twin
    }
}

#[derive(Debug)]
pub struct Vertex {
    id: VertexId,
    index: usize,
    coords: Option<GeoPoint>,
    adj: BTreeMap<VertexId, EdgeHandle>,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Dense index assigned at insertion; algorithms use it to address
    /// per-run side tables and the heap position table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn coords(&self) -> Option<GeoPoint> {
        self.coords
    }

    /// Outgoing edges keyed by destination id, in ascending id order.
    pub fn adj(&self) -> &BTreeMap<VertexId, EdgeHandle> {
        &self.adj
    }
}

/// Undirected weighted graph. A bidirectional edge is stored as two
/// directed edges that reference each other through their twin handles.
///
/// Vertices live in an ordered map so that every iteration over the
/// vertex set is in ascending id order, run after run.
#[derive(Debug, Default)]
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
    by_index: Vec<VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Panics if `id` is not in the graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[&id]
    }

    /// Id of the vertex with the given dense index.
    ///
    /// Panics if `index` is out of bounds.
    pub fn id_at(&self, index: usize) -> VertexId {
        self.by_index[index]
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        self.insert_vertex(id, None)
    }

    pub fn add_vertex_with_coords(&mut self, id: VertexId, lon: f64, lat: f64) -> bool {
        self.insert_vertex(id, Some(GeoPoint::new(lat, lon)))
    }

    fn insert_vertex(&mut self, id: VertexId, coords: Option<GeoPoint>) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        let index = self.by_index.len();
        self.by_index.push(id);
        self.vertices.insert(
            id,
            Vertex {
                id,
                index,
                coords,
                adj: BTreeMap::new(),
            },
        );
        true
    }

    /// Creates the two directed edges `u -> v` and `v -> u` with the same
    /// weight and links them as twins. Returns false if either endpoint
    /// is missing.
    pub fn add_bidirectional_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> bool {
        if !self.vertices.contains_key(&u) || !self.vertices.contains_key(&v) {
            return false;
        }
        let forward = EdgeHandle(self.edges.len());
        let backward = EdgeHandle(self.edges.len() + 1);
        self.edges.push(Edge {
            origin: u,
            dest: v,
            weight,
            twin: Some(backward),
        });
        self.edges.push(Edge {
            origin: v,
            dest: u,
            weight,
            twin: Some(forward),
        });
        if let Some(vertex) = self.vertices.get_mut(&u) {
            vertex.adj.insert(v, forward);
        }
        if let Some(vertex) = self.vertices.get_mut(&v) {
            vertex.adj.insert(u, backward);
        }
        true
    }

    pub fn edge(&self, handle: EdgeHandle) -> &Edge {
        &self.edges[handle.0]
    }

    /// Explicit edge from `u` to `v`, if one was loaded.
    pub fn find_edge(&self, u: VertexId, v: VertexId) -> Option<&Edge> {
        let handle = *self.vertices.get(&u)?.adj.get(&v)?;
        Some(self.edge(handle))
    }

    /// Effective weight of the pair `(u, v)`: the explicit edge's weight
    /// when one exists, otherwise the great-circle distance between the
    /// two vertices' coordinates.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<f64> {
        if let Some(edge) = self.find_edge(u, v) {
            return Ok(edge.weight());
        }
        let a = self.find_vertex(u).and_then(Vertex::coords);
        let b = self.find_vertex(v).and_then(Vertex::coords);
        match (a, b) {
            (Some(a), Some(b)) => Ok(a.dist(&b)),
            _ => Err(Error::MissingEdge { from: u, to: v }),
        }
    }
}

/// Which weights a tour-construction step may use.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WeightPolicy {
    /// Only explicit edges; a missing edge is an infinite candidate.
    ExplicitOnly,
    /// Explicit edge first, great-circle distance as fallback.
    ExplicitOrHaversine,
}

impl WeightPolicy {
    pub(crate) fn weight(self, graph: &Graph, from: VertexId, to: VertexId) -> Result<f64> {
        match self {
            Self::ExplicitOrHaversine => graph.edge_weight(from, to),
            Self::ExplicitOnly => Ok(graph
                .find_edge(from, to)
                .map_or(f64::INFINITY, Edge::weight)),
        }
    }
}
