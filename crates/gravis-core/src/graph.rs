use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{BBox, Point};

/// An opaque vertex identifier, unique within a graph.
pub type VertexId = String;

/// An unordered connection between two vertices.
///
/// Self-loops and duplicate edges are permitted and not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Endpoints in identifier order, so `(X, Y)` and `(Y, X)` compare equal.
    pub fn endpoints_ordered(&self) -> (&str, &str) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

/// A fixed graph with an explicit 2D layout: an ordered set of unique
/// vertices, edges drawn between them, and one position per vertex.
///
/// The graph is assembled once, before rendering; membership of edge
/// endpoints and coverage of the position map are checked by the renderer,
/// not at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    positions: HashMap<VertexId, Point>,
}

impl Graph {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            vertices: Vec::new(),
            edges: Vec::new(),
            positions: HashMap::new(),
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Add a vertex. Returns `false` if the identifier is already present;
    /// the existing vertex is kept and the duplicate is dropped.
    pub fn add_vertex(&mut self, id: &str) -> bool {
        if self.contains_vertex(id) {
            log::warn!("duplicate vertex '{}' ignored", id);
            return false;
        }
        self.vertices.push(id.to_string());
        true
    }

    pub fn add_vertices<'a, I: IntoIterator<Item = &'a str>>(&mut self, ids: I) {
        for id in ids {
            self.add_vertex(id);
        }
    }

    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.edges.push(Edge::new(source, target));
    }

    pub fn add_edges<'a, I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, pairs: I) {
        for (source, target) in pairs {
            self.add_edge(source, target);
        }
    }

    /// Assign the position for a vertex, replacing any previous assignment.
    pub fn set_position(&mut self, id: &str, x: f64, y: f64) {
        self.positions.insert(id.to_string(), Point::new(x, y));
    }

    // ── Lookup ───────────────────────────────────────────────────────

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.iter().any(|v| v == id)
    }

    pub fn position(&self, id: &str) -> Option<&Point> {
        self.positions.get(id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Bounding box of all assigned vertex positions.
    pub fn bbox(&self) -> Option<BBox> {
        let points: Vec<Point> = self
            .vertices
            .iter()
            .filter_map(|v| self.positions.get(v))
            .copied()
            .collect();
        BBox::from_points(&points)
    }
}
