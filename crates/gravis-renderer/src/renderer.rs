use std::collections::{HashMap, HashSet};

use thiserror::Error;

use gravis_core::style::{Color, FontWeight};
use gravis_core::{Graph, NodeIndex, VertexId};

use crate::frame::{FrameStyle, RenderEdge, RenderFrame, RenderNode};
use crate::Viewport;

/// Canvas size used when no viewport is supplied.
const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("vertex '{0}' has no position assigned")]
    MissingPosition(VertexId),

    #[error("edge endpoint '{0}' is not a vertex of the graph")]
    UnknownVertex(VertexId),
}

// ── Options ───────────────────────────────────────────────────────────

/// Options for a single render call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Draw each vertex's identifier as its label.
    pub show_default_labels: bool,
    /// Per-vertex replacement labels. Takes precedence over default labels;
    /// keys naming no vertex of the graph are ignored.
    pub label_overrides: HashMap<VertexId, String>,
    pub node_color: Color,
    pub node_size: f64,
    pub edge_color: Color,
    pub edge_width: f64,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub label_color: Color,
    /// Explicit viewport; when absent the frame is fitted to the layout.
    pub viewport: Option<Viewport>,
    /// Drop nodes outside the visible bounds, and edges whose endpoints are
    /// both outside.
    pub cull_to_viewport: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_default_labels: true,
            label_overrides: HashMap::new(),
            node_color: Color::LIGHT_BLUE,
            node_size: 1000.0,
            edge_color: Color::default(),
            edge_width: 1.5,
            font_size: 12.0,
            font_weight: FontWeight::Bold,
            label_color: Color::BLACK,
            viewport: None,
            cull_to_viewport: false,
        }
    }
}

impl RenderOptions {
    pub fn with_override(mut self, vertex: &str, label: &str) -> Self {
        self.label_overrides
            .insert(vertex.to_string(), label.to_string());
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }
}

// ── Renderer ──────────────────────────────────────────────────────────

/// Stateless transform from a graph plus options to a render frame.
///
/// The renderer validates the graph against its layout on every call: each
/// vertex must carry a position, and each edge endpoint must name a vertex
/// of the graph.
pub struct GraphRenderer<'a> {
    graph: &'a Graph,
}

impl<'a> GraphRenderer<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Produce a render frame: one node per vertex in insertion order, one
    /// line segment per edge in input order, labels resolved per vertex as
    /// override first, identifier second, nothing last.
    pub fn render(&self, options: &RenderOptions) -> Result<RenderFrame, RenderError> {
        let viewport = options.viewport.unwrap_or_else(|| self.fitted_viewport());

        let visible: Option<HashSet<VertexId>> = if options.cull_to_viewport {
            let index = NodeIndex::build(self.graph, 0.0);
            Some(
                index
                    .query_viewport(&viewport.visible_bounds())
                    .into_iter()
                    .map(|entry| entry.vertex.clone())
                    .collect(),
            )
        } else {
            None
        };

        let mut frame = RenderFrame::empty(viewport);
        frame.style = FrameStyle {
            node_color: options.node_color.to_f32_array(1.0),
            node_size: options.node_size,
            edge_color: options.edge_color.to_f32_array(1.0),
            edge_width: options.edge_width,
            font_size: options.font_size,
            font_weight: options.font_weight,
            label_color: options.label_color.to_f32_array(1.0),
            background: Color::WHITE.to_f32_array(1.0),
        };

        for vertex in self.graph.vertices() {
            let position = self
                .graph
                .position(vertex)
                .ok_or_else(|| RenderError::MissingPosition(vertex.clone()))?;

            if let Some(visible) = &visible {
                if !visible.contains(vertex) {
                    continue;
                }
            }

            frame.nodes.push(RenderNode {
                id: vertex.clone(),
                x: position.x,
                y: position.y,
                label: self.resolve_label(vertex, options),
            });
        }

        for edge in self.graph.edges() {
            let (a, b) = edge.endpoints_ordered();
            for endpoint in [a, b] {
                if !self.graph.contains_vertex(endpoint) {
                    return Err(RenderError::UnknownVertex(endpoint.to_string()));
                }
            }
            let pa = self
                .graph
                .position(a)
                .ok_or_else(|| RenderError::MissingPosition(a.to_string()))?;
            let pb = self
                .graph
                .position(b)
                .ok_or_else(|| RenderError::MissingPosition(b.to_string()))?;

            if let Some(visible) = &visible {
                if !visible.contains(a) && !visible.contains(b) {
                    continue;
                }
            }

            frame.edges.push(RenderEdge {
                source: a.to_string(),
                target: b.to_string(),
                x1: pa.x,
                y1: pa.y,
                x2: pb.x,
                y2: pb.y,
            });
        }

        log::debug!(
            "rendered '{}': {} nodes, {} edges",
            self.graph.name,
            frame.nodes.len(),
            frame.edges.len()
        );
        Ok(frame)
    }

    fn fitted_viewport(&self) -> Viewport {
        let mut viewport = Viewport::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
        if let Some(bbox) = self.graph.bbox() {
            viewport.fit_bbox(&bbox);
        }
        viewport
    }

    fn resolve_label(&self, vertex: &str, options: &RenderOptions) -> Option<String> {
        if let Some(label) = options.label_overrides.get(vertex) {
            Some(label.clone())
        } else if options.show_default_labels {
            Some(vertex.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The six-vertex ring-with-hub graph on a hexagonal layout.
    fn hex_graph() -> Graph {
        let mut g = Graph::new("hexagon");
        g.add_vertices(["A", "B", "C", "D", "E", "F"]);
        g.add_edges([
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "E"),
            ("F", "D"),
            ("E", "F"),
            ("C", "F"),
        ]);
        g.set_position("A", 0.0, 1.0);
        g.set_position("B", 0.95, 0.31);
        g.set_position("C", 0.59, -0.81);
        g.set_position("D", -0.59, -0.81);
        g.set_position("E", -0.95, 0.31);
        g.set_position("F", 0.0, 0.0);
        g
    }

    fn label_of<'f>(frame: &'f RenderFrame, id: &str) -> Option<&'f str> {
        frame
            .nodes
            .iter()
            .find(|n| n.id == id)
            .and_then(|n| n.label.as_deref())
    }

    #[test]
    fn test_render_succeeds_with_full_positions() {
        let graph = hex_graph();
        let frame = GraphRenderer::new(&graph)
            .render(&RenderOptions::default())
            .unwrap();
        assert_eq!(frame.nodes.len(), 6);
        assert_eq!(frame.edges.len(), 7);
    }

    #[test]
    fn test_missing_position_fails() {
        let mut graph = Graph::new("partial");
        graph.add_vertices(["A", "B"]);
        graph.set_position("A", 0.0, 0.0);
        let err = GraphRenderer::new(&graph)
            .render(&RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingPosition(v) if v == "B"));
    }

    #[test]
    fn test_unknown_edge_endpoint_fails() {
        let mut graph = Graph::new("dangling");
        graph.add_vertex("A");
        graph.set_position("A", 0.0, 0.0);
        graph.add_edge("A", "Z");
        let err = GraphRenderer::new(&graph)
            .render(&RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownVertex(v) if v == "Z"));
    }

    #[test]
    fn test_label_precedence() {
        let mut graph = Graph::new("two");
        graph.add_vertices(["A", "B"]);
        graph.set_position("A", 0.0, 0.0);
        graph.set_position("B", 1.0, 0.0);

        let options = RenderOptions::default().with_override("A", "A (2)");
        let frame = GraphRenderer::new(&graph).render(&options).unwrap();
        assert_eq!(label_of(&frame, "A"), Some("A (2)"));
        assert_eq!(label_of(&frame, "B"), Some("B"));
    }

    #[test]
    fn test_label_suppression() {
        let graph = hex_graph();
        let options = RenderOptions {
            show_default_labels: false,
            ..Default::default()
        };
        let frame = GraphRenderer::new(&graph).render(&options).unwrap();
        assert!(frame.nodes.iter().all(|n| n.label.is_none()));
    }

    #[test]
    fn test_unmatched_override_keys_are_ignored() {
        let graph = hex_graph();
        let options = RenderOptions::default().with_override("Z", "ghost");
        let frame = GraphRenderer::new(&graph).render(&options).unwrap();
        assert_eq!(frame.nodes.len(), 6);
        assert!(frame.nodes.iter().all(|n| n.label.as_deref() != Some("ghost")));
    }

    #[test]
    fn test_edge_rendering_is_symmetric() {
        let mut forward = Graph::new("fwd");
        forward.add_vertices(["X", "Y"]);
        forward.set_position("X", 0.0, 0.0);
        forward.set_position("Y", 1.0, 1.0);
        forward.add_edge("X", "Y");

        let mut reversed = Graph::new("rev");
        reversed.add_vertices(["X", "Y"]);
        reversed.set_position("X", 0.0, 0.0);
        reversed.set_position("Y", 1.0, 1.0);
        reversed.add_edge("Y", "X");

        let options = RenderOptions::default();
        let a = GraphRenderer::new(&forward).render(&options).unwrap();
        let b = GraphRenderer::new(&reversed).render(&options).unwrap();
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn test_hexagon_scenario_with_annotated_labels() {
        let graph = hex_graph();
        let options = RenderOptions::default()
            .with_override("A", "A (2)")
            .with_override("B", "B (4)")
            .with_override("C", "C (8)")
            .with_override("D", "D (8)")
            .with_override("E", "E (6)")
            .with_override("F", "F (8)");
        let frame = GraphRenderer::new(&graph).render(&options).unwrap();

        assert_eq!(frame.nodes.len(), 6);
        assert_eq!(frame.edges.len(), 7);
        assert_eq!(label_of(&frame, "A"), Some("A (2)"));
        assert_eq!(label_of(&frame, "D"), Some("D (8)"));
        assert_eq!(label_of(&frame, "F"), Some("F (8)"));
    }

    #[test]
    fn test_default_viewport_fits_layout() {
        let graph = hex_graph();
        let frame = GraphRenderer::new(&graph)
            .render(&RenderOptions::default())
            .unwrap();
        let bbox = graph.bbox().unwrap();
        let center = bbox.center();
        assert!((frame.viewport.center_x - center.x).abs() < 1e-10);
        assert!((frame.viewport.center_y - center.y).abs() < 1e-10);
        assert!(frame.viewport.zoom > 1.0);
    }

    #[test]
    fn test_cull_to_viewport_drops_outside_nodes() {
        let graph = hex_graph();
        // Window over the right half of the layout only.
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.center_x = 0.75;
        viewport.center_y = 0.0;
        viewport.zoom = 400.0;

        let options = RenderOptions {
            cull_to_viewport: true,
            ..Default::default()
        }
        .with_viewport(viewport);
        let frame = GraphRenderer::new(&graph).render(&options).unwrap();

        assert!(frame.nodes.iter().any(|n| n.id == "B"));
        assert!(frame.nodes.iter().all(|n| n.id != "E"));
        // Edges with both endpoints outside the window are dropped too.
        assert!(frame.edges.len() < 7);
    }
}
