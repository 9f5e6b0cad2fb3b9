use serde::{Deserialize, Serialize};

use gravis_core::style::{Color, FontWeight};
use gravis_core::VertexId;

use crate::Viewport;

/// A node ready for drawing, placed at its layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    /// Resolved display label, if any.
    pub label: Option<String>,
}

/// An edge ready for drawing as a line segment between its endpoints.
///
/// Endpoints are ordered by vertex identifier, so an unordered edge produces
/// the same segment regardless of how it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub source: VertexId,
    pub target: VertexId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Cosmetic styling for a frame, passed through to the drawing surface
/// without semantic interpretation. Colors are RGBA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    pub node_color: [f32; 4],
    /// Node footprint area in surface units.
    pub node_size: f64,
    pub edge_color: [f32; 4],
    pub edge_width: f64,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub label_color: [f32; 4],
    pub background: [f32; 4],
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            node_color: Color::LIGHT_BLUE.to_f32_array(1.0),
            node_size: 1000.0,
            edge_color: Color::default().to_f32_array(1.0),
            edge_width: 1.5,
            font_size: 12.0,
            font_weight: FontWeight::Bold,
            label_color: Color::BLACK.to_f32_array(1.0),
            background: Color::WHITE.to_f32_array(1.0),
        }
    }
}

/// Complete render frame handed to the drawing surface.
///
/// Node and edge coordinates are in layout space; the surface maps them to
/// the canvas through the embedded viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    pub style: FrameStyle,
    pub viewport: Viewport,
}

impl RenderFrame {
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            style: FrameStyle::default(),
            viewport,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
