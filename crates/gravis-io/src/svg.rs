//! SVG drawing surface.
//!
//! Emits a render frame as a standalone SVG document: background rect, edges
//! as line segments, nodes as circles, labels as centered text. Frame
//! coordinates are in layout space and are mapped to the canvas through the
//! frame's viewport.

use std::f64::consts::PI;
use std::io::{self, Write};

use thiserror::Error;

use gravis_renderer::{RenderEdge, RenderFrame, RenderNode, Viewport};

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes render frames as standalone SVG documents.
pub struct SvgWriter<W: Write> {
    writer: W,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a complete frame as one SVG document.
    pub fn write(&mut self, frame: &RenderFrame) -> Result<(), SvgError> {
        self.write_header(&frame.viewport)?;
        self.write_background(frame)?;

        for edge in &frame.edges {
            self.write_edge(frame, edge)?;
        }
        for node in &frame.nodes {
            self.write_node(frame, node)?;
        }
        // Labels go last so no shape covers them.
        for node in &frame.nodes {
            self.write_label(frame, node)?;
        }

        self.write_footer()?;
        log::debug!(
            "wrote SVG document: {} nodes, {} edges",
            frame.nodes.len(),
            frame.edges.len()
        );
        Ok(())
    }

    fn write_header(&mut self, viewport: &Viewport) -> Result<(), SvgError> {
        writeln!(
            self.writer,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = viewport.canvas_width,
            h = viewport.canvas_height,
        )?;
        Ok(())
    }

    fn write_background(&mut self, frame: &RenderFrame) -> Result<(), SvgError> {
        writeln!(
            self.writer,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            css_color(frame.style.background)
        )?;
        Ok(())
    }

    fn write_edge(&mut self, frame: &RenderFrame, edge: &RenderEdge) -> Result<(), SvgError> {
        let vp = &frame.viewport;
        writeln!(
            self.writer,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            vp.layout_to_screen_x(edge.x1),
            vp.layout_to_screen_y(edge.y1),
            vp.layout_to_screen_x(edge.x2),
            vp.layout_to_screen_y(edge.y2),
            css_color(frame.style.edge_color),
            frame.style.edge_width,
        )?;
        Ok(())
    }

    fn write_node(&mut self, frame: &RenderFrame, node: &RenderNode) -> Result<(), SvgError> {
        let vp = &frame.viewport;
        writeln!(
            self.writer,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            vp.layout_to_screen_x(node.x),
            vp.layout_to_screen_y(node.y),
            node_radius(frame.style.node_size),
            css_color(frame.style.node_color),
        )?;
        Ok(())
    }

    fn write_label(&mut self, frame: &RenderFrame, node: &RenderNode) -> Result<(), SvgError> {
        let label = match &node.label {
            Some(l) => l,
            None => return Ok(()),
        };
        let vp = &frame.viewport;
        writeln!(
            self.writer,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\">{}</text>",
            vp.layout_to_screen_x(node.x),
            vp.layout_to_screen_y(node.y),
            frame.style.font_size,
            frame.style.font_weight.as_css(),
            css_color(frame.style.label_color),
            escape_xml(label),
        )?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<(), SvgError> {
        writeln!(self.writer, "</svg>")?;
        Ok(())
    }
}

/// Circle radius for a node footprint given as an area.
fn node_radius(size: f64) -> f64 {
    (size.max(0.0) / PI).sqrt()
}

fn css_color(color: [f32; 4]) -> String {
    format!(
        "rgba({},{},{},{})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3],
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
