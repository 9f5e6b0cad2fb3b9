//! Renders the six-node hexagon demo graph twice: once with identifier
//! labels, once with annotated labels, writing an SVG file for each plus
//! the frame JSON consumed by canvas frontends.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use gravis_core::Graph;
use gravis_io::SvgWriter;
use gravis_renderer::{GraphRenderer, RenderFrame, RenderOptions};

/// Six vertices on a hexagonal ring around a hub, seven edges.
fn build_graph() -> Graph {
    let mut graph = Graph::new("hexagon");
    graph.add_vertices(["A", "B", "C", "D", "E", "F"]);
    graph.add_edges([
        ("A", "B"),
        ("B", "C"),
        ("C", "D"),
        ("D", "E"),
        ("F", "D"),
        ("E", "F"),
        ("C", "F"),
    ]);
    graph.set_position("A", 0.0, 1.0);
    graph.set_position("B", 0.95, 0.31);
    graph.set_position("C", 0.59, -0.81);
    graph.set_position("D", -0.59, -0.81);
    graph.set_position("E", -0.95, 0.31);
    graph.set_position("F", 0.0, 0.0);
    graph
}

fn write_svg(path: &Path, frame: &RenderFrame) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = SvgWriter::new(BufWriter::new(file));
    writer.write(frame)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let graph = build_graph();
    let renderer = GraphRenderer::new(&graph);

    // Identifier labels.
    let frame = renderer.render(&RenderOptions::default())?;
    write_svg(Path::new("hexgraph.svg"), &frame)?;

    // Annotated labels, drawn smaller than the identifier variant.
    let options = RenderOptions {
        font_size: 10.0,
        ..Default::default()
    }
    .with_override("A", "A (2)")
    .with_override("B", "B (4)")
    .with_override("C", "C (8)")
    .with_override("D", "D (8)")
    .with_override("E", "E (6)")
    .with_override("F", "F (8)");
    let frame = renderer.render(&options)?;
    write_svg(Path::new("hexgraph_labeled.svg"), &frame)?;

    std::fs::write("hexgraph_frame.json", frame.to_json()?)?;
    log::info!("wrote hexgraph_frame.json");

    Ok(())
}
