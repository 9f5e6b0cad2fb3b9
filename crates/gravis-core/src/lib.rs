//! # Gravis Core
//!
//! Graph model for the Gravis diagram kernel: vertex and edge sets with a
//! fixed 2D layout, geometric and styling primitives, and an R-tree spatial
//! index over positioned vertices.
//!
//! This crate is the heart of the Gravis rendering kernel.

pub mod geometry;
pub mod graph;
pub mod spatial;
pub mod style;

pub use geometry::{BBox, Point};
pub use graph::{Edge, Graph, VertexId};
pub use spatial::NodeIndex;
pub use style::{Color, FontWeight};
