//! # Gravis Renderer
//!
//! Turns a fixed graph and its layout into self-contained render frames.
//! A frame carries positioned nodes, edge segments, resolved labels, frame
//! styling, and a viewport; drawing surfaces consume it either as JSON or
//! through one of the `gravis-io` backends.

pub mod frame;
pub mod renderer;
pub mod viewport;

pub use frame::{FrameStyle, RenderEdge, RenderFrame, RenderNode};
pub use renderer::{GraphRenderer, RenderError, RenderOptions};
pub use viewport::Viewport;
