//! # Gravis I/O
//!
//! Drawing-surface backends that make render frames visible. The SVG writer
//! emits a standalone document onto any `io::Write` sink; canvas frontends
//! take the JSON wire from `RenderFrame::to_json` instead.

pub mod svg;

pub use svg::{SvgError, SvgWriter};
