//! PDF serialization of a finished [`leafprint_render_core::Document`] using lopdf.
//!
//! All pages share one resources dictionary holding the four standard
//! Helvetica faces and one graphics state per distinct fill opacity.

mod content;
mod renderer;

pub use renderer::LopdfRenderer;
