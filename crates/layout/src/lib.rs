//! Block layout for leafprint documents.
//!
//! The engine consumes [`leafprint_markup::ParseEvent`]s, wraps each block's
//! runs with Helvetica metrics and places the lines top to bottom, starting
//! new pages at the bottom margin. The result is a
//! [`leafprint_render_core::Document`] ready for serialization.

use leafprint_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Rendering failed during layout: {0}")]
    Render(#[from] RenderError),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub(crate) mod engine;
pub use self::engine::LayoutEngine;

pub mod algorithms;
pub mod config;
pub mod fonts;
pub mod interface;
pub mod nodes;
pub mod painting;
pub mod text;

pub use self::config::{FooterMode, LayoutConfig, Palette, TextSpec, Typography};
pub use self::fonts::{FontMetrics, StandardFontMetrics};
pub use self::interface::{LayoutContext, LayoutCursor, PLACEHOLDER};
