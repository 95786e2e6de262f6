//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the in-memory document model the layout engine draws
//! into and the traits used by serialization backends:
//! - `Document` / `Page` / `DrawCommand`, the per-request drawing sink
//! - `DocumentRenderer` trait for turning a finished document into bytes
//! - Error types for rendering operations

mod document;
mod error;
mod traits;

pub use document::{Document, DrawCommand, FontHandle, Page, STANDARD_FONTS, is_encodable};
pub use error::RenderError;
pub use traits::DocumentRenderer;
