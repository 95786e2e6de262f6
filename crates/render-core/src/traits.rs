use crate::document::Document;
use crate::error::RenderError;
use std::io::Write;

/// A serialization backend for finished documents.
pub trait DocumentRenderer {
    /// Writes the complete document to `writer`. Called once per document.
    fn render_to(&self, document: &Document, writer: &mut dyn Write) -> Result<(), RenderError>;

    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.render_to(document, &mut buffer)?;
        Ok(buffer)
    }
}
