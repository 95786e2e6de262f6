// src/error.rs
use leafprint_layout::LayoutError;
use leafprint_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Content is required")]
    EmptyContent,

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Enhancement failed: {0}")]
    Enhancement(String),
}

impl PipelineError {
    /// The HTTP-style status a transport answers with.
    pub fn status(&self) -> u16 {
        match self {
            PipelineError::EmptyContent
            | PipelineError::Config(_)
            | PipelineError::Json(_)
            | PipelineError::Toml(_) => 400,
            PipelineError::Layout(LayoutError::InvalidConfig(_)) => 400,
            PipelineError::Layout(_) | PipelineError::Render(_) | PipelineError::Io(_) => 500,
            PipelineError::Enhancement(_) => 502,
        }
    }
}
