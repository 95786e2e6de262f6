// src/pipeline/mod.rs
//! Text-to-PDF orchestration.

pub mod api;
mod builder;
pub mod config;

pub use builder::PipelineBuilder;
pub use config::{LeafprintConfig, OutputConfig};

use crate::enhance::{EnhancementRequest, Enhancer};
use crate::error::PipelineError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use leafprint_layout::{LayoutConfig, LayoutEngine};
use leafprint_markup::{ParseEvent, parse};
use leafprint_render_core::DocumentRenderer;
use leafprint_render_lopdf::LopdfRenderer;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Progress of one `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Parsing,
    LayingOut,
    Serializing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Parsing => "parsing",
            Stage::LayingOut => "laying out",
            Stage::Serializing => "serializing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

struct StageTracker {
    stage: Stage,
}

impl StageTracker {
    fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    fn enter(&mut self, next: Stage) {
        log::debug!("Pipeline stage: {} -> {}", self.stage, next);
        self.stage = next;
    }

    fn fail(&mut self, err: PipelineError) -> PipelineError {
        log::warn!("Pipeline failed while {}: {}", self.stage, err);
        self.stage = Stage::Failed;
        err
    }
}

/// A finished PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl RenderedPdf {
    /// Standard base64 of the bytes, for JSON transports.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PipelineError> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Turns enhanced worksheet text into PDF bytes.
///
/// A `Pipeline` is immutable after construction. Every call builds its own
/// document, so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    engine: LayoutEngine,
    renderer: LopdfRenderer,
}

impl Pipeline {
    pub fn new(config: LeafprintConfig) -> Result<Self, PipelineError> {
        let engine = LayoutEngine::new(config.layout)?;
        let output = config.output;
        let mut renderer = LopdfRenderer::new()
            .with_compression(output.compress)
            .with_creation_date(output.creation_date);
        if let Some(title) = output.title {
            renderer = renderer.with_title(title);
        }
        if let Some(producer) = output.producer {
            renderer = renderer.with_producer(producer);
        }
        Ok(Self { engine, renderer })
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    /// Classifies `content` without laying it out.
    pub fn parse(&self, content: &str) -> Vec<ParseEvent> {
        parse(content)
    }

    /// Generates the PDF for `content`. Never returns partial output.
    pub fn generate(&self, content: &str) -> Result<RenderedPdf, PipelineError> {
        let mut tracker = StageTracker::new();
        if content.trim().is_empty() {
            return Err(tracker.fail(PipelineError::EmptyContent));
        }

        tracker.enter(Stage::Parsing);
        let events = parse(content);

        tracker.enter(Stage::LayingOut);
        let document = self
            .engine
            .footers_enabled(content)
            .and_then(|footers| self.engine.layout_events(events, footers))
            .map_err(|e| tracker.fail(e.into()))?;

        tracker.enter(Stage::Serializing);
        let bytes = self
            .renderer
            .render(&document)
            .map_err(|e| tracker.fail(e.into()))?;

        tracker.enter(Stage::Done);
        log::info!(
            "Generated {} byte PDF with {} pages from {} characters",
            bytes.len(),
            document.page_count(),
            content.chars().count()
        );
        Ok(RenderedPdf {
            bytes,
            page_count: document.page_count(),
        })
    }

    /// Generates the PDF and writes it to `writer`. Returns the page count.
    pub fn generate_to_writer<W: Write>(&self, content: &str, mut writer: W) -> Result<usize, PipelineError> {
        let pdf = self.generate(content)?;
        writer.write_all(&pdf.bytes)?;
        writer.flush()?;
        Ok(pdf.page_count)
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, content: &str, path: P) -> Result<RenderedPdf, PipelineError> {
        let pdf = self.generate(content)?;
        pdf.write_to_file(path)?;
        Ok(pdf)
    }

    /// Runs `enhancer` on the request and generates the PDF from its output.
    pub fn enhance_and_generate(
        &self,
        enhancer: &dyn Enhancer,
        request: &EnhancementRequest,
    ) -> Result<RenderedPdf, PipelineError> {
        let enhanced = enhancer.enhance(request)?;
        log::debug!(
            "Enhancer returned {} characters for subject '{}'",
            enhanced.chars().count(),
            request.subject
        );
        self.generate(&enhanced)
    }
}
