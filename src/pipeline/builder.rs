// src/pipeline/builder.rs
use super::Pipeline;
use super::config::LeafprintConfig;
use crate::error::PipelineError;
use leafprint_layout::FooterMode;
use leafprint_types::{Margins, PageSize};
use std::path::Path;

/// A builder for creating a [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: LeafprintConfig,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: LeafprintConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a TOML file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = LeafprintConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_footer_mode(mut self, mode: FooterMode) -> Self {
        self.config.layout.footers = mode;
        self
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.config.layout.page_size = size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.config.layout.margins = margins;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.output.title = Some(title.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.config.output.compress = compress;
        self
    }

    /// Disabling the creation date makes output byte-for-byte reproducible.
    pub fn with_creation_date(mut self, enabled: bool) -> Self {
        self.config.output.creation_date = enabled;
        self
    }

    /// Validates the configuration and creates the `Pipeline`.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        Pipeline::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_reach_the_pipeline() {
        let pipeline = PipelineBuilder::new()
            .with_footer_mode(FooterMode::Exact)
            .with_page_size(PageSize::A4)
            .with_margins(Margins::all(50.0))
            .build()
            .unwrap();
        let layout = pipeline.layout_config();
        assert_eq!(layout.footers, FooterMode::Exact);
        assert_eq!(layout.page_size, PageSize::A4);
        assert_eq!(layout.margins, Margins::all(50.0));
    }

    #[test]
    fn impossible_margins_fail_to_build() {
        let err = PipelineBuilder::new()
            .with_margins(Margins::all(500.0))
            .build()
            .unwrap_err();
        assert_eq!(err.status(), 400);
    }
}
