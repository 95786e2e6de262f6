use crate::LayoutError;
use crate::algorithms::pagination::estimate_page_count;
use crate::config::{FooterMode, LayoutConfig};
use crate::fonts::{FontMetrics, StandardFontMetrics};
use crate::interface::LayoutContext;
use crate::nodes::{end_list, render_block};
use leafprint_markup::{ParseEvent, Parser};
use leafprint_render_core::Document;
use std::sync::Arc;

/// Turns parsed blocks into a paginated [`Document`].
///
/// The engine holds no per-document state. Each call builds its own
/// [`LayoutContext`], so one engine can serve concurrent requests.
#[derive(Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    metrics: Arc<dyn FontMetrics>,
}

impl std::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        Self::with_metrics(config, Arc::new(StandardFontMetrics))
    }

    pub fn with_metrics(
        config: LayoutConfig,
        metrics: Arc<dyn FontMetrics>,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }

    /// Decides whether `text` gets "Page N" footers under the configured
    /// [`FooterMode`]. `Exact` lays the text out once to count its pages.
    pub fn footers_enabled(&self, text: &str) -> Result<bool, LayoutError> {
        let enabled = match self.config.footers {
            FooterMode::Never => false,
            FooterMode::Estimated => {
                let estimate =
                    estimate_page_count(text.chars().count(), self.config.chars_per_page);
                log::debug!("Estimated {} pages for footer policy", estimate);
                estimate > 1
            }
            FooterMode::Exact => {
                let pages = self.layout_events(Parser::new(text), false)?.page_count();
                log::debug!("Counting pass produced {} pages", pages);
                pages > 1
            }
        };
        Ok(enabled)
    }

    /// Parses and lays out `text` in one streaming pass (two under
    /// [`FooterMode::Exact`]).
    pub fn layout_text(&self, text: &str) -> Result<Document, LayoutError> {
        let footers = self.footers_enabled(text)?;
        self.layout_events(Parser::new(text), footers)
    }

    /// Lays out already parsed events in order.
    pub fn layout_events<I>(&self, events: I, footers: bool) -> Result<Document, LayoutError>
    where
        I: IntoIterator<Item = ParseEvent>,
    {
        let mut ctx = LayoutContext::new(&self.config, self.metrics.as_ref(), footers);
        for event in events {
            match event {
                ParseEvent::Block(block) => render_block(&mut ctx, &block)?,
                ParseEvent::ListEnd(kind) => end_list(&mut ctx, kind),
            }
        }
        Ok(ctx.finish())
    }
}
