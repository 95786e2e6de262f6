use crate::LayoutError;
use crate::algorithms::pagination::check_line_fit;
use crate::config::LayoutConfig;
use crate::fonts::FontMetrics;
use leafprint_render_core::Document;
use leafprint_types::{Color, FontStyle, Rect};

/// Drawn in place of a text fragment the document rejects.
pub const PLACEHOLDER: &str = "[?]";

// Tolerance when comparing the cursor against the top of the page.
const EPSILON: f32 = 0.01;

/// Where the next line goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// 1-based.
    pub page_number: usize,
    /// Top of the next line box, in PDF space.
    pub y: f32,
}

/// Mutable state of one document build: the document being filled, the
/// cursor, and the pagination policy.
///
/// Every drawing call targets the current page. Breaking to a new page
/// finalizes the previous one, which is never touched again.
pub struct LayoutContext<'a> {
    config: &'a LayoutConfig,
    metrics: &'a dyn FontMetrics,
    document: Document,
    cursor: LayoutCursor,
    footers: bool,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a dyn FontMetrics, footers: bool) -> Self {
        Self {
            config,
            metrics,
            document: Document::new(config.page_size),
            cursor: LayoutCursor {
                page_number: 1,
                y: config.page_size.height - config.margins.top,
            },
            footers,
        }
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    pub fn metrics(&self) -> &'a dyn FontMetrics {
        self.metrics
    }

    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    pub fn content_box(&self) -> Rect {
        self.config.page_size.content_box(&self.config.margins)
    }

    fn top(&self) -> f32 {
        self.config.page_size.height - self.config.margins.top
    }

    pub fn at_page_top(&self) -> bool {
        (self.cursor.y - self.top()).abs() < EPSILON
    }

    /// Moves the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.cursor.y -= dy;
    }

    /// Breaks to a new page unless `height` still fits above the bottom
    /// margin. Returns whether a break happened.
    ///
    /// A fresh page never breaks again, so content taller than the page is
    /// placed anyway instead of producing empty pages.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        let analysis = check_line_fit(self.cursor.y, height, self.config.margins.bottom);
        if analysis.should_break && !self.at_page_top() {
            self.new_page();
            return true;
        }
        false
    }

    pub fn new_page(&mut self) {
        self.finalize_page();
        self.document.new_page();
        self.cursor = LayoutCursor {
            page_number: self.cursor.page_number + 1,
            y: self.top(),
        };
        log::debug!("Started page {}", self.cursor.page_number);
    }

    fn finalize_page(&mut self) {
        if self.footers {
            self.stamp_footer();
        }
    }

    fn stamp_footer(&mut self) {
        let text = format!("Page {}", self.cursor.page_number);
        let size = self.config.typography.footer_size;
        let width = self.metrics.text_width(&text, FontStyle::Regular, size);
        let x = self.config.page_size.width - self.config.margins.right - width;
        let y = self.config.margins.bottom / 2.0;
        let color = self.config.colors.footer;
        if let Err(err) = self
            .document
            .draw_text(&text, x, y, FontStyle::Regular, size, color)
        {
            log::warn!("Could not stamp footer on page {}: {}", self.cursor.page_number, err);
        }
    }

    /// Draws a text fragment with its baseline at `y`.
    ///
    /// A fragment the document rejects is replaced by [`PLACEHOLDER`] so a
    /// single bad fragment never aborts the build.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: FontStyle,
        size: f32,
        color: Color,
    ) -> Result<(), LayoutError> {
        match self.document.draw_text(text, x, y, style, size, color) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!(
                    "Replacing text {:?} on page {} with a placeholder: {}",
                    text,
                    self.cursor.page_number,
                    err
                );
                self.document
                    .draw_text(PLACEHOLDER, x, y, style, size, color)?;
                Ok(())
            }
        }
    }

    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        self.document.draw_line(x0, y0, x1, y1, width, color);
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, opacity: f32) {
        self.document
            .draw_rect(rect.x, rect.y, rect.width, rect.height, color, opacity);
    }

    /// Finalizes the last page and hands the document over.
    pub fn finish(mut self) -> Document {
        self.finalize_page();
        log::debug!("Layout finished with {} pages", self.document.page_count());
        self.document
    }
}
