use crate::error::RenderError;
use leafprint_types::{Color, FontStyle, PageSize, Rect};

/// A standard Type1 font referenced by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHandle {
    pub style: FontStyle,
    /// PostScript name of the base-14 font.
    pub base_font: &'static str,
    /// Name used inside page content streams.
    pub resource_name: &'static str,
}

/// The four Helvetica faces, in [`FontStyle::ALL`] order.
pub const STANDARD_FONTS: [FontHandle; 4] = [
    FontHandle {
        style: FontStyle::Regular,
        base_font: "Helvetica",
        resource_name: "F1",
    },
    FontHandle {
        style: FontStyle::Bold,
        base_font: "Helvetica-Bold",
        resource_name: "F2",
    },
    FontHandle {
        style: FontStyle::Italic,
        base_font: "Helvetica-Oblique",
        resource_name: "F3",
    },
    FontHandle {
        style: FontStyle::BoldItalic,
        base_font: "Helvetica-BoldOblique",
        resource_name: "F4",
    },
];

/// True when every character of `text` is printable ASCII, the range the
/// standard fonts are drawn with.
pub fn is_encodable(text: &str) -> bool {
    text.chars().all(|c| (' '..='~').contains(&c))
}

/// A primitive drawing operation in PDF user space (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        /// Baseline.
        y: f32,
        style: FontStyle,
        size: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
        opacity: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    size: PageSize,
    commands: Vec<DrawCommand>,
}

impl Page {
    fn new(size: PageSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text fragments on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The document being built for one request.
///
/// Pages are only ever appended. Draw calls always target the last page, so
/// a page can no longer change once its successor exists.
#[derive(Debug, Clone)]
pub struct Document {
    page_size: PageSize,
    pages: Vec<Page>,
    fonts: [FontHandle; 4],
}

impl Document {
    /// Creates a document holding one empty page.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: vec![Page::new(page_size)],
            fonts: STANDARD_FONTS,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn fonts(&self) -> &[FontHandle; 4] {
        &self.fonts
    }

    pub fn font(&self, style: FontStyle) -> &FontHandle {
        &self.fonts[style.index()]
    }

    /// Appends a page and returns its 1-based number.
    pub fn new_page(&mut self) -> usize {
        self.pages.push(Page::new(self.page_size));
        self.pages.len()
    }

    fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::new(self.page_size));
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Places `text` with its baseline at `(x, y)` on the current page.
    ///
    /// Fails without drawing anything when the text holds a character the
    /// standard fonts cannot encode.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: FontStyle,
        size: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        if let Some(ch) = text.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(RenderError::UnsupportedGlyph { ch });
        }
        if !(x.is_finite() && y.is_finite() && size > 0.0) {
            return Err(RenderError::Other(format!(
                "Invalid text placement x={x} y={y} size={size}"
            )));
        }
        self.current_page().commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
            size,
            color,
        });
        Ok(())
    }

    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        self.current_page().commands.push(DrawCommand::Line {
            from: (x0, y0),
            to: (x1, y1),
            width,
            color,
        });
    }

    /// Fills a rectangle whose lower-left corner is `(x, y)`.
    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color, opacity: f32) {
        self.current_page().commands.push(DrawCommand::Rect {
            rect: Rect::new(x, y, width, height),
            color,
            opacity: opacity.clamp(0.0, 1.0),
        });
    }
}
