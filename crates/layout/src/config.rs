use crate::LayoutError;
use leafprint_types::{Color, Margins, PageSize};
use serde::{Deserialize, Serialize};

/// When "Page N" footers are stamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FooterMode {
    /// Stamp footers when the character count suggests more than one page
    /// (`ceil(chars / chars_per_page) > 1`). The estimate can disagree with
    /// the real page count in both directions.
    #[default]
    Estimated,
    /// Lay the document out twice and stamp footers only when the first
    /// pass produced more than one page.
    Exact,
    Never,
}

/// Font size and line advance of one kind of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub size: f32,
    pub line_height: f32,
}

impl TextSpec {
    pub const fn new(size: f32, line_height: f32) -> Self {
        Self { size, line_height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub footer_size: f32,
    pub title: TextSpec,
    /// Levels 1 to 3.
    pub headings: [TextSpec; 3],
    /// Paragraphs, list items, quotes and annotations.
    pub body: TextSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            footer_size: 9.0,
            title: TextSpec::new(20.0, 26.0),
            headings: [
                TextSpec::new(16.0, 22.0),
                TextSpec::new(14.0, 19.0),
                TextSpec::new(12.0, 16.0),
            ],
            body: TextSpec::new(12.0, 15.0),
        }
    }
}

impl Typography {
    /// The spec for heading `level`, clamped to the three supported levels.
    pub fn heading(&self, level: u8) -> TextSpec {
        let index = usize::from(level.clamp(1, 3)) - 1;
        self.headings[index]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub accent_background_opacity: f32,
    pub text: Color,
    /// Blockquote text and side bars.
    pub muted: Color,
    pub rule: Color,
    pub footer: Color,
    /// Climate annotation label, side marker and background.
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent_background_opacity: 0.12,
            text: Color::BLACK,
            muted: Color::gray(96),
            rule: Color::gray(160),
            footer: Color::gray(128),
            accent: Color::rgb(46, 125, 50),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub footers: FooterMode,
    /// The number of characters assumed to fill one page when footers are
    /// estimated.
    ///
    /// Defaults to `3000`.
    pub chars_per_page: usize,
    /// Defaults to US Letter (612 x 792 pt).
    pub page_size: PageSize,
    /// Defaults to one inch on every side.
    pub margins: Margins,
    pub typography: Typography,
    pub colors: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            footers: FooterMode::default(),
            chars_per_page: 3000,
            page_size: PageSize::LETTER,
            margins: Margins::default(),
            typography: Typography::default(),
            colors: Palette::default(),
        }
    }
}

impl LayoutConfig {
    pub fn content_width(&self) -> f32 {
        self.page_size.content_box(&self.margins).width
    }

    /// Rejects geometry that would make layout meaningless.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let content = self.page_size.content_box(&self.margins);
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "Margins leave no room for content ({:.1} x {:.1} pt)",
                content.width, content.height
            )));
        }
        let typography = &self.typography;
        let specs = std::iter::once(typography.title)
            .chain(typography.headings)
            .chain(std::iter::once(typography.body));
        for spec in specs {
            if spec.size <= 0.0 || spec.line_height <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "Font size and line height must be positive, got {} / {}",
                    spec.size, spec.line_height
                )));
            }
            if spec.line_height > content.height {
                return Err(LayoutError::InvalidConfig(format!(
                    "Line height {} exceeds the page content height {:.1}",
                    spec.line_height, content.height
                )));
            }
        }
        if typography.footer_size <= 0.0 {
            return Err(LayoutError::InvalidConfig("Footer size must be positive".into()));
        }
        if self.chars_per_page == 0 {
            return Err(LayoutError::InvalidConfig("chars_per_page must be at least 1".into()));
        }
        Ok(())
    }
}
