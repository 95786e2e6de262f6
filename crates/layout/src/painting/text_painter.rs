use crate::LayoutError;
use crate::config::TextSpec;
use crate::interface::LayoutContext;
use crate::painting::box_painter::{LineDecoration, ListMarker, paint_decoration, paint_marker};
use crate::text::{Span, break_lines, split_words};
use leafprint_types::{FontStyle, Rect};

/// Baseline position below the top of a line box, as a fraction of the
/// font size.
const BASELINE_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// How one block of wrapped text is placed.
#[derive(Debug, Clone)]
pub struct WrapSpec {
    /// Left edge of the text.
    pub x: f32,
    pub max_width: f32,
    pub text: TextSpec,
    pub force_style: Option<FontStyle>,
    pub align: Align,
    pub decoration: LineDecoration,
    pub marker: Option<ListMarker>,
}

impl WrapSpec {
    /// Left-aligned text spanning `max_width` from `x`.
    pub fn new(x: f32, max_width: f32, text: TextSpec) -> Self {
        Self {
            x,
            max_width,
            text,
            force_style: None,
            align: Align::Left,
            decoration: LineDecoration::None,
            marker: None,
        }
    }
}

/// Wraps `spans` and draws them line by line at the cursor, breaking pages
/// as needed. Returns the number of lines drawn.
///
/// Each line reserves `line_height` before it is drawn, so a line is never
/// split across pages.
pub fn draw_wrapped(
    ctx: &mut LayoutContext,
    spans: &[Span],
    spec: &WrapSpec,
) -> Result<usize, LayoutError> {
    let TextSpec { size, line_height } = spec.text;
    let words = split_words(spans);
    let lines = break_lines(&words, ctx.metrics(), size, spec.max_width, spec.force_style);

    for (index, line) in lines.iter().enumerate() {
        ctx.ensure_space(line_height);
        let top = ctx.cursor().y;
        let baseline = top - size * BASELINE_RATIO;
        let content = ctx.content_box();

        let line_box = Rect::new(content.x, top - line_height, content.width, line_height);
        paint_decoration(ctx, spec.decoration, line_box);
        if index == 0 {
            if let Some(marker) = &spec.marker {
                paint_marker(ctx, marker, baseline, size)?;
            }
        }

        let mut x = match spec.align {
            Align::Left => spec.x,
            Align::Center => spec.x + ((spec.max_width - line.width) / 2.0).max(0.0),
        };
        for segment in &line.segments {
            ctx.draw_text(&segment.text, x, baseline, segment.style, size, segment.color)?;
            x += segment.width;
        }
        ctx.advance(line_height);
    }
    Ok(lines.len())
}
