use crate::LayoutError;
use crate::interface::LayoutContext;
use leafprint_types::{FontStyle, Rect};

/// Width of the blockquote side bar.
const QUOTE_BAR_WIDTH: f32 = 2.0;
/// Width of the solid side marker of a highlighted line.
const HIGHLIGHT_MARKER_WIDTH: f32 = 3.0;
const BULLET_SIZE: f32 = 3.5;
/// Bullet offset from the left margin.
const BULLET_OFFSET: f32 = 6.0;

/// Per-line ornaments painted at the left margin, beneath the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDecoration {
    #[default]
    None,
    /// A thin muted bar beside quoted text.
    QuoteBar,
    /// A translucent accent background plus a solid accent side marker.
    Highlight,
}

/// Drawn next to the first line of a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Label(String),
}

/// Paints `decoration` for one line box spanning the content width.
pub fn paint_decoration(ctx: &mut LayoutContext, decoration: LineDecoration, line_box: Rect) {
    let colors = &ctx.config().colors;
    match decoration {
        LineDecoration::None => {}
        LineDecoration::QuoteBar => {
            let bar = Rect::new(line_box.x, line_box.y, QUOTE_BAR_WIDTH, line_box.height);
            ctx.draw_rect(bar, colors.muted, 1.0);
        }
        LineDecoration::Highlight => {
            ctx.draw_rect(line_box, colors.accent, colors.accent_background_opacity);
            let marker = Rect::new(line_box.x, line_box.y, HIGHLIGHT_MARKER_WIDTH, line_box.height);
            ctx.draw_rect(marker, colors.accent, 1.0);
        }
    }
}

/// Paints a list marker at the left margin, aligned to `baseline`.
pub fn paint_marker(
    ctx: &mut LayoutContext,
    marker: &ListMarker,
    baseline: f32,
    size: f32,
) -> Result<(), LayoutError> {
    let left = ctx.content_box().x;
    let color = ctx.config().colors.text;
    match marker {
        ListMarker::Bullet => {
            // Centered on the x-height of the text.
            let y = baseline + size * 0.26 - BULLET_SIZE / 2.0;
            let square = Rect::new(left + BULLET_OFFSET, y, BULLET_SIZE, BULLET_SIZE);
            ctx.draw_rect(square, color, 1.0);
            Ok(())
        }
        ListMarker::Label(label) => ctx.draw_text(label, left, baseline, FontStyle::Regular, size, color),
    }
}
