use crate::LayoutError;
use crate::interface::LayoutContext;
use crate::painting::{Align, WrapSpec, draw_wrapped};
use crate::text::Span;
use leafprint_markup::Block;
use leafprint_types::FontStyle;

const TITLE_SPACE_AFTER: f32 = 14.0;
const HEADING_SPACE_BEFORE: f32 = 6.0;
/// Space after heading levels 1 to 3.
const HEADING_SPACE_AFTER: [f32; 3] = [6.0, 5.0, 3.0];

/// Bold and centered across the content width.
pub fn render_title(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    let content = ctx.content_box();
    let config = ctx.config();
    let spans = Span::from_runs(&block.runs(), config.colors.text);
    let spec = WrapSpec {
        force_style: Some(FontStyle::Bold),
        align: Align::Center,
        ..WrapSpec::new(content.x, content.width, config.typography.title)
    };
    draw_wrapped(ctx, &spans, &spec)?;
    ctx.advance(TITLE_SPACE_AFTER);
    Ok(())
}

pub fn render_heading(ctx: &mut LayoutContext, block: &Block, level: u8) -> Result<(), LayoutError> {
    if !ctx.at_page_top() {
        ctx.advance(HEADING_SPACE_BEFORE);
    }
    let content = ctx.content_box();
    let config = ctx.config();
    let spans = Span::from_runs(&block.runs(), config.colors.text);
    let spec = WrapSpec {
        force_style: Some(FontStyle::Bold),
        ..WrapSpec::new(content.x, content.width, config.typography.heading(level))
    };
    draw_wrapped(ctx, &spans, &spec)?;
    let index = usize::from(level.clamp(1, 3)) - 1;
    ctx.advance(HEADING_SPACE_AFTER[index]);
    Ok(())
}
