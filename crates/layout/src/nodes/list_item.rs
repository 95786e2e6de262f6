use crate::LayoutError;
use crate::interface::LayoutContext;
use crate::painting::{ListMarker, WrapSpec, draw_wrapped};
use crate::text::Span;
use leafprint_markup::Block;

const BULLET_INDENT: f32 = 18.0;
const NUMBERED_INDENT: f32 = 22.0;
const ITEM_SPACE_AFTER: f32 = 3.0;

fn render_item(
    ctx: &mut LayoutContext,
    block: &Block,
    indent: f32,
    marker: ListMarker,
) -> Result<(), LayoutError> {
    let content = ctx.content_box();
    let config = ctx.config();
    let spans = Span::from_runs(&block.runs(), config.colors.text);
    let spec = WrapSpec {
        marker: Some(marker),
        ..WrapSpec::new(content.x + indent, content.width - indent, config.typography.body)
    };
    draw_wrapped(ctx, &spans, &spec)?;
    ctx.advance(ITEM_SPACE_AFTER);
    Ok(())
}

pub fn render_bullet(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    render_item(ctx, block, BULLET_INDENT, ListMarker::Bullet)
}

pub fn render_numbered(ctx: &mut LayoutContext, block: &Block, index: u32) -> Result<(), LayoutError> {
    render_item(ctx, block, NUMBERED_INDENT, ListMarker::Label(format!("{index}.")))
}
