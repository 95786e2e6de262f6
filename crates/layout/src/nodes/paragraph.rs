use crate::LayoutError;
use crate::interface::LayoutContext;
use crate::painting::{LineDecoration, WrapSpec, draw_wrapped};
use crate::text::Span;
use leafprint_markup::Block;
use leafprint_types::FontStyle;

const PARAGRAPH_SPACE_AFTER: f32 = 6.0;
const QUOTE_INDENT: f32 = 18.0;
const ANNOTATION_INDENT: f32 = 12.0;
const ANNOTATION_LABEL: &str = "Climate Enhancement: ";

pub fn render_paragraph(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    let content = ctx.content_box();
    let config = ctx.config();
    let spans = Span::from_runs(&block.runs(), config.colors.text);
    let spec = WrapSpec::new(content.x, content.width, config.typography.body);
    draw_wrapped(ctx, &spans, &spec)?;
    ctx.advance(PARAGRAPH_SPACE_AFTER);
    Ok(())
}

pub fn render_blockquote(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    let content = ctx.content_box();
    let config = ctx.config();
    let spans = Span::from_runs(&block.runs(), config.colors.muted);
    let spec = WrapSpec {
        decoration: LineDecoration::QuoteBar,
        ..WrapSpec::new(
            content.x + QUOTE_INDENT,
            content.width - QUOTE_INDENT,
            config.typography.body,
        )
    };
    draw_wrapped(ctx, &spans, &spec)?;
    ctx.advance(PARAGRAPH_SPACE_AFTER);
    Ok(())
}

/// Enhancer-inserted content: an accent label followed by the text, every
/// line highlighted.
pub fn render_annotation(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    let content = ctx.content_box();
    let config = ctx.config();
    let mut spans = vec![Span::new(ANNOTATION_LABEL, FontStyle::Bold, config.colors.accent)];
    spans.extend(Span::from_runs(&block.runs(), config.colors.text));
    let spec = WrapSpec {
        decoration: LineDecoration::Highlight,
        ..WrapSpec::new(
            content.x + ANNOTATION_INDENT,
            content.width - ANNOTATION_INDENT,
            config.typography.body,
        )
    };
    draw_wrapped(ctx, &spans, &spec)?;
    ctx.advance(PARAGRAPH_SPACE_AFTER);
    Ok(())
}
