//! Per-kind block layout.

mod heading;
mod list_item;
mod paragraph;
mod rule;

use crate::LayoutError;
use crate::interface::LayoutContext;
use leafprint_markup::{Block, BlockKind, ListKind};

/// Extra space once a list group closes.
const LIST_END_SPACING: f32 = 4.0;

/// Lays out one block at the cursor.
pub fn render_block(ctx: &mut LayoutContext, block: &Block) -> Result<(), LayoutError> {
    log::trace!(
        "Laying out {:?} from line {} on page {}",
        block.kind,
        block.line,
        ctx.cursor().page_number
    );
    match block.kind {
        BlockKind::Title => heading::render_title(ctx, block),
        BlockKind::Heading { level } => heading::render_heading(ctx, block, level),
        BlockKind::Rule => {
            rule::render_rule(ctx);
            Ok(())
        }
        BlockKind::Blockquote => paragraph::render_blockquote(ctx, block),
        BlockKind::BulletItem => list_item::render_bullet(ctx, block),
        BlockKind::NumberedItem { index } => list_item::render_numbered(ctx, block, index),
        BlockKind::ClimateAnnotation => paragraph::render_annotation(ctx, block),
        BlockKind::Paragraph => paragraph::render_paragraph(ctx, block),
    }
}

pub fn end_list(ctx: &mut LayoutContext, kind: ListKind) {
    log::trace!("Closing {:?} list", kind);
    ctx.advance(LIST_END_SPACING);
}
