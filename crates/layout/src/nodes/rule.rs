use crate::interface::LayoutContext;

/// Vertical space a rule occupies; the line sits in its middle.
const RULE_HEIGHT: f32 = 14.0;
const RULE_WIDTH: f32 = 0.75;

pub fn render_rule(ctx: &mut LayoutContext) {
    ctx.ensure_space(RULE_HEIGHT);
    let content = ctx.content_box();
    let y = ctx.cursor().y - RULE_HEIGHT / 2.0;
    let color = ctx.config().colors.rule;
    ctx.draw_line(content.x, y, content.x + content.width, y, RULE_WIDTH, color);
    ctx.advance(RULE_HEIGHT);
}
