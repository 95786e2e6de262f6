pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Tolerance for floating point inaccuracies when lines exactly fill a page.
const EPSILON: f32 = 0.01;

/// Checks whether something `height` tall still fits above the bottom margin.
///
/// * `cursor_y`: The current Y position in PDF space (origin bottom-left).
/// * `height`: The required height.
/// * `bottom`: The Y position of the bottom margin.
pub fn check_line_fit(cursor_y: f32, height: f32, bottom: f32) -> BreakAnalysis {
    let available = (cursor_y - bottom).max(0.0);
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// The up-front page count guess used by estimated footers:
/// `ceil(chars / chars_per_page)`, and at least one.
pub fn estimate_page_count(char_count: usize, chars_per_page: usize) -> usize {
    char_count.div_ceil(chars_per_page.max(1)).max(1)
}
