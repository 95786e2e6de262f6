pub mod sanitize;
pub mod wrapper;

pub use sanitize::sanitize;
pub use wrapper::{LineLayout, Span, StyleSegment, Word, break_lines, split_words};
