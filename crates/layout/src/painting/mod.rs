pub mod box_painter;
pub mod text_painter;

pub use box_painter::{LineDecoration, ListMarker};
pub use text_painter::{Align, WrapSpec, draw_wrapped};
