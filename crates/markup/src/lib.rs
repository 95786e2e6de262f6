//! Markdown-lite parsing for enhanced worksheet text.
//!
//! The dialect is line oriented: every trimmed source line is classified into
//! a [`Block`] and the block's text is split into styled [`InlineRun`]s on
//! demand. Lists are tracked as groups so that the layout can space them.

pub mod block;
pub mod inline;
pub mod parser;

pub use block::{Block, BlockKind, ListKind, ParseEvent};
pub use inline::{InlineRun, format_runs, strip_markers};
pub use parser::{Parser, parse};
