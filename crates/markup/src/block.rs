use crate::inline::{InlineRun, format_runs};

/// Block-level classification of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The leading "Enhanced Educational Content" header.
    Title,
    Heading { level: u8 },
    Rule,
    Blockquote,
    BulletItem,
    NumberedItem { index: u32 },
    /// Content the enhancer inserted, highlighted with a side marker.
    ClimateAnnotation,
    Paragraph,
}

impl BlockKind {
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            BlockKind::BulletItem => Some(ListKind::Bullet),
            BlockKind::NumberedItem { .. } => Some(ListKind::Numbered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// One logical unit of content derived from a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Text with inline markers still in place.
    pub text: String,
    /// 1-based source line.
    pub line: usize,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn runs(&self) -> Vec<InlineRun> {
        format_runs(&self.text)
    }
}

/// What the parser hands to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Block(Block),
    /// A list group was closed by a blank line, a change of list type, a
    /// non-list block or the end of input.
    ListEnd(ListKind),
}

impl ParseEvent {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            ParseEvent::Block(block) => Some(block),
            ParseEvent::ListEnd(_) => None,
        }
    }
}
