use crate::block::{Block, BlockKind, ListKind, ParseEvent};
use crate::inline::strip_markers;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.\s+(.*)$").expect("numbered item pattern is valid")
});

/// `\r\n`, a lone `\r` and `\n` all end a line.
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

const TITLE_PHRASE: &str = "enhanced educational content";
const CLIMATE_PREFIXES: [&str; 2] = ["**Climate Enhancement:**", "**Climate Enhancement**:"];
const BULLET_PREFIXES: [&str; 2] = ["- ", "• "];

/// Parse the whole text eagerly.
pub fn parse(text: &str) -> Vec<ParseEvent> {
    let events: Vec<ParseEvent> = Parser::new(text).collect();
    log::debug!("Parsed {} events from {} bytes of text", events.len(), text.len());
    events
}

/// Line-by-line streaming classifier.
///
/// Each call to `next` consumes input lines until at least one event is
/// ready, so blocks can be laid out as soon as their line has been read.
pub struct Parser<'a> {
    lines: std::iter::Enumerate<regex::Split<'static, 'a>>,
    title_seen: bool,
    open_list: Option<ListKind>,
    pending: VecDeque<ParseEvent>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: LINE_BREAK.split(text).enumerate(),
            title_seen: false,
            open_list: None,
            pending: VecDeque::new(),
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.pending.push_back(ParseEvent::ListEnd(kind));
        }
    }

    fn emit(&mut self, block: Block) {
        match block.kind.list_kind() {
            Some(kind) if self.open_list == Some(kind) => {}
            Some(kind) => {
                self.close_list();
                self.open_list = Some(kind);
            }
            None => self.close_list(),
        }
        self.pending.push_back(ParseEvent::Block(block));
    }

    fn process_line(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            self.close_list();
        } else {
            self.classify(line_no, line);
        }
    }

    fn classify(&mut self, line_no: usize, line: &str) {
        if !self.title_seen && is_title(line) {
            self.title_seen = true;
            self.emit(Block::new(BlockKind::Title, line, line_no));
            return;
        }

        if let Some(rest) = CLIMATE_PREFIXES.iter().find_map(|p| line.strip_prefix(p)) {
            self.emit(Block::new(BlockKind::ClimateAnnotation, rest.trim(), line_no));
            return;
        }

        if let Some((level, rest)) = hash_heading(line) {
            self.emit(Block::new(BlockKind::Heading { level }, rest, line_no));
            return;
        }

        if is_rule(line) {
            self.emit(Block::new(BlockKind::Rule, "", line_no));
            return;
        }

        if let Some(rest) = line.strip_prefix('>') {
            let rest = rest.trim_start_matches('>').trim();
            self.emit(Block::new(BlockKind::Blockquote, rest, line_no));
            return;
        }

        if let Some(inner) = fully_bold(line) {
            self.emit(Block::new(BlockKind::Heading { level: 1 }, inner, line_no));
            return;
        }

        if let Some((lead, rest)) = bold_lead(line) {
            self.emit(Block::new(BlockKind::Heading { level: 3 }, lead, line_no));
            self.emit(Block::new(BlockKind::Paragraph, rest, line_no));
            return;
        }

        if let Some(rest) = BULLET_PREFIXES.iter().find_map(|p| line.strip_prefix(p)) {
            self.emit(Block::new(BlockKind::BulletItem, rest.trim(), line_no));
            return;
        }

        if let Some(caps) = NUMBERED_ITEM.captures(line) {
            let rest = &caps[2];
            if looks_like_section_title(rest) {
                self.emit(Block::new(BlockKind::Heading { level: 2 }, line, line_no));
                return;
            }
            if let Ok(index) = caps[1].parse::<u32>() {
                self.emit(Block::new(BlockKind::NumberedItem { index }, rest.trim(), line_no));
                return;
            }
        }

        self.emit(Block::new(BlockKind::Paragraph, line, line_no));
    }
}

impl Iterator for Parser<'_> {
    type Item = ParseEvent;

    fn next(&mut self) -> Option<ParseEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let Some((index, raw)) = self.lines.next() else {
                return self.open_list.take().map(ParseEvent::ListEnd);
            };
            self.process_line(index + 1, raw);
        }
    }
}

fn is_title(line: &str) -> bool {
    line.starts_with("**") && strip_markers(line).trim().to_lowercase().starts_with(TITLE_PHRASE)
}

fn hash_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some(((hashes as u8).min(3), rest.trim()))
}

fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && {
        let rest: Vec<char> = marks.collect();
        rest.len() >= 2 && rest.iter().all(|&c| c == first)
    }
}

/// `**text**` with nothing outside the markers and no inner `**`.
fn fully_bold(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("**")?.strip_suffix("**")?;
    let trimmed = inner.trim();
    if trimmed.is_empty() || inner.contains("**") {
        return None;
    }
    Some(trimmed)
}

/// `**lead** trailing content` split into its two parts. A `***` opener
/// is closed by the next `***`.
fn bold_lead(line: &str) -> Option<(&str, &str)> {
    let marker = if line.starts_with("***") { "***" } else { "**" };
    let after_open = line.strip_prefix(marker)?;
    let close = after_open.find(marker)?;
    let lead = after_open[..close].trim();
    let rest = after_open[close + marker.len()..].trim();
    if lead.is_empty() || rest.is_empty() {
        return None;
    }
    Some((lead, rest))
}

/// "Climate-Related Examples:" style remainders introduce a section rather
/// than a list entry.
fn looks_like_section_title(rest: &str) -> bool {
    let visible = strip_markers(rest);
    let visible = visible.trim();
    visible.chars().next().is_some_and(char::is_uppercase) && visible.ends_with(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(text: &str) -> Vec<Block> {
        parse(text)
            .into_iter()
            .filter_map(|event| match event {
                ParseEvent::Block(block) => Some(block),
                ParseEvent::ListEnd(_) => None,
            })
            .collect()
    }

    fn kinds(text: &str) -> Vec<BlockKind> {
        blocks(text).into_iter().map(|b| b.kind).collect()
    }

    #[test]
    fn heading_then_paragraph() {
        let parsed = blocks("**Title**\nHello world.");
        assert_eq!(
            parsed,
            vec![
                Block::new(BlockKind::Heading { level: 1 }, "Title", 1),
                Block::new(BlockKind::Paragraph, "Hello world.", 2),
            ]
        );
    }

    #[test]
    fn bullets_grouped_and_closed_by_blank_line() {
        let events = parse("- item one\n- item two\n\nNext paragraph");
        assert_eq!(
            events,
            vec![
                ParseEvent::Block(Block::new(BlockKind::BulletItem, "item one", 1)),
                ParseEvent::Block(Block::new(BlockKind::BulletItem, "item two", 2)),
                ParseEvent::ListEnd(ListKind::Bullet),
                ParseEvent::Block(Block::new(BlockKind::Paragraph, "Next paragraph", 4)),
            ]
        );
    }

    #[test]
    fn capitalized_numbered_title_is_heading() {
        let parsed = blocks("1. Climate-Related Examples:\nSome text");
        assert_eq!(parsed[0].kind, BlockKind::Heading { level: 2 });
        assert_eq!(parsed[0].text, "1. Climate-Related Examples:");
        assert_eq!(parsed[1].kind, BlockKind::Paragraph);
    }

    #[test]
    fn numbered_items_keep_their_index() {
        let parsed = blocks("1. first step\n2. Second step.\n10. tenth");
        assert_eq!(
            parsed.iter().map(|b| b.kind).collect::<Vec<_>>(),
            vec![
                BlockKind::NumberedItem { index: 1 },
                BlockKind::NumberedItem { index: 2 },
                BlockKind::NumberedItem { index: 10 },
            ]
        );
        assert_eq!(parsed[1].text, "Second step.");
    }

    #[test]
    fn list_type_change_closes_previous_group() {
        let events = parse("- bullet\n1. numbered");
        assert_eq!(
            events,
            vec![
                ParseEvent::Block(Block::new(BlockKind::BulletItem, "bullet", 1)),
                ParseEvent::ListEnd(ListKind::Bullet),
                ParseEvent::Block(Block::new(BlockKind::NumberedItem { index: 1 }, "numbered", 2)),
                ParseEvent::ListEnd(ListKind::Numbered),
            ]
        );
    }

    #[test]
    fn paragraph_after_list_closes_group_without_blank_line() {
        let events = parse("- a\nplain");
        assert_eq!(events[1], ParseEvent::ListEnd(ListKind::Bullet));
        assert!(matches!(&events[2], ParseEvent::Block(b) if b.kind == BlockKind::Paragraph));
    }

    #[test]
    fn only_first_title_line_is_title() {
        let parsed = kinds(
            "**Enhanced Educational Content: Biology**\n**Enhanced Educational Content**",
        );
        assert_eq!(parsed, vec![BlockKind::Title, BlockKind::Heading { level: 1 }]);
    }

    #[test]
    fn climate_annotation_keeps_remainder() {
        let parsed = blocks("**Climate Enhancement:** Forests store carbon.");
        assert_eq!(
            parsed,
            vec![Block::new(BlockKind::ClimateAnnotation, "Forests store carbon.", 1)]
        );
    }

    #[test]
    fn bold_lead_splits_into_two_blocks() {
        let parsed = blocks("**Activity:** Measure the leaf area.");
        assert_eq!(
            parsed,
            vec![
                Block::new(BlockKind::Heading { level: 3 }, "Activity:", 1),
                Block::new(BlockKind::Paragraph, "Measure the leaf area.", 1),
            ]
        );
    }

    #[test]
    fn crlf_input_is_normalized() {
        assert_eq!(
            kinds("**Title**\r\n\r\nBody text\r\n"),
            vec![BlockKind::Heading { level: 1 }, BlockKind::Paragraph]
        );
    }

    #[test]
    fn lone_cr_line_endings_group_like_lf() {
        assert_eq!(parse("- a\r\r- b"), parse("- a\n\n- b"));
        assert_eq!(parse("- a\r- b\r\rNext"), parse("- a\n- b\n\nNext"));

        let parsed = blocks("first\rsecond\r\nthird");
        assert_eq!(parsed.iter().map(|b| b.line).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn bold_italic_lead_keeps_paragraph_clean() {
        let parsed = blocks("***Key idea*** plants grow");
        assert_eq!(
            parsed,
            vec![
                Block::new(BlockKind::Heading { level: 3 }, "Key idea", 1),
                Block::new(BlockKind::Paragraph, "plants grow", 1),
            ]
        );
        assert_eq!(strip_markers(&parsed[1].text), "plants grow");
    }

    #[test]
    fn rules_quotes_and_hash_headings() {
        assert_eq!(
            kinds("---\n> quoted\n## Section\n***"),
            vec![
                BlockKind::Rule,
                BlockKind::Blockquote,
                BlockKind::Heading { level: 2 },
                BlockKind::Rule,
            ]
        );
    }

    #[test]
    fn unmatched_bold_is_a_paragraph() {
        let parsed = blocks("**bold without close");
        assert_eq!(parsed[0].kind, BlockKind::Paragraph);
        assert_eq!(parsed[0].runs().len(), 1);
    }

    #[test]
    fn decimal_number_is_not_a_list_item() {
        assert_eq!(kinds("1.5 degrees of warming"), vec![BlockKind::Paragraph]);
    }
}
