//! Inline emphasis formatting.
//!
//! A line's text is tokenized once into a flat stream of text and marker
//! tokens, markers are paired in a fixed precedence order, and the paired
//! markers are then replayed to assign a style to every text fragment.

use leafprint_types::FontStyle;

/// A contiguous fragment of a block's text sharing one emphasis style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl InlineRun {
    pub fn new(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    pub fn regular(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true, false)
    }

    pub fn style(&self) -> FontStyle {
        FontStyle::from_flags(self.bold, self.italic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// `***`
    BoldItalic,
    /// `**`
    Bold,
    /// `*`
    Italic,
    /// `~~`, stripped without any style.
    Strike,
}

impl Marker {
    const PRECEDENCE: [Marker; 4] = [Marker::BoldItalic, Marker::Bold, Marker::Italic, Marker::Strike];

    fn literal(self) -> &'static str {
        match self {
            Marker::BoldItalic => "***",
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Strike => "~~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Marker {
        kind: Marker,
        can_open: bool,
        can_close: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Open,
    Close,
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let len = match bytes[i] {
            b'*' => bytes[i..].iter().take_while(|&&b| b == b'*').count().min(3),
            b'~' if bytes.get(i + 1) == Some(&b'~') => 2,
            _ => 0,
        };
        if len == 0 {
            i += 1;
            continue;
        }

        if text_start < i {
            tokens.push(Token::Text(&line[text_start..i]));
        }
        let kind = match (bytes[i], len) {
            (b'~', _) => Marker::Strike,
            (_, 3) => Marker::BoldItalic,
            (_, 2) => Marker::Bold,
            _ => Marker::Italic,
        };
        let before = line[..i].chars().next_back();
        let after = line[i + len..].chars().next();
        tokens.push(Token::Marker {
            kind,
            can_open: after.is_some_and(|c| !c.is_whitespace()),
            can_close: before.is_some_and(|c| !c.is_whitespace()),
        });
        i += len;
        text_start = i;
    }

    if text_start < line.len() {
        tokens.push(Token::Text(&line[text_start..]));
    }
    tokens
}

/// Pairs each opener with the nearest following unpaired closer of the same
/// kind, one marker kind at a time in precedence order.
fn pair_markers(tokens: &[Token<'_>]) -> Vec<Option<Role>> {
    let mut roles = vec![None; tokens.len()];

    for kind in Marker::PRECEDENCE {
        let mut i = 0;
        while i < tokens.len() {
            let opens = matches!(
                tokens[i],
                Token::Marker { kind: k, can_open: true, .. } if k == kind
            );
            if opens && roles[i].is_none() {
                let closer = (i + 1..tokens.len()).find(|&j| {
                    roles[j].is_none()
                        && matches!(
                            tokens[j],
                            Token::Marker { kind: k, can_close: true, .. } if k == kind
                        )
                });
                if let Some(j) = closer {
                    roles[i] = Some(Role::Open);
                    roles[j] = Some(Role::Close);
                    i = j + 1;
                    continue;
                }
            }
            i += 1;
        }
    }
    roles
}

fn push_run(runs: &mut Vec<InlineRun>, text: &str, bold: bool, italic: bool) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.bold == bold && last.italic == italic => last.text.push_str(text),
        _ => runs.push(InlineRun::new(text, bold, italic)),
    }
}

/// Splits `line` into styled runs with all emphasis markers removed.
///
/// Markers surrounded by whitespace on both sides (`2 * 3`) are kept as
/// literal text. Markers that could open or close but found no partner are
/// dropped, leaving their text regular.
pub fn format_runs(line: &str) -> Vec<InlineRun> {
    let tokens = tokenize(line);
    let roles = pair_markers(&tokens);

    let mut runs = Vec::new();
    let mut bold_depth = 0usize;
    let mut italic_depth = 0usize;

    for (token, role) in tokens.iter().zip(&roles) {
        let (bold, italic) = (bold_depth > 0, italic_depth > 0);
        match (*token, *role) {
            (Token::Text(text), _) => push_run(&mut runs, text, bold, italic),
            (Token::Marker { kind, .. }, Some(role)) => {
                let (b, i) = match kind {
                    Marker::BoldItalic => (1, 1),
                    Marker::Bold => (1, 0),
                    Marker::Italic => (0, 1),
                    Marker::Strike => (0, 0),
                };
                if role == Role::Open {
                    bold_depth += b;
                    italic_depth += i;
                } else {
                    bold_depth = bold_depth.saturating_sub(b);
                    italic_depth = italic_depth.saturating_sub(i);
                }
            }
            (
                Token::Marker {
                    kind,
                    can_open: false,
                    can_close: false,
                },
                None,
            ) => push_run(&mut runs, kind.literal(), bold, italic),
            (Token::Marker { .. }, None) => {}
        }
    }
    runs
}

/// The visible text of `line`: exactly the concatenation of
/// [`format_runs`]' fragments.
pub fn strip_markers(line: &str) -> String {
    format_runs(line).into_iter().map(|run| run.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_regular_run() {
        assert_eq!(format_runs("Hello world."), vec![InlineRun::regular("Hello world.")]);
    }

    #[test]
    fn bold_and_italic_runs() {
        let runs = format_runs("A **bold** and *italic* word");
        assert_eq!(
            runs,
            vec![
                InlineRun::regular("A "),
                InlineRun::bold("bold"),
                InlineRun::regular(" and "),
                InlineRun::new("italic", false, true),
                InlineRun::regular(" word"),
            ]
        );
    }

    #[test]
    fn triple_asterisk_is_bold_italic() {
        let runs = format_runs("***both*** after");
        assert_eq!(runs[0], InlineRun::new("both", true, true));
        assert_eq!(runs[0].style(), FontStyle::BoldItalic);
        assert_eq!(runs[1], InlineRun::regular(" after"));
    }

    #[test]
    fn italic_inside_bold_combines() {
        let runs = format_runs("**bold *and italic* text**");
        assert_eq!(
            runs,
            vec![
                InlineRun::bold("bold "),
                InlineRun::new("and italic", true, true),
                InlineRun::bold(" text"),
            ]
        );
    }

    #[test]
    fn strikethrough_is_stripped_to_plain_text() {
        assert_eq!(format_runs("keep ~~this~~ plain"), vec![InlineRun::regular("keep this plain")]);
    }

    #[test]
    fn unmatched_marker_falls_back_to_regular() {
        assert_eq!(
            format_runs("**bold without close"),
            vec![InlineRun::regular("bold without close")]
        );
    }

    #[test]
    fn spaced_asterisks_stay_literal() {
        assert_eq!(format_runs("2 * 3 * 4"), vec![InlineRun::regular("2 * 3 * 4")]);
    }

    #[test]
    fn single_tilde_is_text() {
        assert_eq!(format_runs("about ~5 degrees"), vec![InlineRun::regular("about ~5 degrees")]);
    }

    #[test]
    fn stripped_text_is_the_visible_text() {
        let samples = [
            ("**Heading** then *some* text", "Heading then some text"),
            ("***a*** **b** *c* ~~d~~", "a b c d"),
            ("**unclosed and *closed*", "unclosed and closed"),
            ("odd ** spacing ** here", "odd ** spacing ** here"),
            ("non-ascii *\u{e9}mphasis* works", "non-ascii \u{e9}mphasis works"),
        ];
        for (sample, visible) in samples {
            assert_eq!(strip_markers(sample), visible, "sample: {sample}");
            let joined: String = format_runs(sample).iter().map(|r| r.text.as_str()).collect();
            assert_eq!(joined, visible, "sample: {sample}");
        }
    }

    #[test]
    fn marker_run_longer_than_three() {
        // `****` tokenizes as `***` + `*`, neither of which can pair.
        assert_eq!(format_runs("****"), Vec::<InlineRun>::new());
    }
}
