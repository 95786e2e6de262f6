use crate::fonts::FontMetrics;
use crate::text::sanitize;
use leafprint_markup::InlineRun;
use leafprint_types::{Color, FontStyle};
use std::mem;

/// A styled piece of text handed to the wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: FontStyle,
    pub color: Color,
}

impl Span {
    pub fn new(text: impl Into<String>, style: FontStyle, color: Color) -> Self {
        Self {
            text: text.into(),
            style,
            color,
        }
    }

    pub fn from_runs(runs: &[InlineRun], color: Color) -> Vec<Span> {
        runs.iter()
            .map(|run| Span::new(run.text.as_str(), run.style(), color))
            .collect()
    }
}

/// A whitespace-free unit of wrapping. One word can hold pieces of several
/// styles, as in `**bold**,`.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pieces: Vec<Span>,
}

impl Word {
    pub fn pieces(&self) -> &[Span] {
        &self.pieces
    }

    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Sanitizes the spans and splits them into words on whitespace.
pub fn split_words(spans: &[Span]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Vec<Span> = Vec::new();

    for span in spans {
        for ch in sanitize(&span.text).chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(Word {
                        pieces: mem::take(&mut current),
                    });
                }
                continue;
            }
            match current.last_mut() {
                Some(last) if last.style == span.style && last.color == span.color => {
                    last.text.push(ch)
                }
                _ => current.push(Span::new(ch.to_string(), span.style, span.color)),
            }
        }
    }
    if !current.is_empty() {
        words.push(Word { pieces: current });
    }
    words
}

/// A same-style stretch of one wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSegment {
    pub text: String,
    pub style: FontStyle,
    pub color: Color,
    /// Advance measured with this segment's own style.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub segments: Vec<StyleSegment>,
    /// Sum of the segment advances, i.e. the drawn width.
    pub width: f32,
}

impl LineLayout {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Greedy line filling.
///
/// Words are joined by single spaces and measured with the regular face,
/// so every line fits `max_width` unless it holds one word that is wider on
/// its own. `force_style` replaces the style of every segment.
pub fn break_lines(
    words: &[Word],
    metrics: &dyn FontMetrics,
    size: f32,
    max_width: f32,
    force_style: Option<FontStyle>,
) -> Vec<LineLayout> {
    let space_width = metrics.text_width(" ", FontStyle::Regular, size);
    let mut lines = Vec::new();
    let mut current_line_words: Vec<&Word> = Vec::new();
    let mut current_line_width = 0.0;

    for word in words {
        let word_width = metrics.text_width(&word.text(), FontStyle::Regular, size);
        let candidate = if current_line_words.is_empty() {
            word_width
        } else {
            current_line_width + space_width + word_width
        };

        if candidate > max_width && !current_line_words.is_empty() {
            lines.push(finalize_line(&current_line_words, metrics, size, force_style));
            current_line_words.clear();
            current_line_width = word_width;
        } else {
            current_line_width = candidate;
        }
        current_line_words.push(word);
    }

    if !current_line_words.is_empty() {
        lines.push(finalize_line(&current_line_words, metrics, size, force_style));
    }
    lines
}

fn finalize_line(
    words: &[&Word],
    metrics: &dyn FontMetrics,
    size: f32,
    force_style: Option<FontStyle>,
) -> LineLayout {
    let mut segments: Vec<StyleSegment> = Vec::new();
    let mut push = |text: &str, style: FontStyle, color: Color| {
        let style = force_style.unwrap_or(style);
        match segments.last_mut() {
            Some(last) if last.style == style && last.color == color => last.text.push_str(text),
            _ => segments.push(StyleSegment {
                text: text.to_string(),
                style,
                color,
                width: 0.0,
            }),
        }
    };

    for (index, word) in words.iter().enumerate() {
        // The joining space takes the style of the text before it.
        if let Some(prev) = index.checked_sub(1).and_then(|i| words[i].pieces.last()) {
            push(" ", prev.style, prev.color);
        }
        for piece in &word.pieces {
            push(&piece.text, piece.style, piece.color);
        }
    }

    let mut width = 0.0;
    for segment in &mut segments {
        segment.width = metrics.text_width(&segment.text, segment.style, size);
        width += segment.width;
    }
    LineLayout { segments, width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::StandardFontMetrics;

    const METRICS: StandardFontMetrics = StandardFontMetrics;

    fn words(text: &str) -> Vec<Word> {
        split_words(&[Span::new(text, FontStyle::Regular, Color::BLACK)])
    }

    #[test]
    fn lines_fit_width_measured_with_regular_face() {
        let text = "Plants absorb carbon dioxide from the atmosphere and release oxygen, \
                    which makes forests one of the most important carbon sinks on Earth. \
                    Deforestation reverses this process and accelerates warming.";
        let lines = break_lines(&words(text), &METRICS, 12.0, 200.0, None);
        assert!(lines.len() > 2);
        for line in &lines {
            let measured = METRICS.text_width(&line.text(), FontStyle::Regular, 12.0);
            assert!(measured <= 200.0, "line too wide: {:?} ({measured})", line.text());
        }
        let rejoined: Vec<String> = lines.iter().map(LineLayout::text).collect();
        assert_eq!(rejoined.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn over_long_word_gets_its_own_line() {
        let text = "short Pneumonoultramicroscopicsilicovolcanoconiosis tail";
        let lines = break_lines(&words(text), &METRICS, 12.0, 100.0, None);
        let texts: Vec<String> = lines.iter().map(LineLayout::text).collect();
        assert_eq!(
            texts,
            vec!["short", "Pneumonoultramicroscopicsilicovolcanoconiosis", "tail"]
        );
        assert!(lines[1].width > 100.0);
    }

    #[test]
    fn word_can_span_two_styles() {
        let spans = Span::from_runs(
            &[InlineRun::bold("bold"), InlineRun::regular(", then more")],
            Color::BLACK,
        );
        let parsed = split_words(&spans);
        assert_eq!(parsed[0].text(), "bold,");
        assert_eq!(parsed[0].pieces().len(), 2);

        let lines = break_lines(&parsed, &METRICS, 12.0, 468.0, None);
        assert_eq!(lines.len(), 1);
        let segments: Vec<(&str, FontStyle)> = lines[0]
            .segments
            .iter()
            .map(|s| (s.text.as_str(), s.style))
            .collect();
        assert_eq!(
            segments,
            vec![("bold", FontStyle::Bold), (", then more", FontStyle::Regular)]
        );
    }

    #[test]
    fn segment_widths_use_their_own_style() {
        let spans = Span::from_runs(
            &[InlineRun::bold("Heavy"), InlineRun::regular(" light")],
            Color::BLACK,
        );
        let lines = break_lines(&split_words(&spans), &METRICS, 12.0, 468.0, None);
        let line = &lines[0];
        assert_eq!(line.segments[0].text, "Heavy ");
        assert_eq!(
            line.segments[0].width,
            METRICS.text_width("Heavy ", FontStyle::Bold, 12.0)
        );
        assert_eq!(
            line.segments[1].width,
            METRICS.text_width("light", FontStyle::Regular, 12.0)
        );
        let total: f32 = line.segments.iter().map(|s| s.width).sum();
        assert_eq!(line.width, total);
    }

    #[test]
    fn forced_style_merges_segments() {
        let spans = Span::from_runs(
            &[InlineRun::regular("Section "), InlineRun::new("one", false, true)],
            Color::BLACK,
        );
        let lines = break_lines(&split_words(&spans), &METRICS, 16.0, 468.0, Some(FontStyle::Bold));
        assert_eq!(lines[0].segments.len(), 1);
        assert_eq!(lines[0].segments[0].style, FontStyle::Bold);
        assert_eq!(lines[0].text(), "Section one");
    }

    #[test]
    fn whitespace_only_input_produces_no_lines() {
        assert!(break_lines(&words("   \t "), &METRICS, 12.0, 468.0, None).is_empty());
    }

    #[test]
    fn unicode_is_sanitized_before_splitting() {
        let parsed = words("CO\u{2082}\u{00A0}levels \u{201C}rise\u{201D}");
        let texts: Vec<String> = parsed.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CO", "levels", "\"rise\""]);
    }
}
