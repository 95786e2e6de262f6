use std::borrow::Cow;

/// ASCII stand-ins for the typographic punctuation language models tend to
/// produce.
fn transliterate(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => "\"",
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => "-",
        '\u{2022}' | '\u{2023}' | '\u{2043}' => "-",
        '\u{2026}' => "...",
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => " ",
        _ => return None,
    };
    Some(replacement)
}

/// Restricts `text` to printable ASCII.
///
/// Typographic punctuation is transliterated first. Any other character
/// outside `0x20..=0x7E` becomes a space.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| (' '..='~').contains(&c)) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if (' '..='~').contains(&ch) {
            out.push(ch);
        } else if let Some(replacement) = transliterate(ch) {
            out.push_str(replacement);
        } else {
            out.push(' ');
        }
    }
    Cow::Owned(out)
}
