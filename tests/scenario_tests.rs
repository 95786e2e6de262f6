mod common;

use common::{TestResult, generate};
use leafprint::Pipeline;
use leafprint_markup::{Block, BlockKind, ListKind, ParseEvent};

fn blocks(text: &str) -> Vec<Block> {
    Pipeline::builder()
        .build()
        .map(|p| p.parse(text))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| event.as_block().cloned())
        .collect()
}

#[test]
fn test_heading_and_paragraph_fit_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let input = "**Title**\nHello world.";
    let parsed = blocks(input);
    assert_eq!(
        parsed.iter().map(|b| (b.kind, b.text.as_str())).collect::<Vec<_>>(),
        vec![
            (BlockKind::Heading { level: 1 }, "Title"),
            (BlockKind::Paragraph, "Hello world."),
        ]
    );

    let pdf = generate(input)?;
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(pdf.page_strings(1), vec!["Title", "Hello world."]);
    Ok(())
}

#[test]
fn test_bullets_are_grouped_before_paragraph() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pipeline = Pipeline::builder().build()?;
    let events = pipeline.parse("- item one\n- item two\n\nNext paragraph");
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], ParseEvent::Block(b) if b.kind == BlockKind::BulletItem));
    assert!(matches!(&events[1], ParseEvent::Block(b) if b.kind == BlockKind::BulletItem));
    assert_eq!(events[2], ParseEvent::ListEnd(ListKind::Bullet));
    assert!(matches!(&events[3], ParseEvent::Block(b) if b.text == "Next paragraph"));

    let pdf = generate("- item one\n- item two\n\nNext paragraph")?;
    assert_eq!(pdf.page_strings(1), vec!["item one", "item two", "Next paragraph"]);
    Ok(())
}

#[test]
fn test_capitalized_numbered_title_is_heading() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let parsed = blocks("1. Climate-Related Examples:\nSome text");
    assert_eq!(parsed[0].kind, BlockKind::Heading { level: 2 });
    assert_eq!(parsed[1].kind, BlockKind::Paragraph);

    let pdf = generate("1. Climate-Related Examples:\nSome text")?;
    // Rendered as a bold heading, not as a "1." list label plus item text.
    assert_eq!(pdf.page_strings(1), vec!["1. Climate-Related Examples:", "Some text"]);
    assert_eq!(pdf.page_fonts(1).first().map(String::as_str), Some("F2"));
    Ok(())
}

#[test]
fn test_unmatched_emphasis_renders_as_plain_text() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate("**bold without close")?;
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(pdf.page_strings(1), vec!["bold without close"]);
    assert_eq!(pdf.page_fonts(1), vec!["F1"]);
    Ok(())
}

#[test]
fn test_lowercase_numbered_line_is_list_item() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate("1. measure the leaf\n2. record the result")?;
    assert_eq!(
        pdf.page_strings(1),
        vec!["1.", "measure the leaf", "2.", "record the result"]
    );
    Ok(())
}

#[test]
fn test_climate_annotation_has_bold_label() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate("**Climate Enhancement:** Warmer springs shift flowering dates.")?;
    assert_pdf_contains_text!(pdf, "Climate Enhancement: Warmer springs shift flowering dates.");
    assert_eq!(pdf.page_fonts(1), vec!["F2", "F1"]);
    Ok(())
}

#[test]
fn test_mixed_emphasis_selects_all_faces() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate("Plain **bold** *italic* ***both***")?;
    assert_pdf_contains_text!(pdf, "Plain bold italic both");
    let fonts = pdf.page_fonts(1);
    for name in ["F1", "F2", "F3", "F4"] {
        assert!(fonts.iter().any(|f| f == name), "missing {name} in {fonts:?}");
    }
    Ok(())
}

#[test]
fn test_typographic_punctuation_is_transliterated() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate("\u{201C}Carbon\u{201D} isn\u{2019}t simple\u{2026}")?;
    assert_eq!(pdf.page_strings(1), vec!["\"Carbon\" isn't simple..."]);
    Ok(())
}
