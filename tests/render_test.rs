// Rendering targets over the segment list: display-list classes,
// tooltips, and data attributes for the virtual-DOM views, and flat
// span-per-segment HTML for the server-rendered pages.

use annotator_wasm::models::story::StoryLine;
use annotator_wasm::renderers::{render_line, render_line_html};

fn sample_line() -> StoryLine {
    serde_json::from_value(serde_json::json!({
        "lineNumber": 3,
        "text": "the quick fox",
        "vocabulary": [
            {"word": "quick", "lexicalForm": "quick (adj.)", "position": [4, 9]}
        ],
        "grammar": [
            {"text": "simple clause", "position": [0, 13]}
        ]
    }))
    .unwrap()
}

#[test]
fn test_display_list_matches_overlap_case() {
    let display_list = render_line(&sample_line());

    assert_eq!(display_list.line_number, 3);
    assert_eq!(display_list.segments.len(), 3);

    let prefix = &display_list.segments[0];
    assert_eq!(prefix.text, "the ");
    assert_eq!(prefix.classes, vec!["grammar-highlight".to_string()]);
    assert!(prefix.tooltip.is_none(), "no tooltip without vocabulary");

    let word = &display_list.segments[1];
    assert_eq!(word.text, "quick");
    assert_eq!(
        word.classes,
        vec![
            "grammar-highlight".to_string(),
            "vocab-highlight".to_string()
        ],
        "combined classes for overlapping annotations"
    );
    assert_eq!(word.tooltip.as_deref(), Some("quick (adj.)"));
    assert_eq!(word.dataset.get("lexical").map(String::as_str), Some("quick (adj.)"));
    assert_eq!(
        word.dataset.get("grammar").map(String::as_str),
        Some("simple clause")
    );

    let suffix = &display_list.segments[2];
    assert_eq!(suffix.text, " fox");
    assert_eq!(suffix.classes, vec!["grammar-highlight".to_string()]);
}

#[test]
fn test_display_list_concatenates_to_line() {
    let display_list = render_line(&sample_line());
    let rebuilt: String = display_list
        .segments
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(rebuilt, "the quick fox");
}

#[test]
fn test_html_one_span_per_segment_no_reopening() {
    let line = sample_line();
    let html = render_line_html(&line.text, &line.annotations());

    // One wrapping span per annotated segment, nested spans never needed
    assert_eq!(html.matches("<span").count(), 3);
    assert_eq!(html.matches("</span>").count(), 3);
    assert!(html.contains("class=\"grammar-highlight vocab-highlight\""));
    assert!(html.contains(">quick</span>"));
    assert!(html.contains("title=\"quick (adj.)\""));
}

#[test]
fn test_html_unannotated_line_is_plain_text() {
    let html = render_line_html("hello world", &[]);
    assert_eq!(html, "hello world");
}

#[test]
fn test_html_escapes_markup_in_line_text() {
    let line: StoryLine = serde_json::from_value(serde_json::json!({
        "lineNumber": 1,
        "text": "x < y & <b>bold</b>",
        "vocabulary": [
            {"word": "bold", "lexicalForm": "bold", "position": [9, 13]}
        ]
    }))
    .unwrap();
    let html = render_line_html(&line.text, &line.annotations());

    assert!(!html.contains("<b>"), "line text must not inject markup");
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;"));
}
