//! HTML string renderer for server-rendered reader pages
//!
//! Emits one `<span>` per annotated segment with the combined class list
//! and data attributes. Because every segment carries its full active set,
//! overlapping and nested annotations never require closing and reopening
//! tags the way the old string-splicing highlighter did.

use crate::models::annotation::Annotation;
use crate::renderers::segment_list::render_segments;

/// Render one line to an HTML fragment
pub fn render_line_html(text: &str, annotations: &[Annotation]) -> String {
    let mut html = String::with_capacity(text.len());

    for segment in render_segments(text, annotations) {
        if segment.classes.is_empty() {
            html.push_str(&escape_text(&segment.text));
            continue;
        }

        html.push_str("<span class=\"");
        html.push_str(&escape_attribute(&segment.classes.join(" ")));
        html.push('"');
        if let Some(tooltip) = &segment.tooltip {
            html.push_str(" title=\"");
            html.push_str(&escape_attribute(tooltip));
            html.push('"');
        }
        // Data attributes in stable name order
        let mut names: Vec<&String> = segment.dataset.keys().collect();
        names.sort();
        for name in names {
            html.push_str(" data-");
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_attribute(&segment.dataset[name]));
            html.push('"');
        }
        html.push('>');
        html.push_str(&escape_text(&segment.text));
        html.push_str("</span>");
    }

    html
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{AnnotationKind, AnnotationPayload};

    #[test]
    fn test_plain_text_is_escaped() {
        let html = render_line_html("a < b & c", &[]);
        assert_eq!(html, "a &lt; b &amp; c");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let annotations = vec![Annotation::new(
            AnnotationKind::Vocabulary,
            0,
            3,
            AnnotationPayload::Vocabulary {
                word: "foo".to_string(),
                lexical_form: "say \"foo\"".to_string(),
            },
        )];
        let html = render_line_html("foo bar", &annotations);
        assert!(html.contains("title=\"say &quot;foo&quot;\""));
        assert!(html.contains("data-lexical=\"say &quot;foo&quot;\""));
    }
}
