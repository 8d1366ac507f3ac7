//! HTML metadata extraction.

use scraper::{Html, Selector};

use crate::models::PageSummary;

/// Extract title, first h1 and meta description from a response body.
///
/// html5ever error-corrects rather than failing, so malformed input can
/// never raise here; anything that does not contain the tag in question
/// simply yields an absent field. Extraction policy is first-match-wins for
/// every field.
pub fn inspect_html(body: &str) -> PageSummary {
    let document = Html::parse_document(body);

    // Selectors are static and known-good
    let title_sel = Selector::parse("title").expect("valid selector");
    let h1_sel = Selector::parse("h1").expect("valid selector");
    let meta_sel = Selector::parse(r#"meta[name="description"]"#).expect("valid selector");

    let title = document
        .select(&title_sel)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty());
    let h1 = document
        .select(&h1_sel)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty());
    let description = document
        .select(&meta_sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    PageSummary {
        title,
        h1,
        description,
    }
}

fn element_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_fields() {
        let html = r#"<html><head><title>A</title>
            <meta name="description" content="C"></head>
            <body><h1>B</h1></body></html>"#;
        let summary = inspect_html(html);
        assert_eq!(summary.title.as_deref(), Some("A"));
        assert_eq!(summary.h1.as_deref(), Some("B"));
        assert_eq!(summary.description.as_deref(), Some("C"));
    }

    #[test]
    fn first_match_wins() {
        let html = r#"<title>First</title><title>Second</title>
            <h1>One</h1><h1>Two</h1>
            <meta name="description" content="alpha">
            <meta name="description" content="beta">"#;
        let summary = inspect_html(html);
        assert_eq!(summary.title.as_deref(), Some("First"));
        assert_eq!(summary.h1.as_deref(), Some("One"));
        assert_eq!(summary.description.as_deref(), Some("alpha"));
    }

    #[test]
    fn missing_tags_yield_absent_fields() {
        let summary = inspect_html("<html><body><p>hello</p></body></html>");
        assert_eq!(summary, PageSummary::default());
    }

    #[test]
    fn empty_and_non_html_bodies_never_error() {
        assert_eq!(inspect_html(""), PageSummary::default());
        assert_eq!(inspect_html("{\"json\": true}"), PageSummary::default());
        assert_eq!(
            inspect_html("<<<>>>< not << html at all"),
            PageSummary::default()
        );
    }

    #[test]
    fn nested_markup_inside_h1_is_flattened() {
        let summary = inspect_html("<h1>Hello <em>world</em></h1>");
        assert_eq!(summary.h1.as_deref(), Some("Hello world"));
    }

    #[test]
    fn other_meta_tags_are_ignored() {
        let html = r#"<meta name="keywords" content="nope">
            <meta property="og:description" content="nope">"#;
        assert_eq!(inspect_html(html).description, None);
    }
}
