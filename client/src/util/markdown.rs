//! Markdown rendering for agent-written resolutions.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render model output as HTML, dropping any raw HTML it contains.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown_html("**Suggested Solution:** reset your password");
        assert!(html.contains("<strong>Suggested Solution:</strong>"));
    }

    #[test]
    fn drops_raw_html() {
        let html = render_markdown_html("hello <script>alert(1)</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_markdown_html(""), "");
    }
}
