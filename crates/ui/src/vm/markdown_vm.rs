use std::collections::{HashMap, HashSet};

/// Render bundled page content or a record description to safe HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "p", "br", "hr", "em", "strong", "del", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href", "title"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Scorecard](javascript:alert(1))");
        assert!(html.contains("Scorecard"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn headings_and_tables_survive() {
        let html = markdown_to_html("## Fixtures\n\n| Team | Runs |\n|---|---|\n| AUS | 310 |\n");
        assert!(html.contains("<h2>Fixtures</h2>"), "{html}");
        assert!(html.contains("<td>310</td>"), "{html}");
    }

    #[test]
    fn scripts_and_images_are_dropped() {
        let html = sanitize_html("<p>Hi</p><script>alert(1)</script><img src=x>");
        assert_eq!(html, "<p>Hi</p>");
    }
}
