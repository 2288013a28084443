// src/document/markup.rs
// =============================================================================
// Markdown -> queryable element tree.
//
// pulldown-cmark renders the Markdown to HTML. Raw HTML written inside the
// Markdown (e.g. `<a name="usage"></a>`) is copied through untouched, so
// explicit anchors survive the conversion. scraper then parses the HTML into
// a tree we can query by tag.
//
// The rest of the crate only talks to the `Markup` trait, never to scraper
// directly.
// =============================================================================

use pulldown_cmark::{html, Options, Parser};
use scraper::{Html, Selector};

/// Read-only queries the checker needs from a parsed document.
pub trait Markup {
    /// Values of attribute `attr` on every element matching `tag`, in
    /// document order. Elements without the attribute are skipped.
    fn attribute_values(&self, tag: &str, attr: &str) -> Vec<String>;

    /// Text content of every element matching `tag`, with markup stripped.
    fn text_contents(&self, tag: &str) -> Vec<String>;
}

impl Markup for Html {
    fn attribute_values(&self, tag: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        self.select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(str::to_string)
            .collect()
    }

    fn text_contents(&self, tag: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        self.select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}

/// Renders Markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Renders Markdown and parses the result into an element tree.
pub fn parse_markdown(markdown: &str) -> Html {
    Html::parse_document(&markdown_to_html(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_anchor_survives_conversion() {
        let html = parse_markdown(r#"## <a name="how_to_use"></a> How to use?"#);
        assert_eq!(html.attribute_values("a", "name"), vec!["how_to_use"]);
    }

    #[test]
    fn test_heading_text_strips_tags() {
        let html = parse_markdown("# Hello *big* `world`");
        assert_eq!(html.text_contents("h1"), vec!["Hello big world"]);
    }

    #[test]
    fn test_links_and_images_rendered() {
        let html = parse_markdown("[docs](docs/README.md) ![logo](img/logo.png)");
        assert_eq!(html.attribute_values("a", "href"), vec!["docs/README.md"]);
        assert_eq!(html.attribute_values("img", "src"), vec!["img/logo.png"]);
    }

    #[test]
    fn test_code_block_content_is_not_a_link() {
        let html = parse_markdown("```\n[not a link](missing.md)\n```");
        assert!(html.attribute_values("a", "href").is_empty());
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let html = parse_markdown("# Title");
        assert!(html.text_contents("h1[").is_empty());
    }
}
