// src/checker/extract.rs
// =============================================================================
// Pulls hyperlink and image targets out of a parsed document.
//
// Targets are returned exactly as written in the source. Nothing is resolved
// or normalized here; the classifier decides what each string means.
// =============================================================================

use std::collections::BTreeSet;

use crate::document::Markup;

/// Every non-empty `href` of an <a> element, except `javascript...` links.
pub fn extract_hyperlinks(markup: &impl Markup) -> BTreeSet<String> {
    markup
        .attribute_values("a", "href")
        .into_iter()
        .filter(|href| !href.is_empty())
        .filter(|href| !href.starts_with("javascript"))
        .collect()
}

/// Every non-empty `src` of an <img> element.
pub fn extract_imgs(markup: &impl Markup) -> BTreeSet<String> {
    markup
        .attribute_values("img", "src")
        .into_iter()
        .filter(|src| !src.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_markdown;

    #[test]
    fn test_named_anchor_is_not_a_link() {
        let html = parse_markdown(r#"## <a name="how_to_use"></a> How to use?"#);
        assert!(extract_hyperlinks(&html).is_empty());
    }

    #[test]
    fn test_skip_javascript_links() {
        let html = parse_markdown(
            r#"<a href="javascript:void(0)">x</a> [ok](other.md) <a href="">empty</a>"#,
        );
        let links = extract_hyperlinks(&html);
        assert_eq!(links.len(), 1);
        assert!(links.contains("other.md"));
    }

    #[test]
    fn test_javascript_filter_is_case_sensitive() {
        let html = parse_markdown(r#"<a href="JavaScript:void(0)">x</a> <a href="javascript:x">y</a>"#);
        let links = extract_hyperlinks(&html);
        assert_eq!(links.len(), 1);
        assert!(links.contains("JavaScript:void(0)"));
    }

    #[test]
    fn test_duplicates_collapse_but_variants_stay() {
        let html = parse_markdown("[a](docs/) [b](docs/) [c](docs) [d](docs#intro)");
        let links = extract_hyperlinks(&html);
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_extract_imgs_from_markdown_and_html() {
        let html = parse_markdown(
            "![one](one.png)\n\n<img src=\"two.gif\" alt=\"two\">\n\n![one again](one.png)",
        );
        let imgs = extract_imgs(&html);
        assert_eq!(imgs.len(), 2);
        assert!(imgs.contains("two.gif"));
    }

    #[test]
    fn test_mailto_is_extracted() {
        let html = parse_markdown("[mail](mailto:someone@example.com)");
        assert!(extract_hyperlinks(&html).contains("mailto:someone@example.com"));
    }
}
