// src/document/anchors.rs
// =============================================================================
// The anchor index: every label a `#fragment` reference may land on.
//
// Sources:
// - explicit `id` / `name` attributes on <a> elements, kept verbatim
// - heading text, converted by the implicit heading id conventions that are
//   switched on in CheckerOptions (GitHub, BitBucket or both)
// =============================================================================

use std::collections::BTreeSet;

use super::markup::Markup;
use crate::options::CheckerOptions;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Characters GitHub drops from heading ids.
const GITHUB_STRIPPED: [char; 4] = [',', '.', '(', ')'];

const BITBUCKET_PREFIX: &str = "markdown-header-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorIndex {
    targets: BTreeSet<String>,
}

impl AnchorIndex {
    pub fn build(markup: &impl Markup, options: &CheckerOptions) -> Self {
        let mut targets = BTreeSet::new();

        for attr in ["id", "name"] {
            targets.extend(
                markup
                    .attribute_values("a", attr)
                    .into_iter()
                    .filter(|value| !value.is_empty()),
            );
        }

        if options.implicit_heading_id_github || options.implicit_heading_id_bitbucket {
            for heading in heading_texts(markup) {
                if options.implicit_heading_id_github {
                    targets.insert(github_heading_id(&heading));
                }
                if options.implicit_heading_id_bitbucket {
                    targets.insert(bitbucket_heading_id(&heading));
                }
            }
        }

        Self { targets }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.targets.contains(label)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

}

fn heading_texts(markup: &impl Markup) -> Vec<String> {
    HEADING_TAGS
        .iter()
        .flat_map(|tag| markup.text_contents(tag))
        .collect()
}

/// `Section (Example), v1.0` -> `section-example-v10`
pub fn github_heading_id(heading: &str) -> String {
    heading
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| !GITHUB_STRIPPED.contains(c))
        .collect()
}

/// `Data - Model` -> `markdown-header-data-model`
pub fn bitbucket_heading_id(heading: &str) -> String {
    let mut id = String::from(BITBUCKET_PREFIX);
    let mut previous_dash = false;
    for c in github_heading_id(heading).chars() {
        if c == '-' && previous_dash {
            continue;
        }
        previous_dash = c == '-';
        id.push(c);
    }
    id
}
