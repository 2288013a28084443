// src/checker/classify.rs
// =============================================================================
// Decides whether a single hyperlink or image reference is valid.
//
// Hyperlinks go through a fixed chain of checks, first match wins:
//   1. mailto:                         -> valid
//   2. existing local file             -> valid
//   3. existing local directory        -> valid with README.md, else invalid
//   4. absolute URL                    -> valid, or probed when enabled
//   5. not exactly one '#'             -> invalid
//   6. `path#anchor`                   -> anchor looked up in the current or
//                                         the linked document
//
// Images are either a local file or an absolute URL handed to the prober.
//
// Network access never happens here: URLs that need probing come back as
// `Resolution::Probe` and the caller batches them.
// =============================================================================

use std::path::Path;

use tracing::debug;

use super::file::FileChecker;
use super::resolve::{is_absolute_url, resolve_dir, resolve_file, DirLookup};
use super::verdict::{Reason, Verdict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Settled(Verdict),
    /// Verdict depends on probing this URL
    Probe(String),
}

impl Resolution {
    fn valid() -> Self {
        Resolution::Settled(Verdict::Valid)
    }

    fn invalid(reason: Reason) -> Self {
        Resolution::Settled(Verdict::Invalid(reason))
    }
}

/// `#` and `#top` jump to the top of the page.
fn is_top_of_page(anchor: &str) -> bool {
    anchor.is_empty() || anchor == "top"
}

impl FileChecker {
    pub fn classify_hyperlink(&self, href: &str) -> Resolution {
        if href.starts_with("mailto:") {
            return Resolution::valid();
        }

        let doc_dir = self.document().dir();
        if let Some(path) = resolve_file(href, doc_dir) {
            debug!("{} -> file {}", href, path.display());
            return Resolution::valid();
        }

        match resolve_dir(href, doc_dir) {
            DirLookup::Readme(readme) => {
                debug!("{} -> directory readme {}", href, readme.display());
                return Resolution::valid();
            }
            DirLookup::MissingReadme(dir) => return Resolution::invalid(Reason::MissingReadme(dir)),
            DirLookup::NotFound => {}
        }

        if is_absolute_url(href) {
            return self.remote(href);
        }

        let parts: Vec<&str> = href.split('#').collect();
        let [target_url, target_id] = parts.as_slice() else {
            if parts.len() == 1 {
                // no '#' at all: a plain path that matched nothing above
                return Resolution::invalid(Reason::MissingTarget);
            }
            return Resolution::invalid(Reason::MalformedFragment);
        };
        let target_id = target_id.to_lowercase();

        if target_url.is_empty() {
            if is_top_of_page(&target_id) || self.local_targets().contains(&target_id) {
                return Resolution::valid();
            }
            return Resolution::invalid(Reason::UnknownAnchor(target_id));
        }

        if is_absolute_url(target_url) {
            return self.remote(target_url);
        }

        self.foreign_anchor(target_url, target_id)
    }

    pub fn classify_image(&self, src: &str) -> Resolution {
        if resolve_file(src, self.document().dir()).is_some() {
            return Resolution::valid();
        }
        if is_absolute_url(src) {
            // Images always go to the prober, which passes them when
            // reachability checking is off.
            return Resolution::Probe(src.to_string());
        }
        Resolution::invalid(Reason::MissingTarget)
    }

    fn remote(&self, url: &str) -> Resolution {
        if self.options().check_url_reachable {
            Resolution::Probe(url.to_string())
        } else {
            Resolution::valid()
        }
    }

    /// `other.md#anchor` or `dir#anchor` (anchor already lowercased)
    fn foreign_anchor(&self, target_url: &str, anchor: String) -> Resolution {
        let doc_dir = self.document().dir();
        let target_file = match resolve_dir(target_url, doc_dir) {
            DirLookup::Readme(readme) => readme,
            DirLookup::MissingReadme(dir) => return Resolution::invalid(Reason::MissingReadme(dir)),
            DirLookup::NotFound => match resolve_file(target_url, doc_dir) {
                Some(file) => file,
                None => return Resolution::invalid(Reason::MissingTarget),
            },
        };

        if is_top_of_page(&anchor) {
            return Resolution::valid();
        }

        let found = if same_file(&target_file, self.document().path()) {
            self.local_targets().contains(&anchor)
        } else {
            debug!("loading {} to look up '{}'", target_file.display(), anchor);
            match FileChecker::new(&target_file, *self.options()) {
                Ok(target) => target.local_targets().contains(&anchor),
                Err(_) => return Resolution::invalid(Reason::UnreadableTarget(target_file)),
            }
        };

        if found {
            Resolution::valid()
        } else {
            Resolution::invalid(Reason::UnknownAnchorIn {
                anchor,
                file: target_file,
            })
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
