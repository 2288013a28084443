// src/checker/file.rs
// =============================================================================
// Checks every reference of one Markdown file.
//
// How it works:
// 1. Extract hyperlinks and images from the parsed document
// 2. Classify each of them against the filesystem and the anchor index
// 3. Probe the URLs that still need a network answer (concurrently)
// 4. Sort every reference into the valid or invalid set
//
// The anchor index is built the first time a fragment needs it and then
// kept for as long as this checker lives.
// =============================================================================

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use super::classify::Resolution;
use super::extract;
use super::http::Prober;
use super::verdict::{Reason, Verdict};
use crate::document::{AnchorIndex, Document};
use crate::error::Result;
use crate::options::CheckerOptions;

pub struct FileChecker {
    document: Document,
    options: CheckerOptions,
    local_targets: OnceCell<AnchorIndex>,
    valid_links: BTreeSet<String>,
    invalid_links: BTreeMap<String, Reason>,
}

impl FileChecker {
    /// Loads and parses the Markdown file at `path`.
    pub fn new(path: impl AsRef<Path>, options: CheckerOptions) -> Result<Self> {
        Ok(Self::from_document(Document::load(path)?, options))
    }

    pub fn from_document(document: Document, options: CheckerOptions) -> Self {
        Self {
            document,
            options,
            local_targets: OnceCell::new(),
            valid_links: BTreeSet::new(),
            invalid_links: BTreeMap::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    pub fn extract_hyperlinks(&self) -> BTreeSet<String> {
        extract::extract_hyperlinks(self.document.markup())
    }

    pub fn extract_imgs(&self) -> BTreeSet<String> {
        extract::extract_imgs(self.document.markup())
    }

    /// Anchor index of this document, built on first use.
    pub fn local_targets(&self) -> &AnchorIndex {
        self.local_targets
            .get_or_init(|| AnchorIndex::build(self.document.markup(), &self.options))
    }

    /// Checks all references, probing URLs with a prober built from the
    /// checker's options. Returns `true` when nothing is invalid.
    pub async fn check_markdown(&mut self) -> Result<bool> {
        let prober = Prober::new(self.options.check_url_reachable)?;
        Ok(self.check_with(&prober).await)
    }

    /// Same as `check_markdown`, with a prober shared across files.
    pub async fn check_with(&mut self, prober: &Prober) -> bool {
        self.valid_links.clear();
        self.invalid_links.clear();

        // probe url -> references waiting for its answer
        let mut pending: BTreeMap<String, Vec<(Kind, String)>> = BTreeMap::new();

        for href in self.extract_hyperlinks() {
            match self.classify_hyperlink(&href) {
                Resolution::Settled(verdict) => self.record(Kind::Link, href, verdict),
                Resolution::Probe(url) => pending.entry(url).or_default().push((Kind::Link, href)),
            }
        }
        for src in self.extract_imgs() {
            match self.classify_image(&src) {
                Resolution::Settled(verdict) => self.record(Kind::Image, src, verdict),
                Resolution::Probe(url) => pending.entry(url).or_default().push((Kind::Image, src)),
            }
        }

        if !pending.is_empty() {
            if prober.is_enabled() {
                debug!(
                    "probing {} url(s) from {}",
                    pending.len(),
                    self.document.path().display()
                );
            }
            let urls = pending.keys().cloned().collect();
            for result in prober.probe_all(urls).await {
                let verdict = if result.is_ok() {
                    Verdict::Valid
                } else {
                    Verdict::Invalid(Reason::Unreachable(result.describe()))
                };
                for (kind, reference) in pending.remove(&result.url).unwrap_or_default() {
                    self.record(kind, reference, verdict.clone());
                }
            }
        }

        debug!(
            "{}: {} valid, {} invalid",
            self.document.path().display(),
            self.valid_links.len(),
            self.invalid_links.len()
        );
        self.invalid_links.is_empty()
    }

    pub fn valid_links(&self) -> &BTreeSet<String> {
        &self.valid_links
    }

    /// Invalid references with the reason each one was rejected
    pub fn invalid_links(&self) -> &BTreeMap<String, Reason> {
        &self.invalid_links
    }

    fn record(&mut self, kind: Kind, reference: String, verdict: Verdict) {
        match verdict {
            Verdict::Valid => {
                self.valid_links.insert(reference);
            }
            Verdict::Invalid(reason) => {
                warn!(
                    "invalid {}: {} in {} ({})",
                    kind.label(),
                    reference,
                    self.document.path().display(),
                    reason
                );
                self.invalid_links.insert(reference, reason);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Link,
    Image,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Link => "link",
            Kind::Image => "path",
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is OnceCell?
//    - A slot that starts empty and can be filled exactly once
//    - get_or_init() runs the closure on the first call only; later calls
//      hand back a reference to the stored value
//    - It works through &self, so local_targets() does not need &mut self
//
// 2. Why BTreeSet / BTreeMap instead of HashSet / HashMap?
//    - They iterate in sorted order, so two runs over the same file print
//      and serialize their results identically
//
// 3. Why collect the URLs before probing?
//    - The same URL may be referenced several times; it is probed once
//    - All probes for a file run together instead of one after another
// -----------------------------------------------------------------------------
