// src/lib.rs
// =============================================================================
// mdlinkcheck: verifies hyperlinks, anchors and image paths in Markdown files.
//
// Modules:
// - document: Markdown loading, parsed tree, anchor index
// - checker: reference extraction and classification, reachability probes
// - discover: *.md discovery and exclude patterns
// - report: run results for the CLI
//
// The functions below are the programmatic entry points.
// =============================================================================

pub mod checker;
pub mod discover;
pub mod document;
pub mod error;
pub mod options;
pub mod report;

use std::collections::BTreeSet;
use std::path::Path;

pub use checker::{FileChecker, Reason, Verdict};
pub use error::{Error, Result};
pub use options::CheckerOptions;

/// Checks the Markdown file at `path` and returns its invalid references.
/// An empty set means every link and image is valid.
pub async fn verify(path: impl AsRef<Path>, options: CheckerOptions) -> Result<BTreeSet<String>> {
    let mut checker = FileChecker::new(path, options)?;
    checker.check_markdown().await?;
    Ok(checker.invalid_links().keys().cloned().collect())
}

/// Hyperlink and image targets of the file, as written.
pub fn extract_links(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    let checker = FileChecker::new(path, CheckerOptions::default())?;
    let mut links = checker.extract_hyperlinks();
    links.extend(checker.extract_imgs());
    Ok(links)
}

pub fn extract_hyperlinks(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(FileChecker::new(path, CheckerOptions::default())?.extract_hyperlinks())
}

pub fn extract_imgs(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(FileChecker::new(path, CheckerOptions::default())?.extract_imgs())
}
