// src/checker/mod.rs
// =============================================================================
// The link resolution engine.
//
// Submodules:
// - extract: pulls hyperlink / image targets out of a document
// - resolve: filesystem and URL lookups
// - classify: the per-reference decision chain
// - http: reachability probes for external URLs
// - file: FileChecker, which runs all of the above for one Markdown file
// - verdict: Valid / Invalid(reason)
// =============================================================================

mod classify;
mod extract;
mod file;
mod http;
mod resolve;
mod verdict;

pub use classify::Resolution;
pub use extract::{extract_hyperlinks, extract_imgs};
pub use file::FileChecker;
pub use http::{ProbeResult, ProbeStatus, Prober};
pub use resolve::{is_absolute_url, resolve_dir, resolve_file, DirLookup};
pub use verdict::{Reason, Verdict};
