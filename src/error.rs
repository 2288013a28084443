// src/error.rs
// =============================================================================
// Errors the library can return to its callers.
//
// Invalid links are NOT errors: they are verdicts collected by the checker.
// An Error means the check itself could not run (unreadable source file,
// broken directory walk, bad exclude pattern, HTTP client setup failure).
// =============================================================================

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Markdown file could not be read
    #[error("cannot read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recursive directory search failed
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// An exclude pattern is not a valid regular expression
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The HTTP client used for reachability probes could not be built
    #[error("cannot create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
