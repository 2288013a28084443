// src/checker/verdict.rs
// =============================================================================
// What the classifier decides about one reference.
// =============================================================================

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Reason),
}

/// Why a reference was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// No file, directory or URL matches the reference
    MissingTarget,
    /// Linked directory exists but holds no README.md
    MissingReadme(PathBuf),
    /// Several `#` in a reference that is nothing else
    MalformedFragment,
    /// Fragment not found in this document's anchor index
    UnknownAnchor(String),
    /// Fragment not found in the anchor index of another document
    UnknownAnchorIn { anchor: String, file: PathBuf },
    /// Another document holding the anchor could not be read
    UnreadableTarget(PathBuf),
    /// Reachability probe failed
    Unreachable(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingTarget => write!(f, "target not found"),
            Reason::MissingReadme(dir) => write!(f, "missing README in {}", dir.display()),
            Reason::MalformedFragment => write!(f, "malformed fragment reference"),
            Reason::UnknownAnchor(anchor) => write!(f, "anchor '{}' not found", anchor),
            Reason::UnknownAnchorIn { anchor, file } => {
                write!(f, "anchor '{}' not found in {}", anchor, file.display())
            }
            Reason::UnreadableTarget(file) => write!(f, "cannot read {}", file.display()),
            Reason::Unreachable(detail) => write!(f, "unreachable: {}", detail),
        }
    }
}
