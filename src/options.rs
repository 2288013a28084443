// src/options.rs
// =============================================================================
// Options recognized by the checker. All of them are off by default.
// =============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerOptions {
    /// Derive anchors from headings the way GitHub renders them
    pub implicit_heading_id_github: bool,
    /// Derive anchors from headings the way BitBucket renders them
    pub implicit_heading_id_bitbucket: bool,
    /// Issue HEAD requests against external URLs
    pub check_url_reachable: bool,
}

impl CheckerOptions {
    pub fn github() -> Self {
        Self {
            implicit_heading_id_github: true,
            ..Self::default()
        }
    }

    pub fn bitbucket() -> Self {
        Self {
            implicit_heading_id_bitbucket: true,
            ..Self::default()
        }
    }

    pub fn reachable(mut self, check: bool) -> Self {
        self.check_url_reachable = check;
        self
    }
}
