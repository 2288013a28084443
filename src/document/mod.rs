// src/document/mod.rs
// =============================================================================
// A Markdown file loaded and parsed for checking.
//
// Submodules:
// - markup: Markdown -> HTML tree, behind the `Markup` query trait
// - anchors: the anchor index built from that tree
// =============================================================================

mod anchors;
mod markup;

use std::path::{Path, PathBuf};

use scraper::Html;
use tracing::debug;

use crate::error::{Error, Result};

pub use anchors::{bitbucket_heading_id, github_heading_id, AnchorIndex};
pub use markup::{markdown_to_html, parse_markdown, Markup};

/// One parsed Markdown file. Never modified after loading.
pub struct Document {
    path: PathBuf,
    dir: PathBuf,
    content: Html,
}

impl Document {
    /// Reads and parses the Markdown file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let markdown = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} ({} bytes)", path.display(), markdown.len());
        Ok(Self::from_markdown(path, &markdown))
    }

    /// Parses `markdown` as if it had been read from `path`. Relative
    /// references resolve against the directory of `path`.
    pub fn from_markdown(path: impl AsRef<Path>, markdown: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        let dir = absolute_parent(&path);
        Self {
            path,
            dir,
            content: parse_markdown(markdown),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory containing the file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn markup(&self) -> &impl Markup {
        &self.content
    }
}

fn absolute_parent(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if parent.is_absolute() {
        return parent.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(parent),
        Err(_) => parent.to_path_buf(),
    }
}
