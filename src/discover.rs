// src/discover.rs
// =============================================================================
// Finds the Markdown files to check.
//
// - `find_md_files` walks a directory recursively and collects `*.md`
// - `Exclusions` drops every path a user supplied regex matches at its start
// =============================================================================

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::Result;

/// All `*.md` files below `dir`, sorted.
pub fn find_md_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "md") {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[derive(Debug, Default)]
pub struct Exclusions {
    patterns: Vec<Regex>,
}

impl Exclusions {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// True when a pattern matches at the very beginning of the path.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.patterns
            .iter()
            .any(|pattern| pattern.find(&path).is_some_and(|m| m.start() == 0))
    }

    pub fn filter(&self, files: Vec<PathBuf>) -> Vec<PathBuf> {
        files.into_iter().filter(|file| !self.is_excluded(file)).collect()
    }
}
