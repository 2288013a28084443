// src/checker/resolve.rs
// =============================================================================
// Filesystem and URL lookups used by the classifier.
//
// A reference may be written:
// - relative to the process working directory
// - relative to the directory of the Markdown file
// - as an absolute "repository root" path (`/docs/setup.md`), which is then
//   looked up below every ancestor of the Markdown file's directory
// =============================================================================

use std::path::{Component, Path, PathBuf};

use url::Url;

pub const README: &str = "README.md";

/// Outcome of looking a reference up as a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirLookup {
    /// No candidate is a directory
    NotFound,
    /// A directory exists but none of the candidates holds a README.md
    MissingReadme(PathBuf),
    /// Path of the README.md inside the resolved directory
    Readme(PathBuf),
}

/// Resolves `target` as an existing file.
pub fn resolve_file(target: &str, doc_dir: &Path) -> Option<PathBuf> {
    resolve_file_path(Path::new(target), doc_dir)
}

fn resolve_file_path(path: &Path, doc_dir: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    if path.has_root() {
        let below_root = strip_root(path);
        let found = doc_dir
            .ancestors()
            .map(|ancestor| ancestor.join(&below_root))
            .find(|candidate| candidate.is_file());
        if found.is_some() {
            return found;
        }
    }

    let local = doc_dir.join(path);
    local.is_file().then_some(local)
}

/// Resolves `target` as an existing directory and looks for its README.md.
///
/// Candidates are tried as given, then relative to `doc_dir`. The first one
/// holding a README wins.
pub fn resolve_dir(target: &str, doc_dir: &Path) -> DirLookup {
    let given = PathBuf::from(target);
    let local = doc_dir.join(target);

    let mut lookup = DirLookup::NotFound;
    for candidate in [given, local] {
        if !candidate.is_dir() {
            continue;
        }
        if let Some(readme) = resolve_file_path(&candidate.join(README), doc_dir) {
            return DirLookup::Readme(readme);
        }
        if lookup == DirLookup::NotFound {
            lookup = DirLookup::MissingReadme(candidate);
        }
    }
    lookup
}

/// True for syntactically valid absolute URLs with a scheme and a host,
/// e.g. `https://example.com/page`. `www.example.com` is not one.
pub fn is_absolute_url(target: &str) -> bool {
    match Url::parse(target) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::Prefix(_) | Component::RootDir))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Path vs PathBuf
//    - Path is a borrowed path slice (like &str), PathBuf the owned version
//      (like String)
//    - join() always returns a new PathBuf; joining an absolute path replaces
//      the base entirely, which is why root paths are stripped first
//
// 2. What does ancestors() yield?
//    - The path itself, then each parent up to the filesystem root:
//      /a/b/c -> /a/b/c, /a/b, /a, /
//
// 3. bool::then_some
//    - `cond.then_some(value)` is Some(value) when cond is true, else None
// -----------------------------------------------------------------------------
