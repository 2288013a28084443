// src/report.rs
// =============================================================================
// Collects per-file results of a run and prints them, either as a table for
// humans or as JSON for tools.
// =============================================================================

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::FileChecker;
use crate::options::CheckerOptions;

#[derive(Debug, Serialize)]
pub struct InvalidLink {
    pub link: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Set when the file itself could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub valid: usize,
    pub invalid: Vec<InvalidLink>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.invalid.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub options: CheckerOptions,
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn new(options: CheckerOptions) -> Self {
        Self {
            options,
            files: Vec::new(),
        }
    }

    pub fn add_checked(&mut self, checker: &FileChecker) {
        let invalid = checker
            .invalid_links()
            .iter()
            .map(|(link, reason)| InvalidLink {
                link: link.clone(),
                reason: reason.to_string(),
            })
            .collect();
        self.files.push(FileReport {
            path: checker.document().path().to_path_buf(),
            error: None,
            valid: checker.valid_links().len(),
            invalid,
        });
    }

    pub fn add_unreadable(&mut self, path: &Path, error: impl ToString) {
        self.files.push(FileReport {
            path: path.to_path_buf(),
            error: Some(error.to_string()),
            valid: 0,
            invalid: Vec::new(),
        });
    }

    pub fn is_ok(&self) -> bool {
        self.files.iter().all(FileReport::is_ok)
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().map(|file| file.invalid.len()).sum()
    }

    pub fn print(&self, json: bool) -> serde_json::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            self.print_table();
        }
        Ok(())
    }

    fn print_table(&self) {
        let failing: Vec<&FileReport> = self.files.iter().filter(|file| !file.is_ok()).collect();

        if !failing.is_empty() {
            println!("{:<40} {:<40} {}", "FILE", "LINK", "REASON");
            println!("{}", "=".repeat(110));
            for file in &failing {
                let path = truncate(&file.path.display().to_string(), 37);
                if let Some(error) = &file.error {
                    println!("{:<40} {:<40} {}", path, "-", error);
                }
                for invalid in &file.invalid {
                    println!("{:<40} {:<40} {}", path, truncate(&invalid.link, 37), invalid.reason);
                }
            }
            println!();
        }

        let valid: usize = self.files.iter().map(|file| file.valid).sum();
        println!("Summary:");
        println!("   files checked: {}", self.files.len());
        println!("   valid links:   {}", valid);
        println!("   invalid links: {}", self.invalid_count());
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[tokio::test]
    async fn test_report_collects_invalid_links() {
        let document = Document::from_markdown("/nonexistent/page.md", "[x](#nowhere) [y](#top)");
        let mut checker = FileChecker::from_document(document, CheckerOptions::default());
        checker.check_markdown().await.unwrap();

        let mut report = Report::new(CheckerOptions::default());
        report.add_checked(&checker);
        assert!(!report.is_ok());
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.files[0].valid, 1);
        assert_eq!(report.files[0].invalid[0].link, "#nowhere");
    }

    #[test]
    fn test_unreadable_file_fails_report() {
        let mut report = Report::new(CheckerOptions::default());
        report.add_unreadable(Path::new("gone.md"), "cannot read gone.md");
        assert!(!report.is_ok());
        assert_eq!(report.invalid_count(), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0]["error"], "cannot read gone.md");
        assert_eq!(json["options"]["check_url_reachable"], false);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
