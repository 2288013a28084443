// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// The CLI is the only configuration layer: flags map onto CheckerOptions,
// the verbosity switches onto a tracing filter level.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use mdlinkcheck::CheckerOptions;

#[derive(Parser, Debug)]
#[command(
    name = "mdlinkcheck",
    version,
    about = "Check links, anchors and image paths in Markdown files",
    long_about = "mdlinkcheck verifies that local files and directories referenced from Markdown exist, \
                  that #anchors point at real headings or named anchors, and optionally that external \
                  URLs answer with 200 OK. Exits with 1 when anything is broken."
)]
pub struct Cli {
    /// Markdown file to check (can be repeated)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory searched recursively for *.md files
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Accept GitHub style heading anchors (`## Some Title` -> `#some-title`)
    #[arg(long)]
    pub implicit_heading_id_github: bool,

    /// Accept BitBucket style heading anchors (`#markdown-header-some-title`)
    #[arg(long)]
    pub implicit_heading_id_bitbucket: bool,

    /// Send HEAD requests to external URLs and require 200 OK
    #[arg(long)]
    pub check_url_reachable: bool,

    /// Log all messages, including resolution details
    #[arg(short = 'l', long, conflicts_with = "silent")]
    pub log_all: bool,

    /// Log errors only and skip the summary table
    #[arg(long, visible_alias = "silence")]
    pub silent: bool,

    /// Regexes applied to found files; a match at the start of the path excludes the file
    #[arg(long, num_args = 1.., value_name = "REGEX")]
    pub excludes: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn options(&self) -> CheckerOptions {
        CheckerOptions {
            implicit_heading_id_github: self.implicit_heading_id_github,
            implicit_heading_id_bitbucket: self.implicit_heading_id_bitbucket,
            check_url_reachable: self.check_url_reachable,
        }
    }

    /// Default tracing filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.log_all {
            "debug"
        } else if self.silent {
            "error"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "mdlinkcheck",
            "-f",
            "a.md",
            "--file",
            "b.md",
            "--implicit-heading-id-github",
            "--excludes",
            "vendor/",
            "build/",
        ]);
        assert_eq!(cli.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(cli.excludes, vec!["vendor/", "build/"]);
        assert_eq!(cli.options(), CheckerOptions::github());
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(Cli::parse_from(["mdlinkcheck", "-l"]).log_level(), "debug");
        assert_eq!(Cli::parse_from(["mdlinkcheck", "--silence"]).log_level(), "error");
        assert!(Cli::try_parse_from(["mdlinkcheck", "-l", "--silent"]).is_err());
    }
}
