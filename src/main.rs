// src/main.rs
// =============================================================================
// Entry point of the mdlinkcheck CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging for the requested verbosity
// 3. Collect the Markdown files (explicit files + directory search - excludes)
// 4. Check every file and print the results
// 5. Exit with proper code (0 = all valid, 1 = invalid links, 2 = error)
// =============================================================================

mod cli;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use mdlinkcheck::checker::{FileChecker, Prober};
use mdlinkcheck::discover::{find_md_files, Exclusions};
use mdlinkcheck::report::Report;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every link valid
//   Ok(1) = invalid links, unreadable files or directory, or nothing to check
//   Err   = internal error
async fn run(cli: Cli) -> Result<i32> {
    if cli.files.is_empty() && cli.dir.is_none() {
        error!("argument required: --file or --dir");
        return Ok(1);
    }

    let found = match &cli.dir {
        Some(dir) => match find_md_files(dir) {
            Ok(found) => found,
            Err(e) => {
                error!("cannot search {} for Markdown files: {}", dir.display(), e);
                return Ok(1);
            }
        },
        None => Vec::new(),
    };
    let md_files = collect_files(&cli, found)?;
    info!(
        "files to check:\n{}",
        md_files
            .iter()
            .map(|file| file.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    );

    let options = cli.options();
    let prober = Prober::new(options.check_url_reachable)?;
    let mut report = Report::new(options);

    for md_file in &md_files {
        match FileChecker::new(md_file, options) {
            Ok(mut checker) => {
                checker.check_with(&prober).await;
                report.add_checked(&checker);
            }
            Err(e) => {
                warn!("{}", e);
                report.add_unreadable(md_file, &e);
            }
        }
    }

    if cli.json || !cli.silent {
        report.print(cli.json)?;
    }

    if report.is_ok() {
        info!("links valid");
        Ok(0)
    } else {
        info!("found invalid links");
        Ok(1)
    }
}

fn collect_files(cli: &Cli, mut md_files: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    md_files.extend(cli.files.iter().cloned());

    let exclusions = Exclusions::new(&cli.excludes)?;
    Ok(exclusions.filter(md_files))
}
