//! Console plumbing shared by the `pdfsift-text` and `pdfsift-images`
//! binaries.

use std::ffi::OsString;

use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsift::{Error, TextBackend};

/// Environment variable selecting the text backend.
pub const BACKEND_ENV: &str = "PDFSIFT_BACKEND";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// lopdf content-stream extraction
    Lopdf,
    /// pdf-extract (better CID font and ToUnicode support)
    PdfExtract,
}

impl From<BackendChoice> for TextBackend {
    fn from(choice: BackendChoice) -> Self {
        match choice {
            BackendChoice::Lopdf => TextBackend::Lopdf,
            BackendChoice::PdfExtract => TextBackend::PdfExtract,
        }
    }
}

/// Resolve the requested backend, reporting and exiting on failure.
pub fn resolve_backend(choice: Option<BackendChoice>) -> TextBackend {
    match TextBackend::resolve(choice.map(TextBackend::from)) {
        Ok(backend) => {
            log::debug!("Using {} text backend", backend);
            backend
        }
        Err(e) => fail(&e),
    }
}

/// Log extra command-line arguments that are not used.
pub fn warn_ignored(args: &[OsString]) {
    if !args.is_empty() {
        log::warn!("Ignoring extra arguments: {:?}", args);
    }
}

/// Print the usage line for a binary.
pub fn print_usage(usage: &str) {
    println!("{} {}", "Usage:".yellow(), usage);
}

/// Print an error, plus any guidance attached to it, to stderr.
pub fn report_error(err: &Error) {
    eprintln!("{}: {}", "Error".red().bold(), err);
    if let Some(lines) = err.guidance() {
        for line in lines {
            eprintln!("{}", line);
        }
    }
}

/// Report `err` and exit with status 1.
pub fn fail(err: &Error) -> ! {
    report_error(err);
    std::process::exit(1);
}

/// Progress bar over `pages` pages.
pub fn page_progress(pages: u64) -> ProgressBar {
    let pb = ProgressBar::new(pages);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}
