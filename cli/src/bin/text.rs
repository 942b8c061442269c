//! pdfsift-text - write the text of every non-empty page to JSON

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use pdfsift::{ExtractOptions, TextBackend, TextExtractor, PREVIEW_CHARS};
use pdfsift_cli::{fail, print_usage, resolve_backend, warn_ignored, BackendChoice, BACKEND_ENV};

#[derive(Parser)]
#[command(name = "pdfsift-text")]
#[command(version)]
#[command(about = "Extract the text of each PDF page to <name>_extracted.json", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "PDF_FILE")]
    input: Option<PathBuf>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<OsString>,

    /// Text extraction backend
    #[arg(long, value_enum, env = BACKEND_ENV)]
    backend: Option<BackendChoice>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        print_usage("pdfsift-text <pdf_file_path>");
        std::process::exit(1);
    };

    warn_ignored(&cli.ignored);
    let backend = resolve_backend(cli.backend);

    if let Err(e) = run(&input, backend) {
        fail(&e);
    }
}

fn run(input: &Path, backend: TextBackend) -> pdfsift::Result<()> {
    println!("{} {}", "Extracting content from:".cyan(), input.display());

    let extractor = TextExtractor::new(ExtractOptions::new().with_backend(backend));
    let output = extractor.run(input)?;

    println!(
        "{} {}",
        "Extracted content saved to:".green(),
        output.output_path.display()
    );
    println!(
        "{} {}",
        "Total pages extracted:".bold(),
        output.records.len()
    );

    if let Some(first) = output.records.first() {
        println!("\n{}", "--- Preview of first page ---".cyan().bold());
        println!("{}", first.preview(PREVIEW_CHARS));
    }

    Ok(())
}
