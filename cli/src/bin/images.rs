//! pdfsift-images - extract page text and embedded images

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use pdfsift::{ExtractOptions, ExtractionResult, ImageExtractor, TextBackend, DEFAULT_OUTPUT_DIR};
use pdfsift_cli::{
    fail, page_progress, print_usage, resolve_backend, warn_ignored, BackendChoice, BACKEND_ENV,
};

#[derive(Parser)]
#[command(name = "pdfsift-images")]
#[command(version)]
#[command(about = "Extract PDF page text and embedded images to a directory", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "PDF_FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

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
        print_usage("pdfsift-images <pdf_file_path> [output_dir]");
        std::process::exit(1);
    };

    warn_ignored(&cli.ignored);
    let backend = resolve_backend(cli.backend);

    if let Err(e) = run(&input, &cli.output, backend) {
        fail(&e);
    }
}

fn run(input: &Path, output_dir: &Path, backend: TextBackend) -> pdfsift::Result<()> {
    println!("{} {}", "Extracting content from:".cyan(), input.display());

    let extractor = ImageExtractor::new(output_dir, ExtractOptions::new().with_backend(backend));
    let document = extractor.open(input)?;
    let pages = extractor.pages(document.as_ref())?;

    let pb = page_progress(u64::from(pages.page_count()));
    let mut result = ExtractionResult::new();
    for page in pages {
        let page = page?;
        pb.set_message(format!("page {}", page.page));
        result.push(page);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let result_path = extractor.write_result(&result)?;

    println!("\n{}", "Extraction complete!".green().bold());
    println!("  - Total pages: {}", result.page_count());
    println!("  - Total images: {}", result.total_images());
    println!("  - Content saved to: {}", result_path.display());
    println!(
        "  - Images saved to: {}/",
        extractor.images_dir().display()
    );

    Ok(())
}
