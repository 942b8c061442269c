//! # pdfsift
//!
//! Per-page text and embedded image extraction from PDF files, serialized to
//! JSON.
//!
//! Two pipelines are provided:
//!
//! - [`TextExtractor`]: one `{page, text}` record for every page that has
//!   text, written next to the input as `<name>_extracted.json`.
//! - [`ImageExtractor`]: one record for every page with its text and the
//!   images found on it. Images are written unchanged to
//!   `<output_dir>/images/` and described in
//!   `<output_dir>/extracted_content.json`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use pdfsift::{ExtractOptions, ImageExtractor, TextBackend, TextExtractor};
//!
//! fn main() -> pdfsift::Result<()> {
//!     // Resolve the backend once, up front
//!     let backend = TextBackend::resolve(None)?;
//!     let options = ExtractOptions::new().with_backend(backend);
//!
//!     let text = TextExtractor::new(options.clone()).run(Path::new("atlas.pdf"))?;
//!     println!("{} pages -> {}", text.records.len(), text.output_path.display());
//!
//!     let result = ImageExtractor::new("extracted_content", options)
//!         .run(Path::new("atlas.pdf"))?;
//!     println!("{} images", result.total_images());
//!     Ok(())
//! }
//! ```
//!
//! PDF parsing itself is delegated to [`lopdf`] and, with the default
//! `pdf-extract` feature, to `pdf-extract`.

pub mod backend;
pub mod error;
pub mod images;
pub mod input;
pub mod model;
pub mod options;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use backend::{PdfBackend, TextBackend};
pub use error::{Error, Result};
pub use images::{ImageExtractor, PageContents};
pub use model::{EmbeddedImage, ExtractionResult, ImageRef, PageContent, PageRecord};
pub use options::{
    ExtractOptions, DEFAULT_IMAGE_PREFIX, DEFAULT_OUTPUT_DIR, IMAGES_DIR, OUTPUT_SUFFIX,
    PREVIEW_CHARS, RESULT_FILE,
};
pub use render::JsonFormat;
pub use text::{output_path_for, PageTexts, TextExtractor, TextOutput};

use std::path::Path;

/// Extract the non-empty pages of a PDF file with default options.
///
/// Nothing is written to disk.
///
/// # Example
///
/// ```no_run
/// let records = pdfsift::extract_text("document.pdf").unwrap();
/// for record in &records {
///     println!("page {}: {} chars", record.page, record.text.len());
/// }
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<Vec<PageRecord>> {
    TextExtractor::default().extract(path.as_ref())
}

/// Extract text and images of a PDF file into `output_dir` with default
/// options, including the JSON document.
///
/// # Example
///
/// ```no_run
/// let result = pdfsift::extract_with_images("document.pdf", "out").unwrap();
/// println!("{} pages, {} images", result.page_count(), result.total_images());
/// ```
pub fn extract_with_images<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    output_dir: Q,
) -> Result<ExtractionResult> {
    ImageExtractor::new(output_dir.as_ref(), ExtractOptions::default()).run(path.as_ref())
}
