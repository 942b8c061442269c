//! Error types for pdfsift.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::backend::TextBackend;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting content from a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the PDF or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("PDF file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested text backend was not compiled into this build.
    #[error("Text backend '{0}' is not available in this build")]
    BackendUnavailable(TextBackend),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error extracting images from PDF.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// No page of the document produced any text.
    #[error("No text could be extracted from {}", .0.display())]
    NoContent(PathBuf),

    /// Error serializing output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Install guidance for [`Error::BackendUnavailable`], one line per entry.
    pub fn guidance(&self) -> Option<Vec<String>> {
        match self {
            Error::BackendUnavailable(backend) => Some(backend.install_hint()),
            _ => None,
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(feature = "pdf-extract")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
