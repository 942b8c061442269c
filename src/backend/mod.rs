//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the few PDF operations the extractors
//! need, isolating the concrete PDF crates (lopdf, pdf-extract) from the
//! extraction pipelines.
//!
//! Which text backend is used is an explicit value, [`TextBackend`], resolved
//! once at startup and handed to [`open`].

mod lopdf_backend;

#[cfg(feature = "pdf-extract")]
mod extract_backend;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::EmbeddedImage;

pub use lopdf_backend::LopdfBackend;

#[cfg(feature = "pdf-extract")]
pub use extract_backend::PdfExtractBackend;

/// Abstract interface for PDF document access.
///
/// Page numbers are 1-indexed throughout.
pub trait PdfBackend {
    /// Short backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Raw text of a page. `None` when the backend has no text for the page.
    fn page_text(&self, page_number: u32) -> Result<Option<String>>;

    /// All image XObjects reachable from a page, in resource order.
    fn page_images(&self, page_number: u32) -> Result<Vec<EmbeddedImage>>;
}

/// Library used for page text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextBackend {
    /// lopdf's content-stream text extraction (always compiled in)
    #[default]
    Lopdf,
    /// pdf-extract, which handles CID fonts and ToUnicode maps more thoroughly
    PdfExtract,
}

impl TextBackend {
    /// Every backend, in preference order.
    pub const ALL: [TextBackend; 2] = [TextBackend::Lopdf, TextBackend::PdfExtract];

    /// Name used on the command line and in messages.
    pub fn name(self) -> &'static str {
        match self {
            TextBackend::Lopdf => "lopdf",
            TextBackend::PdfExtract => "pdf-extract",
        }
    }

    /// Whether this backend was compiled into the current build.
    pub fn is_available(self) -> bool {
        match self {
            TextBackend::Lopdf => true,
            TextBackend::PdfExtract => cfg!(feature = "pdf-extract"),
        }
    }

    /// Compiled-in backends, in preference order.
    pub fn available() -> Vec<TextBackend> {
        Self::ALL
            .into_iter()
            .filter(|b| b.is_available())
            .collect()
    }

    /// Pick the backend to use for this run.
    ///
    /// An explicit request must be satisfiable; otherwise the most preferred
    /// available backend wins.
    pub fn resolve(requested: Option<TextBackend>) -> Result<TextBackend> {
        match requested {
            Some(backend) if backend.is_available() => Ok(backend),
            Some(backend) => Err(Error::BackendUnavailable(backend)),
            None => Self::available()
                .first()
                .copied()
                .ok_or(Error::BackendUnavailable(TextBackend::Lopdf)),
        }
    }

    /// Lines telling the user how to get this backend.
    pub fn install_hint(self) -> Vec<String> {
        match self {
            TextBackend::Lopdf => vec![
                "lopdf is part of every pdfsift build; reinstall with:".to_string(),
                "  cargo install pdfsift-cli".to_string(),
            ],
            TextBackend::PdfExtract => vec![
                "This build was compiled without pdf-extract. Reinstall with:".to_string(),
                "  cargo install pdfsift-cli --features pdf-extract".to_string(),
                "or".to_string(),
                "  unset PDFSIFT_BACKEND to fall back to lopdf".to_string(),
            ],
        }
    }
}

impl fmt::Display for TextBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lopdf" => Ok(TextBackend::Lopdf),
            "pdf-extract" | "pdf_extract" | "pdfextract" => Ok(TextBackend::PdfExtract),
            other => Err(format!("unknown text backend: {}", other)),
        }
    }
}

/// Open a PDF file with the given text backend.
pub fn open<P: AsRef<Path>>(path: P, backend: TextBackend) -> Result<Box<dyn PdfBackend>> {
    let path = path.as_ref();
    log::debug!("Opening {} with {} backend", path.display(), backend);

    match backend {
        TextBackend::Lopdf => Ok(Box::new(LopdfBackend::load_file(path)?)),
        #[cfg(feature = "pdf-extract")]
        TextBackend::PdfExtract => Ok(Box::new(PdfExtractBackend::load_file(path)?)),
        #[cfg(not(feature = "pdf-extract"))]
        TextBackend::PdfExtract => Err(Error::BackendUnavailable(backend)),
    }
}

/// Open an in-memory PDF with the given text backend.
pub fn open_bytes(data: &[u8], backend: TextBackend) -> Result<Box<dyn PdfBackend>> {
    match backend {
        TextBackend::Lopdf => Ok(Box::new(LopdfBackend::load_bytes(data)?)),
        #[cfg(feature = "pdf-extract")]
        TextBackend::PdfExtract => Ok(Box::new(PdfExtractBackend::load_bytes(data)?)),
        #[cfg(not(feature = "pdf-extract"))]
        TextBackend::PdfExtract => Err(Error::BackendUnavailable(backend)),
    }
}
