//! Backend using `pdf-extract` for text and lopdf for everything else.

use std::panic::{self, UnwindSafe};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::EmbeddedImage;

use super::{LopdfBackend, PdfBackend};

/// [`PdfBackend`] whose page text comes from `pdf-extract`.
///
/// pdf-extract only offers whole-document extraction, so all pages are
/// decoded when the backend is loaded.
pub struct PdfExtractBackend {
    inner: LopdfBackend,
    pages: Vec<String>,
}

impl PdfExtractBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let inner = LopdfBackend::load_bytes(data)?;
        let pages = catch_quietly(|| pdf_extract::extract_text_from_mem_by_pages(data))
            .map_err(|_| Error::TextExtract("pdf-extract panicked while decoding".to_string()))??;

        if pages.len() as u32 != inner.page_count() {
            log::warn!(
                "pdf-extract returned {} pages, document has {}",
                pages.len(),
                inner.page_count()
            );
        }

        Ok(Self { inner, pages })
    }
}

/// Run `f`, turning a panic into `Err` without printing the panic message.
///
/// pdf-extract panics on some malformed fonts; the message goes to the debug
/// log instead of stderr.
fn catch_quietly<T>(f: impl FnOnce() -> T + UnwindSafe) -> std::thread::Result<T> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| log::debug!("pdf-extract panicked: {}", info)));
    let result = panic::catch_unwind(f);
    panic::set_hook(previous);
    result
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn page_count(&self) -> u32 {
        self.inner.page_count()
    }

    fn page_text(&self, page_number: u32) -> Result<Option<String>> {
        let count = self.page_count();
        if page_number == 0 || page_number > count {
            return Err(Error::PageOutOfRange(page_number, count));
        }
        Ok(self.pages.get(page_number as usize - 1).cloned())
    }

    fn page_images(&self, page_number: u32) -> Result<Vec<EmbeddedImage>> {
        self.inner.page_images(page_number)
    }
}
