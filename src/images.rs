//! Combined extraction: page text plus every embedded image, written to an
//! output directory.
//!
//! Layout of the output directory:
//!
//! ```text
//! <output_dir>/
//! ├── extracted_content.json
//! └── images/
//!     ├── anatomy-page-1-image-1.jpg
//!     └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{self, PdfBackend};
use crate::error::Result;
use crate::input;
use crate::model::{ExtractionResult, ImageRef, PageContent};
use crate::options::{ExtractOptions, IMAGES_DIR, RESULT_FILE};
use crate::render::write_json;

/// Extracts text and images into an output directory.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    output_dir: PathBuf,
    options: ExtractOptions,
}

impl ImageExtractor {
    /// Create an extractor writing below `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, options: ExtractOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// Directory image files are written to.
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join(IMAGES_DIR)
    }

    /// Location of the JSON document.
    pub fn result_path(&self) -> PathBuf {
        self.output_dir.join(RESULT_FILE)
    }

    /// Open `pdf` with the configured backend.
    ///
    /// Fails with [`Error::FileNotFound`](crate::Error::FileNotFound) before
    /// anything is created on disk.
    pub fn open(&self, pdf: &Path) -> Result<Box<dyn PdfBackend>> {
        input::inspect(pdf)?;
        backend::open(pdf, self.options.text_backend)
    }

    /// Create the images directory (and any missing parents).
    pub fn prepare(&self) -> Result<PathBuf> {
        let images_dir = self.images_dir();
        fs::create_dir_all(&images_dir)?;
        Ok(images_dir)
    }

    /// Lazily process the pages of an opened document.
    ///
    /// Each step writes the page's images before yielding its
    /// [`PageContent`].
    pub fn pages<'a>(&'a self, backend: &'a dyn PdfBackend) -> Result<PageContents<'a>> {
        let images_dir = self.prepare()?;
        Ok(PageContents {
            backend,
            options: &self.options,
            images_dir,
            next: 1,
            count: backend.page_count(),
        })
    }

    /// Process every page of `pdf` without writing the JSON document.
    pub fn extract(&self, pdf: &Path) -> Result<ExtractionResult> {
        let backend = self.open(pdf)?;
        log::info!(
            "Extracting text and images from {} ({} pages, {} backend)",
            pdf.display(),
            backend.page_count(),
            backend.name()
        );
        let pages = self.pages(backend.as_ref())?;
        pages.collect()
    }

    /// Write `result` to [`result_path`](Self::result_path).
    pub fn write_result(&self, result: &ExtractionResult) -> Result<PathBuf> {
        let path = self.result_path();
        write_json(&path, result, self.options.json_format)?;
        Ok(path)
    }

    /// Extract `pdf` and write the JSON document.
    pub fn run(&self, pdf: &Path) -> Result<ExtractionResult> {
        let result = self.extract(pdf)?;
        self.write_result(&result)?;
        Ok(result)
    }
}

/// Lazy, page-ordered sequence of [`PageContent`], one per page.
pub struct PageContents<'a> {
    backend: &'a dyn PdfBackend,
    options: &'a ExtractOptions,
    images_dir: PathBuf,
    next: u32,
    count: u32,
}

impl PageContents<'_> {
    /// Total number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.count
    }

    fn process(&self, page: u32) -> Result<PageContent> {
        let text = self.backend.page_text(page)?.unwrap_or_default();
        let mut content = PageContent::new(page, text);

        for (i, image) in self.backend.page_images(page)?.into_iter().enumerate() {
            let index = i as u32 + 1;
            let filename = self
                .options
                .image_filename(page, index, &image.extension);
            fs::write(self.images_dir.join(&filename), &image.data)?;
            log::debug!(
                "Wrote {} ({} bytes, {}x{}, {}) from object {} {} R",
                filename,
                image.size(),
                image.width.unwrap_or(0),
                image.height.unwrap_or(0),
                image.filter.as_deref().unwrap_or("unfiltered"),
                image.object_id.0,
                image.object_id.1
            );

            content.add_image(ImageRef { filename, index });
        }

        Ok(content)
    }
}

impl Iterator for PageContents<'_> {
    type Item = Result<PageContent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.count {
            return None;
        }
        let page = self.next;
        self.next += 1;
        Some(self.process(page))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageContents<'_> {}
