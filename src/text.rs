//! Text-only extraction: one `{page, text}` record per page with text.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::backend::{self, PdfBackend};
use crate::error::{Error, Result};
use crate::input;
use crate::model::PageRecord;
use crate::options::{ExtractOptions, OUTPUT_SUFFIX};
use crate::render::write_json;

/// Lazy, page-ordered sequence of [`PageRecord`]s.
///
/// Pages whose text is absent or whitespace-only are skipped; the page
/// number always reflects the page's position in the document.
pub struct PageTexts<'a> {
    backend: &'a dyn PdfBackend,
    next: u32,
    count: u32,
}

impl<'a> PageTexts<'a> {
    /// Iterate over every page of `backend`.
    pub fn new(backend: &'a dyn PdfBackend) -> Self {
        Self {
            backend,
            next: 1,
            count: backend.page_count(),
        }
    }
}

impl Iterator for PageTexts<'_> {
    type Item = Result<PageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next <= self.count {
            let page = self.next;
            self.next += 1;

            match self.backend.page_text(page) {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    return Some(Ok(PageRecord::new(page, text)));
                }
                Ok(_) => log::debug!("Page {} has no text, skipping", page),
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.next) as usize;
        (0, Some(remaining))
    }
}

/// Where the text extractor writes its JSON for `input`.
///
/// A `.pdf` extension (any case) is replaced by `_extracted.json`; any other
/// file name gets `_extracted.json` appended, so the input is never the
/// output. Only the final path component is touched.
pub fn output_path_for(input: &Path) -> PathBuf {
    let is_pdf = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let base = if is_pdf {
        input.file_stem()
    } else {
        input.file_name()
    };

    match base {
        Some(base) => {
            let mut name = base.to_os_string();
            name.push(OUTPUT_SUFFIX);
            input.with_file_name(name)
        }
        None => {
            let mut path = OsString::from(input.as_os_str());
            path.push(OUTPUT_SUFFIX);
            PathBuf::from(path)
        }
    }
}

/// Outcome of a successful text extraction run.
#[derive(Debug, Clone)]
pub struct TextOutput {
    /// Records written, in page order
    pub records: Vec<PageRecord>,
    /// Location of the JSON file
    pub output_path: PathBuf,
}

/// Extracts page text and writes it next to the input file.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract all non-empty pages of `path`.
    pub fn extract(&self, path: &Path) -> Result<Vec<PageRecord>> {
        input::inspect(path)?;
        let backend = backend::open(path, self.options.text_backend)?;
        log::info!(
            "Extracting text from {} ({} pages, {} backend)",
            path.display(),
            backend.page_count(),
            backend.name()
        );
        let pages = PageTexts::new(backend.as_ref());
        pages.collect()
    }

    /// Extract `path` and write the records to [`output_path_for`]`(path)`.
    ///
    /// Nothing is written when no page has text.
    pub fn run(&self, path: &Path) -> Result<TextOutput> {
        let records = self.extract(path)?;
        if records.is_empty() {
            return Err(Error::NoContent(path.to_path_buf()));
        }

        let output_path = output_path_for(path);
        write_json(&output_path, &records, self.options.json_format)?;

        Ok(TextOutput {
            records,
            output_path,
        })
    }
}
