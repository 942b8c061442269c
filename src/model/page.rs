//! Page-level records.

use serde::{Deserialize, Serialize};

/// One page of text produced by the text extractor.
///
/// Only pages with non-whitespace text get a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page: u32,

    /// Raw extracted text
    pub text: String,
}

impl PageRecord {
    /// Create a new page record.
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }

    /// First `max_chars` characters of the text.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// Reference to an image file written during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// File name inside the images directory
    pub filename: String,

    /// Position of the image on its page (1-indexed)
    pub index: u32,
}

/// Text and images of one page, as produced by the combined extractor.
///
/// Unlike [`PageRecord`], a `PageContent` exists for every page, with an empty
/// `text` when the page has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page: u32,

    /// Raw extracted text, possibly empty
    pub text: String,

    /// Images written for this page, in page order
    pub images: Vec<ImageRef>,
}

impl PageContent {
    /// Create a page with no images.
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
            images: Vec::new(),
        }
    }

    /// Append an image reference.
    pub fn add_image(&mut self, image: ImageRef) {
        self.images.push(image);
    }

    /// Number of images on this page.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Full output of the combined extractor.
///
/// `total_images` is kept equal to the sum of `images.len()` over all pages;
/// pages can only be added through [`ExtractionResult::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    content: Vec<PageContent>,
    total_images: usize,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page and account for its images.
    pub fn push(&mut self, page: PageContent) {
        self.total_images += page.image_count();
        self.content.push(page);
    }

    /// Pages in document order.
    pub fn content(&self) -> &[PageContent] {
        &self.content
    }

    /// Number of pages recorded.
    pub fn page_count(&self) -> usize {
        self.content.len()
    }

    /// Number of images written across all pages.
    pub fn total_images(&self) -> usize {
        self.total_images
    }
}

impl FromIterator<PageContent> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = PageContent>>(iter: I) -> Self {
        let mut result = Self::new();
        for page in iter {
            result.push(page);
        }
        result
    }
}
