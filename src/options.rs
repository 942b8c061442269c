//! Extraction options and configuration.

use crate::backend::TextBackend;
use crate::render::JsonFormat;

/// Output directory used by the combined extractor when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_content";

/// Subdirectory of the output directory that receives image files.
pub const IMAGES_DIR: &str = "images";

/// Name of the combined extractor's JSON document.
pub const RESULT_FILE: &str = "extracted_content.json";

/// Replaces the `.pdf` suffix in the text extractor's output path.
pub const OUTPUT_SUFFIX: &str = "_extracted.json";

/// Number of characters shown in the console preview.
pub const PREVIEW_CHARS: usize = 500;

/// Default first component of image file names.
pub const DEFAULT_IMAGE_PREFIX: &str = "anatomy";

/// Options shared by both extractors.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Backend used for page text
    pub text_backend: TextBackend,

    /// Image file names are `<prefix>-page-<N>-image-<M>.<ext>`
    pub image_prefix: String,

    /// Layout of the written JSON
    pub json_format: JsonFormat,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text backend.
    pub fn with_backend(mut self, backend: TextBackend) -> Self {
        self.text_backend = backend;
        self
    }

    /// Set the image file name prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_prefix = prefix.into();
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Write compact JSON.
    pub fn compact(mut self) -> Self {
        self.json_format = JsonFormat::Compact;
        self
    }

    /// File name for the `index`-th image on page `page`, both 1-indexed.
    pub fn image_filename(&self, page: u32, index: u32, extension: &str) -> String {
        format!(
            "{}-page-{}-image-{}.{}",
            self.image_prefix, page, index, extension
        )
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            text_backend: TextBackend::default(),
            image_prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            json_format: JsonFormat::Pretty,
        }
    }
}
