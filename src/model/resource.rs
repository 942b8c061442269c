//! Embedded images as reported by a backend.

/// An image XObject pulled out of a page.
///
/// Holds the bytes exactly as the backend produced them; writing them to disk
/// must not re-encode anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    /// PDF object id of the image stream
    pub object_id: (u32, u16),

    /// Raw image bytes
    pub data: Vec<u8>,

    /// Native file extension without the dot (e.g. "jpg", "png", "raw")
    pub extension: String,

    /// Width in pixels
    pub width: Option<u32>,

    /// Height in pixels
    pub height: Option<u32>,

    /// Last filter in the stream's filter chain (e.g. "DCTDecode")
    pub filter: Option<String>,
}

impl EmbeddedImage {
    /// Create a new image with the given bytes and extension.
    pub fn new(object_id: (u32, u16), data: Vec<u8>, extension: impl Into<String>) -> Self {
        Self {
            object_id,
            data,
            extension: extension.into(),
            width: None,
            height: None,
            filter: None,
        }
    }

    /// Set image dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the filter name.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Extension for filters whose encoded stream is already a standalone
    /// image file. `None` means the stream has to be decoded first.
    pub fn extension_for_filter(filter: &str) -> Option<&'static str> {
        match filter {
            "DCTDecode" | "DCT" => Some("jpg"),
            "JPXDecode" => Some("jp2"),
            "JBIG2Decode" => Some("jb2"),
            "CCITTFaxDecode" | "CCF" => Some("ccitt"),
            _ => None,
        }
    }

    /// Detect a file extension from magic bytes.
    pub fn sniff_extension(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("jpg");
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("png");
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("gif");
        }

        // TIFF, little- and big-endian
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some("tiff");
        }

        if data.starts_with(b"BM") {
            return Some("bmp");
        }

        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some("webp");
        }

        // JPEG 2000: 00 00 00 0C 6A 50 20 20
        if data.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20]) {
            return Some("jp2");
        }

        None
    }
}
