//! Backend implemented directly on top of `lopdf`.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Read};
use std::path::Path;

use flate2::read::ZlibDecoder;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use crate::error::{Error, Result};
use crate::model::EmbeddedImage;

use super::PdfBackend;

/// Form XObjects nested deeper than this are not searched for images.
const MAX_FORM_DEPTH: usize = 8;

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc))
    }

    /// Wrap an already loaded document.
    pub fn from_document(doc: LopdfDocument) -> Self {
        let pages = doc.get_pages();
        Self { doc, pages }
    }

    fn page_id(&self, page_number: u32) -> Result<ObjectId> {
        self.pages
            .get(&page_number)
            .copied()
            .ok_or(Error::PageOutOfRange(page_number, self.pages.len() as u32))
    }

    /// Follow a reference to a dictionary, or return an inline one.
    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        match obj {
            Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Resources of a page, walking up the page tree for inherited ones.
    fn page_resources(&self, page_id: ObjectId) -> Option<&Dictionary> {
        let mut current = Some(page_id);
        let mut visited = HashSet::new();

        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            let dict = self.doc.get_dictionary(id).ok()?;
            if let Some(res) = dict.get(b"Resources").ok().and_then(|o| self.resolve_dict(o)) {
                return Some(res);
            }
            current = dict.get(b"Parent").ok().and_then(|p| p.as_reference().ok());
        }

        None
    }

    fn collect_images(
        &self,
        resources: &Dictionary,
        depth: usize,
        seen: &mut HashSet<ObjectId>,
        images: &mut Vec<EmbeddedImage>,
    ) -> Result<()> {
        let Some(xobjects) = resources
            .get(b"XObject")
            .ok()
            .and_then(|o| self.resolve_dict(o))
        else {
            return Ok(());
        };

        for (name, obj) in xobjects.iter() {
            let Ok(obj_id) = obj.as_reference() else {
                continue;
            };
            if !seen.insert(obj_id) {
                continue;
            }

            let object = self.doc.get_object(obj_id).map_err(|e| {
                Error::ImageExtract(format!(
                    "XObject /{} ({} {} R): {}",
                    String::from_utf8_lossy(name),
                    obj_id.0,
                    obj_id.1,
                    e
                ))
            })?;
            let Object::Stream(stream) = object else {
                log::warn!(
                    "XObject /{} ({} {} R) is not a stream, skipping",
                    String::from_utf8_lossy(name),
                    obj_id.0,
                    obj_id.1
                );
                continue;
            };

            match stream.dict.get(b"Subtype").and_then(|s| s.as_name_str()) {
                Ok("Image") => images.push(extract_image(obj_id, stream)?),
                Ok("Form") if depth < MAX_FORM_DEPTH => {
                    if let Some(form_res) = stream
                        .dict
                        .get(b"Resources")
                        .ok()
                        .and_then(|o| self.resolve_dict(o))
                    {
                        self.collect_images(form_res, depth + 1, seen, images)?;
                    }
                }
                _ => log::debug!(
                    "Ignoring XObject /{} ({} {} R)",
                    String::from_utf8_lossy(name),
                    obj_id.0,
                    obj_id.1
                ),
            }
        }

        Ok(())
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page_number: u32) -> Result<Option<String>> {
        self.page_id(page_number)?;
        self.doc
            .extract_text(&[page_number])
            .map(Some)
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_number, e)))
    }

    fn page_images(&self, page_number: u32) -> Result<Vec<EmbeddedImage>> {
        let page_id = self.page_id(page_number)?;
        let mut images = Vec::new();

        if let Some(resources) = self.page_resources(page_id) {
            let mut seen = HashSet::new();
            self.collect_images(resources, 0, &mut seen, &mut images)?;
        }

        log::debug!("Page {}: {} image(s)", page_number, images.len());
        Ok(images)
    }
}

/// Names in the stream's /Filter entry, in application order.
fn stream_filters(stream: &Stream) -> Vec<String> {
    match stream.dict.get(b"Filter") {
        Ok(Object::Name(n)) => vec![String::from_utf8_lossy(n).to_string()],
        Ok(Object::Array(arr)) => arr
            .iter()
            .filter_map(|o| o.as_name_str().ok())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Pull the bytes of an image XObject in their native format.
///
/// Streams whose last filter is an image codec (JPEG, JPEG 2000, JBIG2, CCITT)
/// are returned encoded, after undoing any filters applied on top of the
/// codec. Everything else is fully decoded and named after its magic bytes,
/// or `raw` for bare samples.
fn extract_image(obj_id: ObjectId, stream: &Stream) -> Result<EmbeddedImage> {
    let dict = &stream.dict;
    let filters = stream_filters(stream);

    let native_ext = filters
        .last()
        .and_then(|f| EmbeddedImage::extension_for_filter(f));

    let (data, extension) = match (native_ext, filters.split_last()) {
        (Some(ext), Some((_, outer))) => (decode_filters(obj_id, stream, outer)?, ext),
        _ => {
            let decoded = decode_filters(obj_id, stream, &filters)?;
            let ext = EmbeddedImage::sniff_extension(&decoded).unwrap_or("raw");
            (decoded, ext)
        }
    };

    let mut image = EmbeddedImage::new(obj_id, data, extension);

    let width = dict.get(b"Width").ok().and_then(|w| w.as_i64().ok());
    let height = dict.get(b"Height").ok().and_then(|h| h.as_i64().ok());
    if let (Some(w), Some(h)) = (width, height) {
        image = image.with_dimensions(w as u32, h as u32);
    }

    if let Some(filter) = filters.last() {
        image = image.with_filter(filter.as_str());
    }

    Ok(image)
}

/// Apply `filters` in order to the stream's stored bytes.
///
/// FlateDecode is inflated directly; other filters go through lopdf one at a
/// time on a bare stream. Decode parameters are not applied.
fn decode_filters(obj_id: ObjectId, stream: &Stream, filters: &[String]) -> Result<Vec<u8>> {
    let mut data = stream.content.clone();

    for filter in filters {
        data = match filter.as_str() {
            "FlateDecode" | "Fl" => inflate(&data).map_err(|e| image_error(obj_id, filter, e))?,
            other => {
                let mut dict = Dictionary::new();
                dict.set("Filter", Object::Name(other.as_bytes().to_vec()));
                Stream::new(dict, data)
                    .decompressed_content()
                    .map_err(|e| image_error(obj_id, filter, e))?
            }
        };
    }

    Ok(data)
}

fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out)?;
    Ok(out)
}

fn image_error(obj_id: ObjectId, filter: &str, err: impl std::fmt::Display) -> Error {
    Error::ImageExtract(format!(
        "Image {} {} R: cannot apply {}: {}",
        obj_id.0, obj_id.1, filter, err
    ))
}
