//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

/// Description of one fixture page.
pub struct PageSpec {
    pub text: Option<&'static str>,
    pub images: usize,
}

impl PageSpec {
    pub fn text(text: &'static str, images: usize) -> Self {
        Self {
            text: Some(text),
            images,
        }
    }

    pub fn blank() -> Self {
        Self {
            text: None,
            images: 0,
        }
    }
}

/// Fake JPEG payload, unique per `seed`.
pub fn jpeg_bytes(seed: u8) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    data.extend(std::iter::repeat(seed).take(32));
    data.extend([0xFF, 0xD9]);
    data
}

pub fn jpeg_stream(seed: u8) -> Stream {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => Object::Integer(8),
        "Height" => Object::Integer(8),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => Object::Integer(8),
        "Filter" => "DCTDecode",
    };
    Stream::new(dict, jpeg_bytes(seed)).with_compression(false)
}

/// Builder for small multi-page documents.
pub struct Fixture {
    doc: Document,
    font_id: ObjectId,
    page_ids: Vec<ObjectId>,
    pages_id: ObjectId,
    next_seed: u8,
}

impl Fixture {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let pages_id = doc.new_object_id();
        Self {
            doc,
            font_id,
            page_ids: Vec::new(),
            pages_id,
            next_seed: 1,
        }
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Add an image XObject and return its id.
    pub fn add_image(&mut self) -> ObjectId {
        let seed = self.next_seed;
        self.next_seed += 1;
        self.doc.add_object(jpeg_stream(seed))
    }

    /// Add a page with raw resources and content.
    pub fn add_raw_page(&mut self, resources: Option<Dictionary>, content: String) -> ObjectId {
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(self.pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
        };
        if let Some(resources) = resources {
            page.set("Resources", resources);
        }
        let id = self.doc.add_object(page);
        self.page_ids.push(id);
        id
    }

    /// Add a page with optional text and `spec.images` distinct images.
    pub fn add_page(&mut self, spec: &PageSpec) -> ObjectId {
        let mut content = String::new();
        if let Some(text) = spec.text {
            content.push_str(&format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET\n", text));
        }

        let mut xobjects = Dictionary::new();
        for i in 1..=spec.images {
            let name = format!("Im{}", i);
            content.push_str(&format!("q 100 0 0 100 72 {} cm /{} Do Q\n", 100 * i, name));
            let id = self.add_image();
            xobjects.set(name, Object::Reference(id));
        }

        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(self.font_id) },
        };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }

        self.add_raw_page(Some(resources), content)
    }

    /// Finish the page tree, with optional inherited resources.
    pub fn build_with_resources(mut self, resources: Option<Dictionary>) -> Vec<u8> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let mut pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(self.page_ids.len() as i64),
        };
        if let Some(resources) = resources {
            pages.set("Resources", resources);
        }
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(self.pages_id),
        });
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buf = Vec::new();
        self.doc.save_to(&mut buf).unwrap();
        buf
    }

    pub fn build(self) -> Vec<u8> {
        self.build_with_resources(None)
    }
}

/// Build a document from page specs.
pub fn pdf_with_pages(pages: &[PageSpec]) -> Vec<u8> {
    let mut fixture = Fixture::new();
    for spec in pages {
        fixture.add_page(spec);
    }
    fixture.build()
}

/// Page 1 with text and one image, page 2 empty, page 3 with text and one
/// image.
pub fn three_page_atlas() -> Vec<u8> {
    pdf_with_pages(&[
        PageSpec::text("Heart anatomy", 1),
        PageSpec::blank(),
        PageSpec::text("Lung anatomy", 1),
    ])
}

/// Write `data` to `<dir>/<name>` and return the path.
pub fn write_pdf(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}
