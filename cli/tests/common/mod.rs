//! PDF fixtures for the CLI tests, built with lopdf.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{dictionary, Dictionary, Object, Stream};

pub fn jpeg_bytes(seed: u8) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    data.extend(std::iter::repeat(seed).take(24));
    data.extend([0xFF, 0xD9]);
    data
}

/// Build a document where each entry is `(text, image count)`.
pub fn pdf_with_pages(pages: &[(Option<&str>, usize)]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut seed = 0u8;
    let mut kids = Vec::new();
    for (text, images) in pages {
        let mut content = String::new();
        if let Some(text) = text {
            content.push_str(&format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET\n"));
        }

        let mut xobjects = Dictionary::new();
        for i in 1..=*images {
            seed += 1;
            let image = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => Object::Integer(4),
                    "Height" => Object::Integer(4),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => Object::Integer(8),
                    "Filter" => "DCTDecode",
                },
                jpeg_bytes(seed),
            )
            .with_compression(false);
            let image_id = doc.add_object(image);
            xobjects.set(format!("Im{i}"), Object::Reference(image_id));
            content.push_str(&format!("q 50 0 0 50 72 {} cm /Im{i} Do Q\n", 60 * i));
        }

        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }

        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Page 1 with text and an image, page 2 empty, page 3 with text and an image.
pub fn three_page_atlas() -> Vec<u8> {
    pdf_with_pages(&[
        (Some("Heart anatomy"), 1),
        (None, 0),
        (Some("Lung anatomy"), 1),
    ])
}

pub fn write_pdf(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}
