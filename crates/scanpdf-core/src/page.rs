//! Minimal single-page PDF authoring.
//!
//! Builds a document whose one page is sized exactly to the embedded JPEG's
//! pixel dimensions (1 PDF unit = 1 pixel, no DPI scaling) with the image
//! drawn full-bleed. The JPEG stream is embedded as-is under DCTDecode; the
//! codec always hands over RGB8-sourced JPEG, so the color space is always
//! DeviceRGB.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

use crate::codec::JpegImage;
use crate::error::ConvertError;

/// Build a one-page PDF embedding `jpeg` and serialize it to bytes.
pub fn single_page_pdf(jpeg: &JpegImage) -> Result<Vec<u8>, ConvertError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(jpeg.width as i64)),
        ("Height", Object::Integer(jpeg.height as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);
    // Already entropy-coded; doc.compress() must not flate it again.
    let image_stream = Stream::new(image_dict, jpeg.bytes.clone()).with_compression(false);
    let image_id = doc.add_object(image_stream);

    let resources = Dictionary::from_iter(vec![(
        "XObject",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "Im0",
            Object::Reference(image_id),
        )])),
    )]);

    // Scale the unit image square to the full page: q w 0 0 h 0 0 cm /Im0 Do Q
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(jpeg.width as i64),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(jpeg.height as i64),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content
        .encode()
        .map_err(|e| ConvertError::PdfWrite(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let page = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(jpeg.width as i64),
                Object::Integer(jpeg.height as i64),
            ]),
        ),
        ("Contents", Object::Reference(content_id)),
        ("Resources", Object::Dictionary(resources)),
    ]);
    let page_id = doc.add_object(page);

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(1)),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ConvertError::PdfWrite(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::jpeg::JpegEncoder;
    use image::RgbImage;
    use std::io::Cursor;

    fn test_jpeg(width: u32, height: u32) -> JpegImage {
        let img = RgbImage::from_pixel(width, height, image::Rgb([200, 100, 50]));
        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, 80);
        img.write_with_encoder(encoder).unwrap();
        JpegImage {
            bytes: buffer.into_inner(),
            width,
            height,
        }
    }

    #[test]
    fn test_output_parses_with_one_page() {
        let pdf = single_page_pdf(&test_jpeg(120, 80)).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_page_sized_to_pixels() {
        let pdf = single_page_pdf(&test_jpeg(120, 80)).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box[2].as_i64().unwrap(), 120);
        assert_eq!(media_box[3].as_i64().unwrap(), 80);
    }

    #[test]
    fn test_jpeg_embedded_verbatim_with_dct_filter() {
        let jpeg = test_jpeg(60, 40);
        let pdf = single_page_pdf(&jpeg).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();

        let image_stream = doc
            .objects
            .values()
            .find_map(|obj| match obj {
                Object::Stream(s)
                    if s.dict.get(b"Subtype").ok().and_then(|o| o.as_name().ok())
                        == Some(b"Image".as_slice()) =>
                {
                    Some(s)
                }
                _ => None,
            })
            .expect("image XObject present");

        assert_eq!(
            image_stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"DCTDecode"
        );
        assert_eq!(image_stream.content, jpeg.bytes);
    }

    #[test]
    fn test_starts_with_pdf_header() {
        let pdf = single_page_pdf(&test_jpeg(10, 10)).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }
}
