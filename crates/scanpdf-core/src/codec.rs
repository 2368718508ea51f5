//! Image decode, resize, and JPEG re-encode.
//!
//! Output is always 8-bit RGB JPEG regardless of the source format. This is a
//! deliberate simplification: it guarantees a single embedding path in the PDF
//! (DeviceRGB + DCTDecode). PNG alpha is dropped by the RGB conversion.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};

use crate::error::ConvertError;

/// A decoded source image, created once per conversion request.
///
/// Holds the decoded pixels so every ladder attempt resizes from the original
/// data rather than re-decoding the source bytes.
pub struct SourceImage {
    image: DynamicImage,
    width: u32,
    height: u32,
}

/// A resized, re-encoded JPEG ready for PDF embedding.
pub struct JpegImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SourceImage {
    /// Decode JPEG or PNG bytes. Undecodable bytes or zero dimensions are an
    /// immediate precondition failure, before any ladder search.
    pub fn decode(bytes: &[u8]) -> Result<Self, ConvertError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ConvertError::InvalidImage(e.to_string()))?;
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidImage(
                "image has zero width or height".into(),
            ));
        }
        Ok(Self {
            image,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The larger of width and height.
    pub fn long_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    /// Resize so the long edge equals `target_long_edge` (short edge scaled
    /// proportionally, rounded, at least 1 px) and encode as JPEG at the given
    /// quality. Upscales as well as downscales.
    pub fn resize_to_jpeg(
        &self,
        target_long_edge: u32,
        quality: u8,
    ) -> Result<JpegImage, ConvertError> {
        let (target_width, target_height) = self.fit_dimensions(target_long_edge);

        let resized = self
            .image
            .resize_exact(target_width, target_height, image::imageops::FilterType::Lanczos3)
            .to_rgb8();

        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        resized
            .write_with_encoder(encoder)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;

        Ok(JpegImage {
            bytes: buffer.into_inner(),
            width: target_width,
            height: target_height,
        })
    }

    /// Fit-inside dimensions for a bounding box whose long side is
    /// `target_long_edge` on the image's long axis.
    fn fit_dimensions(&self, target_long_edge: u32) -> (u32, u32) {
        let target = f64::from(target_long_edge);
        if self.is_landscape() {
            let scaled = target * f64::from(self.height) / f64::from(self.width);
            (target_long_edge, (scaled.round() as u32).max(1))
        } else {
            let scaled = target * f64::from(self.width) / f64::from(self.height);
            ((scaled.round() as u32).max(1), target_long_edge)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn source_with_dims(width: u32, height: u32) -> SourceImage {
        let img = RgbImage::from_pixel(width, height, image::Rgb([128, 128, 128]));
        SourceImage {
            image: DynamicImage::ImageRgb8(img),
            width,
            height,
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let source = SourceImage::decode(&png_bytes(40, 30)).unwrap();
        assert_eq!(source.width(), 40);
        assert_eq!(source.height(), 30);
        assert_eq!(source.long_edge(), 40);
        assert!(source.is_landscape());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = SourceImage::decode(b"definitely not an image");
        assert!(matches!(result, Err(ConvertError::InvalidImage(_))));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(matches!(
            SourceImage::decode(&[]),
            Err(ConvertError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_fit_dimensions_landscape() {
        let source = source_with_dims(4000, 3000);
        assert_eq!(source.fit_dimensions(1080), (1080, 810));
    }

    #[test]
    fn test_fit_dimensions_portrait() {
        let source = source_with_dims(3000, 4000);
        assert_eq!(source.fit_dimensions(1080), (810, 1080));
    }

    #[test]
    fn test_fit_dimensions_square_upscale() {
        let source = source_with_dims(100, 100);
        assert_eq!(source.fit_dimensions(1080), (1080, 1080));
    }

    #[test]
    fn test_fit_dimensions_extreme_aspect_never_zero() {
        let source = source_with_dims(10_000, 1);
        let (w, h) = source.fit_dimensions(600);
        assert_eq!(w, 600);
        assert_eq!(h, 1);
    }

    #[test]
    fn test_resize_to_jpeg_produces_jpeg_markers() {
        let source = source_with_dims(200, 150);
        let jpeg = source.resize_to_jpeg(100, 80).unwrap();
        assert_eq!(jpeg.width, 100);
        assert_eq!(jpeg.height, 75);
        // SOI and EOI markers
        assert_eq!(&jpeg.bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg.bytes[jpeg.bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_resize_to_jpeg_upscales() {
        let source = source_with_dims(50, 100);
        let jpeg = source.resize_to_jpeg(400, 80).unwrap();
        assert_eq!(jpeg.width, 200);
        assert_eq!(jpeg.height, 400);
    }
}
