//! Size-constrained image-to-PDF conversion.
//!
//! Converts a single photographed document (JPEG/PNG) into a single-page PDF
//! no larger than a fixed byte budget, trading spatial resolution and JPEG
//! quality to meet it. The search walks a resolution/quality ladder
//! best-fidelity-first and measures every fully serialized candidate against
//! the budget; see [`convert_image_to_pdf`].
//!
//! The crate is pure and synchronous: all inputs and outputs are in-memory
//! buffers, nothing is cached across calls, and concurrent conversions do not
//! interact.

pub mod codec;
pub mod convert;
pub mod error;
pub mod ladder;
pub mod options;
pub mod page;

pub use convert::convert_image_to_pdf;
pub use error::ConvertError;
pub use ladder::MIN_LONG_EDGE_WHEN_REDUCED;
pub use options::{ConvertOptions, DEFAULT_MAX_PDF_SIZE_BYTES, DEFAULT_MIN_LONG_EDGE};

/// Media types the conversion accepts. The encoder itself always embeds JPEG
/// internally; this gate exists for callers fronting the converter.
pub fn is_supported_media_type(mime: &str) -> bool {
    matches!(mime, "image/jpeg" | "image/png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_media_types() {
        assert!(is_supported_media_type("image/jpeg"));
        assert!(is_supported_media_type("image/png"));
    }

    #[test]
    fn test_unsupported_media_types() {
        assert!(!is_supported_media_type("image/webp"));
        assert!(!is_supported_media_type("application/pdf"));
        assert!(!is_supported_media_type("image/JPEG"));
        assert!(!is_supported_media_type(""));
    }
}
