use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Could not decode image: {0}")]
    InvalidImage(String),

    #[error("Invalid conversion options: {0}")]
    InvalidOptions(String),

    /// Every (resolution, quality) combination in the ladder produced a PDF
    /// over the byte budget. `size_bytes` is the size of the last attempt;
    /// `allow_lower_resolution_attempt` records whether the reduced-resolution
    /// path was available, letting the caller distinguish "standard path was
    /// already too big" from "tried everything, still too big".
    #[error("PDF is larger than the allowed limit ({size_bytes} bytes)")]
    PdfTooLarge {
        size_bytes: usize,
        allow_lower_resolution_attempt: bool,
    },

    #[error("JPEG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to write PDF: {0}")]
    PdfWrite(String),
}
