//! Conversion options and their defaults.

use serde::Deserialize;

use crate::error::ConvertError;

/// Hard byte budget for the serialized PDF.
pub const DEFAULT_MAX_PDF_SIZE_BYTES: usize = 1_000_000; // 1 MB

/// Standard target long-edge length in pixels for the first attempt.
pub const DEFAULT_MIN_LONG_EDGE: u32 = 1080;

/// Options controlling the resolution/quality search.
///
/// Every field has a default, so callers (including JSON ones) may override
/// each independently.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Whether the search may descend below the standard target resolution,
    /// down to the 600 px floor. Off by default; turning it on is an explicit
    /// caller escalation, never automatic.
    pub allow_lower_resolution: bool,

    /// Target long-edge length in pixels for the first ladder rung.
    pub min_long_edge: u32,

    /// Maximum acceptable serialized PDF size in bytes.
    pub max_pdf_size_bytes: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            allow_lower_resolution: false,
            min_long_edge: DEFAULT_MIN_LONG_EDGE,
            max_pdf_size_bytes: DEFAULT_MAX_PDF_SIZE_BYTES,
        }
    }
}

impl ConvertOptions {
    /// Check option invariants before any decode work starts.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.min_long_edge == 0 {
            return Err(ConvertError::InvalidOptions(
                "minLongEdge must be greater than zero".into(),
            ));
        }
        if self.max_pdf_size_bytes == 0 {
            return Err(ConvertError::InvalidOptions(
                "maxPdfSizeBytes must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
