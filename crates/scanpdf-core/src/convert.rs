//! The size-constrained conversion search.
//!
//! Walks the resolution/quality ladder, fully encoding a candidate PDF at
//! each step and measuring its serialized length against the byte budget.
//! There is no size estimation shortcut: PDF container overhead and JPEG
//! entropy coding make the output size non-predictable from quality and
//! resolution alone, so only produced bytes count.

use crate::codec::SourceImage;
use crate::error::ConvertError;
use crate::ladder::Ladder;
use crate::options::ConvertOptions;
use crate::page::single_page_pdf;

/// Convert a JPEG/PNG image into a single-page PDF no larger than
/// `options.max_pdf_size_bytes`.
///
/// Tries (resolution, quality) combinations best-fidelity-first: the full
/// quality sweep at the current resolution, then, when
/// `allow_lower_resolution` permits it, a geometric resolution backoff
/// bounded below by the 600 px floor. Returns the first candidate under
/// budget, or [`ConvertError::PdfTooLarge`] carrying the last attempted size
/// once the ladder is exhausted.
///
/// Each call is independent and owns all of its buffers; concurrent calls do
/// not interact.
pub fn convert_image_to_pdf(
    image_bytes: &[u8],
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    options.validate()?;
    let source = SourceImage::decode(image_bytes)?;

    let ladder = Ladder::build(source.long_edge(), options);
    let mut current_long_edge = ladder.starting_long_edge;
    let mut last_pdf_size = 0usize;

    loop {
        for &quality in ladder.quality_steps {
            let jpeg = source.resize_to_jpeg(current_long_edge, quality)?;
            let pdf = single_page_pdf(&jpeg)?;
            last_pdf_size = pdf.len();

            if pdf.len() <= options.max_pdf_size_bytes {
                return Ok(pdf);
            }
        }

        // Floor check happens before any shrink, so a rung already at or
        // below the floor gets one full quality sweep and then terminates.
        if !options.allow_lower_resolution || current_long_edge <= ladder.floor {
            return Err(ConvertError::PdfTooLarge {
                size_bytes: last_pdf_size,
                allow_lower_resolution_attempt: options.allow_lower_resolution,
            });
        }

        current_long_edge = ladder.shrink(current_long_edge);
    }
}
