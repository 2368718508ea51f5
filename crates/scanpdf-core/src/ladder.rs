//! Resolution/quality ladder construction.
//!
//! The ladder is the ordered sequence of (long edge, quality) attempts the
//! search walks through. This module computes its starting point, lower bound,
//! and quality sequence as a pure function of the source's natural long edge
//! and the options; the search loop in [`crate::convert`] walks it.

use crate::options::ConvertOptions;

/// Lower bound on the long edge when reduced resolution is allowed.
pub const MIN_LONG_EDGE_WHEN_REDUCED: u32 = 600;

/// Factor applied to the long edge when a full quality sweep fails the budget.
pub const SHRINK_FACTOR: f64 = 0.8;

/// JPEG qualities tried at each rung, best fidelity first.
const QUALITY_STEPS_STANDARD: &[u8] = &[80, 60, 40];

/// One extra, more aggressive step is available on the reduced-resolution path.
const QUALITY_STEPS_REDUCED: &[u8] = &[80, 60, 40, 30];

/// The computed search plan for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    /// Long edge of the first rung, in pixels.
    pub starting_long_edge: u32,
    /// Long edge below which no attempt is ever made.
    pub floor: u32,
    /// Qualities tried at every rung, in order.
    pub quality_steps: &'static [u8],
}

impl Ladder {
    /// Build the ladder for a source image with the given natural long edge.
    ///
    /// The first rung is clamped to `min_long_edge`: a larger source is
    /// downscaled to it, and a smaller source is upscaled to it on the
    /// standard path. On the reduced-resolution path a smaller source keeps
    /// its natural long edge, which is how the search can start at or below
    /// the floor.
    pub fn build(natural_long_edge: u32, options: &ConvertOptions) -> Self {
        let mut starting_long_edge = natural_long_edge;

        if starting_long_edge < options.min_long_edge && !options.allow_lower_resolution {
            starting_long_edge = options.min_long_edge;
        } else if starting_long_edge > options.min_long_edge {
            starting_long_edge = options.min_long_edge;
        }

        let (floor, quality_steps) = if options.allow_lower_resolution {
            (MIN_LONG_EDGE_WHEN_REDUCED, QUALITY_STEPS_REDUCED)
        } else {
            (options.min_long_edge, QUALITY_STEPS_STANDARD)
        };

        Self {
            starting_long_edge,
            floor,
            quality_steps,
        }
    }

    /// Next rung after a failed quality sweep, clamped to the floor.
    pub fn shrink(&self, current_long_edge: u32) -> u32 {
        let shrunk = (f64::from(current_long_edge) * SHRINK_FACTOR).floor() as u32;
        shrunk.max(self.floor)
    }
}
