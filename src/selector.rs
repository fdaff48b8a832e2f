use crate::types::{FileVariant, VideoCandidate};

/// Width wanted when the caller does not say otherwise, a vertical 1080p frame
pub const DEFAULT_TARGET_WIDTH: u32 = 1080;

/// Pick the variant whose width is the closest to `target_width`.
///
/// Among variants equally close, the preferred container format wins,
/// then the first one in catalog order. The candidate is left untouched.
/// Return None if the candidate has no variant.
pub fn select_best_variant(candidate: &VideoCandidate, target_width: u32) -> Option<&FileVariant> {
    // `min_by_key` keeps the first of equal keys, giving the catalog order tie-break
    candidate
        .variants
        .iter()
        .min_by_key(|variant| {
            (
                variant.width_distance(target_width),
                !variant.is_preferred_format(),
            )
        })
}
