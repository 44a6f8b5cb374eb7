//! Legend entries derived from the depth buckets

use super::buckets::{DEPTH_BOUNDARIES, DepthBucket, color_for_depth};

/// One legend row: a color swatch and its depth range
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LegendEntry {
    pub(crate) bucket: DepthBucket,
    pub(crate) label: String,
}

/// Build the depth legend, shallow to deep.
///
/// Each entry is colored by classifying a depth just inside its bucket,
/// so the legend can never disagree with the markers.
pub(crate) fn build_legend() -> Vec<LegendEntry> {
    DEPTH_BOUNDARIES
        .iter()
        .enumerate()
        .map(|(i, &lower)| {
            let label = match DEPTH_BOUNDARIES.get(i + 1) {
                Some(upper) => format!("{}\u{2013}{} km", lower, upper),
                None => format!("{}+ km", lower),
            };
            LegendEntry {
                bucket: color_for_depth(lower + 1.0),
                label,
            }
        })
        .collect()
}
