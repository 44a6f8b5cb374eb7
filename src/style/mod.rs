//! Depth and magnitude styling for earthquake markers

mod buckets;
mod legend;
mod marker;

pub(crate) use buckets::{DepthBucket, bucket_counts, color_for_depth};
pub(crate) use legend::{LegendEntry, build_legend};
pub(crate) use marker::{MIN_MARKER_RADIUS, marker_style, radius_for_magnitude};
