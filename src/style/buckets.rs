//! Depth color bucket definitions

use crate::feed::Quake;

/// Lower bound (km) of each depth bucket, shallow to deep.
/// Shared by marker coloring and the legend.
pub(crate) const DEPTH_BOUNDARIES: [f64; 5] = [0.0, 10.0, 30.0, 50.0, 70.0];

/// Discrete marker color assigned to a depth range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DepthBucket {
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
}

impl DepthBucket {
    /// All buckets in ascending depth order (index matches `DEPTH_BOUNDARIES`)
    pub(crate) const ALL: [DepthBucket; 5] = [
        DepthBucket::Green,
        DepthBucket::Yellow,
        DepthBucket::Orange,
        DepthBucket::Red,
        DepthBucket::DarkRed,
    ];

    /// CSS color name handed to the map widget
    pub(crate) fn css_name(self) -> &'static str {
        match self {
            DepthBucket::Green => "green",
            DepthBucket::Yellow => "yellow",
            DepthBucket::Orange => "orange",
            DepthBucket::Red => "red",
            DepthBucket::DarkRed => "darkred",
        }
    }

    /// RGB value of the CSS named color
    pub(crate) fn rgb(self) -> (u8, u8, u8) {
        match self {
            DepthBucket::Green => (0, 128, 0),
            DepthBucket::Yellow => (255, 255, 0),
            DepthBucket::Orange => (255, 165, 0),
            DepthBucket::Red => (255, 0, 0),
            DepthBucket::DarkRed => (139, 0, 0),
        }
    }

    pub(crate) fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Severity rank, 0 = shallowest
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Classify a depth (km) into its color bucket.
///
/// Thresholds are checked from deepest to shallowest and the first lower
/// bound the depth strictly exceeds wins, so a value sitting exactly on a
/// boundary belongs to the shallower bucket. Anything at or below the
/// first threshold (negative depths and NaN included) is `Green`.
pub(crate) fn color_for_depth(depth: f64) -> DepthBucket {
    for (i, lower) in DEPTH_BOUNDARIES.iter().enumerate().skip(1).rev() {
        if depth > *lower {
            return DepthBucket::ALL[i];
        }
    }
    DepthBucket::ALL[0]
}

/// Count events per depth bucket (indexed like `DepthBucket::ALL`)
pub(crate) fn bucket_counts(quakes: &[Quake]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for quake in quakes {
        counts[color_for_depth(quake.depth).index()] += 1;
    }
    counts
}
