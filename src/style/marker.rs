//! Circle marker geometry and style

use serde::Serialize;

use super::buckets::color_for_depth;
use crate::feed::Quake;

/// Marker radius (px) per unit of magnitude
const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Smallest radius (px) a marker is drawn with
pub(crate) const MIN_MARKER_RADIUS: f64 = 1.0;

const MARKER_BORDER_COLOR: &str = "#000";
const MARKER_BORDER_WEIGHT: f64 = 1.0;
const MARKER_FILL_OPACITY: f64 = 0.7;

/// Leaflet circle marker options for one event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarkerStyle {
    pub(crate) radius: f64,
    pub(crate) fill_color: &'static str,
    pub(crate) color: &'static str,
    pub(crate) weight: f64,
    pub(crate) fill_opacity: f64,
}

/// Linear marker radius for a magnitude. Not clamped: zero and negative
/// magnitudes give zero and negative radii.
pub(crate) fn radius_for_magnitude(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Style a quake marker: fill by depth, size by magnitude
pub(crate) fn marker_style(quake: &Quake) -> MarkerStyle {
    MarkerStyle {
        radius: radius_for_magnitude(quake.magnitude).max(MIN_MARKER_RADIUS),
        fill_color: color_for_depth(quake.depth).css_name(),
        color: MARKER_BORDER_COLOR,
        weight: MARKER_BORDER_WEIGHT,
        fill_opacity: MARKER_FILL_OPACITY,
    }
}
