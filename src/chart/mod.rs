//! Chart rendering for earthquake feed summaries

mod colors;
mod depth;

pub use depth::render_depth_chart;

/// Data for the depth distribution chart
pub struct DepthChartData {
    pub feed_name: String,
    /// Event count per depth bucket, shallow to deep
    pub counts: [usize; 5],
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2000;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Build bucket label with event count (2 lines, for X-axis)
pub(super) fn build_bucket_label(range: &str, count: usize) -> String {
    format!("{}\n({})", range, count)
}
