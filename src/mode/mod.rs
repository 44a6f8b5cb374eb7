//! CLI mode implementations

mod map;
mod stats;

pub use map::run_map;
pub use stats::run_stats;

use crate::chart;
use crate::feed::{self, Feed, PlateBoundaries};
use crate::output::{
    get_display_name, print_depth_table, print_error, print_feed_info, print_legend,
    print_magnitude_stats, print_strongest, print_warning,
};
use crate::style::{bucket_counts, build_legend};

/// Options shared by all modes
pub struct RunOptions<'a> {
    pub quiet: bool,
    /// Number of strongest events listed in the summary
    pub top: usize,
    pub image_path: Option<&'a str>,
}

/// Load the feed, warning about anything that will not be drawn
fn load_feed(filename: &str) -> Result<Feed, String> {
    let feed = feed::load_feed(filename)?;

    if feed.skipped > 0 {
        print_warning(&format!(
            "Skipped {} feature(s) without a magnitude or depth",
            feed.skipped
        ));
    }
    if feed.quakes.is_empty() {
        print_warning("No events found in feed");
    }

    Ok(feed)
}

/// Print the feed summary (tables only when quiet)
fn print_summary(
    display_name: &str,
    feed: &Feed,
    plates: Option<&PlateBoundaries>,
    top: usize,
    quiet: bool,
) {
    let legend = build_legend();

    if !quiet {
        print_feed_info(display_name, feed, plates.map(PlateBoundaries::feature_count));
    }

    print_depth_table(&legend, &bucket_counts(&feed.quakes));
    println!();
    print_magnitude_stats(&feed.quakes);

    if top > 0 && !feed.quakes.is_empty() {
        println!();
        print_strongest(&feed.quakes, top);
    }

    if !quiet {
        println!();
        print_legend(&legend);
    }
}

/// Write the depth chart if requested, reporting but not aborting on failure
fn write_chart(display_name: &str, feed: &Feed, image_path: Option<&str>) {
    let Some(path) = image_path else {
        return;
    };

    let data = chart::DepthChartData {
        feed_name: display_name.to_string(),
        counts: bucket_counts(&feed.quakes),
    };

    if let Err(e) = chart::render_depth_chart(&data, path) {
        print_error(&e);
    } else {
        eprintln!("Chart saved to: {}", path);
    }
}

fn display_name(filename: &str) -> String {
    get_display_name(filename).to_string()
}
