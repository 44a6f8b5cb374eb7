use crate::feed::{Feed, Quake};
use crate::style::{
    DepthBucket, LegendEntry, MIN_MARKER_RADIUS, color_for_depth, radius_for_magnitude,
};
use colored::*;

const TABLE_WIDTH: usize = 44;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

fn swatch(bucket: DepthBucket) -> ColoredString {
    let (r, g, b) = bucket.rgb();
    "██".truecolor(r, g, b)
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_feed_info(display_name: &str, feed: &Feed, plate_features: Option<usize>) {
    println!("Feed: {}", display_name);
    println!("Events: {}, Skipped: {}", feed.quakes.len(), feed.skipped);
    if let Some(count) = plate_features {
        println!("Plate boundaries: {} features", count);
    }
    println!();
}

/// (min, max, mean) magnitude, None for an empty slice
pub(crate) fn magnitude_stats(quakes: &[Quake]) -> Option<(f64, f64, f64)> {
    if quakes.is_empty() {
        return None;
    }
    let min = quakes.iter().map(|q| q.magnitude).fold(f64::INFINITY, f64::min);
    let max = quakes
        .iter()
        .map(|q| q.magnitude)
        .fold(f64::NEG_INFINITY, f64::max);
    let mean = quakes.iter().map(|q| q.magnitude).sum::<f64>() / quakes.len() as f64;
    Some((min, max, mean))
}

pub(crate) fn print_magnitude_stats(quakes: &[Quake]) {
    println!("[Magnitude]");
    match magnitude_stats(quakes) {
        Some((min, max, mean)) => {
            println!("{} {:>5.1}", style_label("Min "), min);
            println!("{} {:>5.1}", style_label("Max "), max);
            println!("{} {:>5.1}", style_label("Mean"), mean);
        }
        None => println!("     -"),
    }
}

pub(crate) fn print_depth_table(legend: &[LegendEntry], counts: &[usize]) {
    let total: usize = counts.iter().sum();

    println!("[Depth Distribution]");
    println!("   {:<12} {:>8} {:>7}", "DEPTH", "EVENTS", "PCT");
    print_separator(TABLE_WIDTH);
    for (entry, &count) in legend.iter().zip(counts) {
        let pct = if total > 0 {
            format!("{:>7.1}", count as f64 / total as f64 * 100.0)
        } else {
            "      -".to_string()
        };
        println!(
            "{} {:<12} {:>8} {}",
            swatch(entry.bucket),
            entry.label,
            count,
            pct
        );
    }
    print_separator(TABLE_WIDTH);
    println!("   {:<12} {:>8}", "Total", total);
}

/// Strongest events first; ties keep feed order
pub(crate) fn strongest(quakes: &[Quake], limit: usize) -> Vec<&Quake> {
    let mut sorted: Vec<&Quake> = quakes.iter().collect();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    sorted.truncate(limit);
    sorted
}

pub(crate) fn print_strongest(quakes: &[Quake], limit: usize) {
    println!("[Strongest Events]");
    println!("    {:>5} {:>8}  {}", "MAG", "DEPTH", "LOCATION");
    print_separator(TABLE_WIDTH);
    for quake in strongest(quakes, limit) {
        let bucket = color_for_depth(quake.depth);
        println!(
            "{} {:>5.1} {:>5.1} km  {}",
            swatch(bucket),
            quake.magnitude,
            quake.depth,
            quake.place
        );
    }
}

pub(crate) fn print_legend(legend: &[LegendEntry]) {
    let labels: Vec<String> = legend
        .iter()
        .map(|e| format!("{} {}", swatch(e.bucket), e.label))
        .collect();
    println!("Color: hypocenter depth  {}", labels.join("  "));
    println!(
        "Size: marker radius is magnitude x {} px (M5.0 = {} px, at least {} px)",
        radius_for_magnitude(1.0),
        radius_for_magnitude(5.0),
        MIN_MARKER_RADIUS
    );
}
