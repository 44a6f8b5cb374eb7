//! Feed summary mode (no map output)

use crate::output::print_error;

use super::{RunOptions, display_name, load_feed, print_summary, write_chart};

/// Print the feed summary and optionally the depth chart
pub fn run_stats(filename: &str, options: &RunOptions<'_>) {
    let feed = load_feed(filename).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });
    let name = display_name(filename);

    if !options.quiet {
        println!("Feed Summary");
    }
    print_summary(&name, &feed, None, options.top, options.quiet);
    write_chart(&name, &feed, options.image_path);
}
