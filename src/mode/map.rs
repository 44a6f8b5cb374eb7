//! Map page mode

use crate::feed::load_plates;
use crate::map::{MapConfig, write_map};
use crate::output::print_error;

use super::{RunOptions, display_name, load_feed, print_summary, write_chart};

/// Build the web map for a feed, print the summary and optionally the depth chart
pub fn run_map(
    filename: &str,
    plates_path: Option<&str>,
    config: &MapConfig,
    output_path: &str,
    options: &RunOptions<'_>,
) {
    let feed = load_feed(filename).unwrap_or_else(|e| {
        print_error(&e);
        std::process::exit(1);
    });

    let plates = plates_path.map(|path| {
        load_plates(path).unwrap_or_else(|e| {
            print_error(&format!("{}: {}", path, e));
            std::process::exit(1);
        })
    });

    let name = display_name(filename);

    if !options.quiet {
        println!("Map: {}", config.title);
    }
    print_summary(&name, &feed, plates.as_ref(), options.top, options.quiet);

    if let Err(e) = write_map(&feed.quakes, plates.as_ref(), config, output_path) {
        print_error(&e);
        std::process::exit(1);
    }
    eprintln!("Map saved to: {}", output_path);

    write_chart(&name, &feed, options.image_path);
}
