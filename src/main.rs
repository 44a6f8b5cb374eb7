mod chart;
mod feed;
mod map;
mod mode;
mod output;
mod style;

use clap::Parser;

use map::{BaseMap, MAX_ZOOM, MapConfig, MapLayout, parse_center};
use mode::RunOptions;
use output::print_error;

const DEFAULT_OUTPUT: &str = "map.html";

#[derive(Parser)]
#[command(
    name = "quakemap",
    version,
    about = "Earthquake feed mapper: depth-colored, magnitude-sized markers on an interactive web map",
    after_help = "Examples:
  quakemap all_week.geojson                                Write map.html (layered map)
  quakemap all_week.geojson --plates PB2002_boundaries.json
                                                           Add tectonic plate overlay
  quakemap all_week.geojson --basic -o quakes.html         Single street layer map
  quakemap --stats all_week.geojson --image depth.png      Summary and depth chart only
  quakemap --no-color all_week.geojson                     Disable colored output

Feeds: https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php"
)]
struct Args {
    /// Earthquake feed (GeoJSON FeatureCollection, USGS summary format)
    #[arg(required = true)]
    feed: String,

    /// Tectonic plate boundaries (GeoJSON FeatureCollection)
    #[arg(long, value_name = "PATH")]
    plates: Option<String>,

    /// Output HTML map
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Print the feed summary only (no map output)
    #[arg(short, long)]
    stats: bool,

    /// Output depth distribution chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Single street base layer without layer control
    #[arg(short, long)]
    basic: bool,

    /// Initially shown base layer
    #[arg(long, value_enum, value_name = "NAME")]
    basemap: Option<BaseMap>,

    /// Thunderforest API key (enables the Outdoors base layer)
    #[arg(long, env = "THUNDERFOREST_API_KEY", value_name = "KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Map center as LAT,LON [default: 37.0902,-95.7129]
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    center: Option<String>,

    /// Initial zoom level [default: 3, or 4 with --basic]
    #[arg(short, long, value_name = "LEVEL")]
    zoom: Option<u8>,

    /// Page title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Number of strongest events to list
    #[arg(long, default_value = "5", value_name = "N")]
    top: usize,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

/// Check that the directory an output file goes into exists
fn validate_output_path(path: &str) {
    use std::path::Path;
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fail(&format!("Directory does not exist: {}", parent.display()));
    }
}

fn build_map_config(args: &Args) -> MapConfig {
    let layout = if args.basic {
        MapLayout::Basic
    } else {
        MapLayout::Layered
    };
    let mut config = MapConfig::new(layout);

    if let Some(ref title) = args.title {
        config.title = title.clone();
    }
    if let Some(ref center) = args.center {
        config.center = parse_center(center).unwrap_or_else(|e| fail(&e));
    }
    if let Some(zoom) = args.zoom {
        config.zoom = zoom;
    }
    if let Some(base_map) = args.basemap {
        config.base_map = base_map;
    }
    config.api_key = args.api_key.clone().filter(|key| !key.trim().is_empty());
    config
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    if args.stats && args.output.is_some() {
        fail("--output cannot be used with --stats");
    }

    if args.stats && args.plates.is_some() {
        fail("--plates cannot be used with --stats");
    }

    if args.stats && (args.basic || args.basemap.is_some()) {
        fail("--basic and --basemap cannot be used with --stats");
    }

    if args.basic && args.plates.is_some() {
        fail("--plates cannot be used with --basic");
    }

    if args.basic && args.basemap.is_some() {
        fail("--basemap cannot be used with --basic");
    }

    if args.zoom.is_some_and(|z| z > MAX_ZOOM) {
        fail(&format!("Zoom must be between 0 and {}", MAX_ZOOM));
    }

    let config = build_map_config(&args);

    if !args.basic && config.base_map == BaseMap::Outdoors && config.api_key.is_none() {
        fail("--basemap outdoors requires --api-key (or THUNDERFOREST_API_KEY)");
    }

    if !args.stats && !args.basic && config.api_key.is_none() && !args.quiet {
        output::print_warning("Outdoors base layer omitted (no API key)");
    }

    // Validate output paths
    let output_path = args.output.as_deref().unwrap_or(DEFAULT_OUTPUT);
    if !args.stats {
        validate_output_path(output_path);
    }
    if let Some(ref path) = args.image {
        validate_output_path(path);
    }

    let options = RunOptions {
        quiet: args.quiet,
        top: args.top,
        image_path: args.image.as_deref(),
    };

    // Dispatch to appropriate mode
    if args.stats {
        mode::run_stats(&args.feed, &options);
    } else {
        mode::run_map(
            &args.feed,
            args.plates.as_deref(),
            &config,
            output_path,
            &options,
        );
    }
}
