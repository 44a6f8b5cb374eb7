//! Depth distribution bar chart

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, DepthChartData, build_bucket_label};
use crate::style::build_legend;

/// Render a bar chart of event counts per depth bucket to a PNG file.
/// Bars use the same colors as the map markers.
pub fn render_depth_chart(data: &DepthChartData, output_path: &str) -> Result<(), String> {
    let total: usize = data.counts.iter().sum();
    if total == 0 {
        return Err("No events to chart".to_string());
    }

    let legend = build_legend();
    let x_labels: Vec<String> = legend
        .iter()
        .zip(data.counts)
        .map(|(entry, count)| build_bucket_label(&entry.label, count))
        .collect();
    let legend_data: Vec<String> = legend.iter().map(|e| e.label.clone()).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Earthquake Depth Distribution")
                .subtext(&data.feed_name)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("events")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(24))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Grid width is ~92% of chart (5% left + 3% right margins); bars fill 60% of a slot
    let bar_width = (CHART_WIDTH as f64) * 0.92 / legend.len() as f64 * 0.6;

    // One stacked series per bucket so each bar gets its own color and legend entry;
    // a series is zero everywhere except at its own bucket
    for (idx, entry) in legend.iter().enumerate() {
        let bar_data: Vec<f64> = (0..legend.len())
            .map(|i| if i == idx { data.counts[idx] as f64 } else { 0.0 })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(&entry.label)
                .data(bar_data)
                .stack("total")
                .bar_width(bar_width)
                .item_style(
                    ItemStyle::new()
                        .color(entry.bucket.hex().as_str())
                        .opacity(0.9),
                ),
        );
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
