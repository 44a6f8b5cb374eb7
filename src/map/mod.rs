//! Interactive web map page (Leaflet) for an earthquake feed

mod page;
mod tiles;

pub(crate) use tiles::BaseMap;

use serde::Serialize;
use serde_json::{Value, json};
use tera::{Context, Tera, escape_html};

use crate::feed::{PlateBoundaries, Quake};
use crate::style::{LegendEntry, build_legend, marker_style};
use page::{MAP_PAGE_HTML, script_json};
use tiles::{TileLayer, base_layers, street_layer};

/// Highest zoom level offered by the tile sources
pub(crate) const MAX_ZOOM: u8 = 19;

pub(crate) const DEFAULT_TITLE: &str = "Earthquakes - Past 7 Days";
/// Contiguous United States
pub(crate) const DEFAULT_CENTER: (f64, f64) = (37.0902, -95.7129);

const LEGEND_HEADING: &str = "<strong>Earthquake Depth (km)</strong>";
const PLATE_LINE_COLOR: &str = "orange";
const PLATE_LINE_WEIGHT: f64 = 2.0;

/// Map page arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapLayout {
    /// One street base layer, earthquakes only, no layer control
    Basic,
    /// Switchable base layers with earthquake and plate overlays
    Layered,
}

impl MapLayout {
    pub(crate) fn default_zoom(self) -> u8 {
        match self {
            MapLayout::Basic => 4,
            MapLayout::Layered => 3,
        }
    }
}

/// Everything the page needs besides the data
#[derive(Debug, Clone)]
pub(crate) struct MapConfig {
    pub(crate) title: String,
    /// (latitude, longitude)
    pub(crate) center: (f64, f64),
    pub(crate) zoom: u8,
    pub(crate) layout: MapLayout,
    /// Initially shown base layer (layered layout)
    pub(crate) base_map: BaseMap,
    /// Thunderforest key enabling the Outdoors layer
    pub(crate) api_key: Option<String>,
}

impl MapConfig {
    pub(crate) fn new(layout: MapLayout) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: layout.default_zoom(),
            layout,
            base_map: BaseMap::Satellite,
            api_key: None,
        }
    }

    /// Base layers to offer and the index of the initially active one
    fn tile_layers(&self) -> Result<(Vec<TileLayer>, usize), String> {
        match self.layout {
            MapLayout::Basic => Ok((vec![street_layer()], 0)),
            MapLayout::Layered => {
                let layers = base_layers(self.api_key.as_deref());
                let active = layers
                    .iter()
                    .position(|(base, _)| *base == self.base_map)
                    .ok_or_else(|| {
                        format!(
                            "Base layer {} is not available (missing API key?)",
                            self.base_map.display_name()
                        )
                    })?;
                Ok((layers.into_iter().map(|(_, layer)| layer).collect(), active))
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineStyle {
    color: &'static str,
    weight: f64,
}

/// Settings read by the page script
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageConfig {
    center: [f64; 2],
    zoom: u8,
    base_layers: Vec<TileLayer>,
    active_base: usize,
    layer_control: bool,
    plate_style: LineStyle,
    legend_html: String,
}

/// Legend control body: heading, then one swatch and label per bucket
pub(crate) fn legend_html(entries: &[LegendEntry]) -> String {
    let mut html = String::from(LEGEND_HEADING);
    for entry in entries {
        html.push_str(&format!(
            "<br><i style=\"background:{}\"></i>{}",
            entry.bucket.css_name(),
            escape_html(&entry.label)
        ));
    }
    html
}

/// Popup body for a marker
pub(crate) fn popup_html(quake: &Quake) -> String {
    format!(
        "<b>Location:</b> {}<br><b>Magnitude:</b> {}<br><b>Depth:</b> {} km",
        escape_html(&quake.place),
        quake.magnitude,
        quake.depth
    )
}

/// GeoJSON point features carrying precomputed marker style and popup
fn quake_collection(quakes: &[Quake]) -> Value {
    let features: Vec<Value> = quakes
        .iter()
        .map(|q| {
            json!({
                "type": "Feature",
                "id": q.id,
                "geometry": {
                    "type": "Point",
                    "coordinates": [q.longitude, q.latitude, q.depth],
                },
                "properties": {
                    "place": q.place,
                    "mag": q.magnitude,
                    "time": q.time,
                    "style": marker_style(q),
                    "popup": popup_html(q),
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Render the complete map page
pub(crate) fn render_map_html(
    quakes: &[Quake],
    plates: Option<&PlateBoundaries>,
    config: &MapConfig,
) -> Result<String, String> {
    if plates.is_some() && config.layout == MapLayout::Basic {
        return Err("Plate boundaries require the layered layout".to_string());
    }

    let (base_layers, active_base) = config.tile_layers()?;
    let page_config = PageConfig {
        center: [config.center.0, config.center.1],
        zoom: config.zoom.min(MAX_ZOOM),
        base_layers,
        active_base,
        layer_control: config.layout == MapLayout::Layered,
        plate_style: LineStyle {
            color: PLATE_LINE_COLOR,
            weight: PLATE_LINE_WEIGHT,
        },
        legend_html: legend_html(&build_legend()),
    };

    let config_json = script_json(&page_config)?;
    let quakes_json = script_json(&quake_collection(quakes))?;
    let plates_json = match plates {
        Some(p) => script_json(p.as_value())?,
        None => "null".to_string(),
    };

    let mut context = Context::new();
    context.insert("title", &config.title);
    context.insert("config", &config_json);
    context.insert("quakes", &quakes_json);
    context.insert("plates", &plates_json);

    Tera::one_off(MAP_PAGE_HTML, &context, true)
        .map_err(|e| format!("Failed to render map: {}", e))
}

/// Render the map page and write it to `output_path`
pub(crate) fn write_map(
    quakes: &[Quake],
    plates: Option<&PlateBoundaries>,
    config: &MapConfig,
    output_path: &str,
) -> Result<(), String> {
    let html = render_map_html(quakes, plates, config)?;
    std::fs::write(output_path, html).map_err(|e| format!("Failed to save map: {}", e))
}

/// Parse a "LAT,LON" map center
pub(crate) fn parse_center(text: &str) -> Result<(f64, f64), String> {
    let invalid = || format!("Invalid center \"{}\" (expected LAT,LON)", text);

    let (lat, lon) = text.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude out of range: {}", lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("Longitude out of range: {}", lon));
    }
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parse_plates;

    fn quake(place: &str, magnitude: f64, depth: f64) -> Quake {
        Quake {
            id: Some("us1".to_string()),
            place: place.to_string(),
            magnitude,
            depth,
            longitude: -120.5,
            latitude: 36.2,
            time: Some(1717000000000),
        }
    }

    fn plates() -> PlateBoundaries {
        parse_plates(r#"{"type": "FeatureCollection", "features": []}"#).unwrap()
    }

    #[test]
    fn test_legend_html_lists_buckets_in_order() {
        let html = legend_html(&build_legend());
        assert!(html.starts_with(LEGEND_HEADING));
        let positions: Vec<usize> = ["green", "yellow", "orange", "red", "darkred"]
            .iter()
            .map(|c| html.find(&format!("background:{}\"", c)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("10–30 km"));
        assert!(html.contains("70+ km"));
    }

    #[test]
    fn test_popup_escapes_place() {
        let popup = popup_html(&quake("<script>alert(1)</script>", 3.2, 12.5));
        assert!(popup.contains("&lt;script&gt;"));
        assert!(!popup.contains("<script>"));
        assert!(popup.contains("<b>Magnitude:</b> 3.2"));
        assert!(popup.contains("<b>Depth:</b> 12.5 km"));
    }

    #[test]
    fn test_layered_page_contents() {
        let quakes = vec![quake("Somewhere", 4.0, 80.0)];
        let html = render_map_html(&quakes, Some(&plates()), &MapConfig::new(MapLayout::Layered))
            .unwrap();

        assert!(html.contains("leaflet.js"));
        assert!(html.contains("\"layerControl\":true"));
        assert!(html.contains("\"zoom\":3"));
        assert!(html.contains("\"name\":\"Satellite\""));
        assert!(html.contains("\"name\":\"Grayscale\""));
        assert!(!html.contains("\"name\":\"Outdoors\""));
        assert!(html.contains("\"fillColor\":\"darkred\""));
        assert!(html.contains("\"radius\":16.0"));
        assert!(html.contains("\"plateStyle\":{\"color\":\"orange\",\"weight\":2.0}"));
        assert!(!html.contains("const plates = null;"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_basic_page_contents() {
        let html = render_map_html(&[], None, &MapConfig::new(MapLayout::Basic)).unwrap();
        assert!(html.contains("\"layerControl\":false"));
        assert!(html.contains("\"zoom\":4"));
        assert!(html.contains("\"name\":\"Street\""));
        assert!(html.contains("const plates = null;"));
    }

    #[test]
    fn test_basic_layout_rejects_plates() {
        let err =
            render_map_html(&[], Some(&plates()), &MapConfig::new(MapLayout::Basic)).unwrap_err();
        assert!(err.contains("layered layout"));
    }

    #[test]
    fn test_outdoors_requires_api_key() {
        let mut config = MapConfig::new(MapLayout::Layered);
        config.base_map = BaseMap::Outdoors;
        assert!(render_map_html(&[], None, &config).is_err());

        config.api_key = Some("abc123".to_string());
        let html = render_map_html(&[], None, &config).unwrap();
        assert!(html.contains("outdoors/{z}/{x}/{y}.png?apikey=abc123"));
        assert!(html.contains("\"activeBase\":2"));
    }

    #[test]
    fn test_script_data_cannot_close_script_tag() {
        let quakes = vec![quake("</script><b>x</b>", 1.0, 1.0)];
        let mut config = MapConfig::new(MapLayout::Layered);
        config.title = "Quakes </title>".to_string();
        let html = render_map_html(&quakes, None, &config).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<title>Quakes &lt;&#x2F;title&gt;</title>"));
    }

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("37.09,-95.71").unwrap(), (37.09, -95.71));
        assert_eq!(parse_center(" 10 , 20 ").unwrap(), (10.0, 20.0));
        assert!(parse_center("37.09").is_err());
        assert!(parse_center("abc,def").is_err());
        assert!(parse_center("95,10").unwrap_err().contains("Latitude"));
        assert!(parse_center("10,200").unwrap_err().contains("Longitude"));
    }
}
