//! Base tile layer catalog

use clap::ValueEnum;
use serde::Serialize;

const OSM_ATTRIBUTION: &str = "Map data © OpenStreetMap contributors";
const OSM_LINKED_ATTRIBUTION: &str =
    "Map data © <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Base layers selectable in the layered layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BaseMap {
    /// OpenStreetMap humanitarian style
    Satellite,
    /// OpenStreetMap standard style
    Grayscale,
    /// Thunderforest outdoors (requires an API key)
    Outdoors,
}

impl BaseMap {
    pub(crate) fn display_name(self) -> &'static str {
        match self {
            BaseMap::Satellite => "Satellite",
            BaseMap::Grayscale => "Grayscale",
            BaseMap::Outdoors => "Outdoors",
        }
    }
}

/// Leaflet tile layer definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TileLayer {
    pub(crate) name: &'static str,
    pub(crate) url: String,
    pub(crate) max_zoom: u8,
    pub(crate) attribution: &'static str,
}

/// Single street layer used by the basic layout
pub(crate) fn street_layer() -> TileLayer {
    TileLayer {
        name: "Street",
        url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        max_zoom: 18,
        attribution: OSM_LINKED_ATTRIBUTION,
    }
}

fn tile_layer(base: BaseMap, api_key: Option<&str>) -> Option<TileLayer> {
    let url = match base {
        BaseMap::Satellite => "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".to_string(),
        BaseMap::Grayscale => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        BaseMap::Outdoors => format!(
            "https://{{s}}.tile.thunderforest.com/outdoors/{{z}}/{{x}}/{{y}}.png?apikey={}",
            api_key?
        ),
    };
    Some(TileLayer {
        name: base.display_name(),
        url,
        max_zoom: 19,
        attribution: OSM_ATTRIBUTION,
    })
}

/// Base layers available for the layered layout, in control order.
/// Outdoors is left out when no API key is configured.
pub(crate) fn base_layers(api_key: Option<&str>) -> Vec<(BaseMap, TileLayer)> {
    BaseMap::value_variants()
        .iter()
        .filter_map(|&base| tile_layer(base, api_key).map(|layer| (base, layer)))
        .collect()
}
