//! Earthquake feed and plate boundary loading (GeoJSON)

use serde::Deserialize;
use serde_json::Value;

const FEATURE_COLLECTION: &str = "FeatureCollection";
const UNKNOWN_PLACE: &str = "Unknown location";

/// A single earthquake event
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Quake {
    pub(crate) id: Option<String>,
    pub(crate) place: String,
    pub(crate) magnitude: f64,
    /// Kilometers below the surface (third coordinate)
    pub(crate) depth: f64,
    pub(crate) longitude: f64,
    pub(crate) latitude: f64,
    /// Epoch milliseconds
    pub(crate) time: Option<i64>,
}

/// Events read from a feed, in feed order
#[derive(Debug, Default)]
pub(crate) struct Feed {
    pub(crate) quakes: Vec<Quake>,
    /// Features without a magnitude or a full coordinate triple
    pub(crate) skipped: usize,
}

/// Plate boundary collection, passed through to the map untouched
#[derive(Debug, Clone)]
pub(crate) struct PlateBoundaries(Value);

impl PlateBoundaries {
    pub(crate) fn as_value(&self) -> &Value {
        &self.0
    }

    pub(crate) fn feature_count(&self) -> usize {
        self.0
            .get("features")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawProperties {
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    time: Option<Value>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Value,
}

impl RawFeature {
    fn into_quake(self) -> Option<Quake> {
        let properties = self.properties?;
        let magnitude = properties.mag?;
        let coords = self.geometry?.coordinates;
        let coords = coords.as_array()?;
        let (longitude, latitude, depth) = match coords.as_slice() {
            [lon, lat, depth, ..] => (lon.as_f64()?, lat.as_f64()?, depth.as_f64()?),
            _ => return None,
        };

        let id = self.id.and_then(|id| match id {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Some(Quake {
            id,
            place: properties
                .place
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            magnitude,
            depth,
            longitude,
            latitude,
            time: properties.time.as_ref().and_then(Value::as_i64),
        })
    }
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Error opening file: {}", e))
}

/// Parse an earthquake feed from GeoJSON text
pub(crate) fn parse_feed(text: &str) -> Result<Feed, String> {
    let raw: RawCollection =
        serde_json::from_str(text).map_err(|e| format!("Invalid GeoJSON: {}", e))?;

    if raw.kind != FEATURE_COLLECTION {
        return Err(format!(
            "Expected a {}, found {}",
            FEATURE_COLLECTION, raw.kind
        ));
    }

    let mut feed = Feed::default();
    for feature in raw.features {
        match feature.into_quake() {
            Some(quake) => feed.quakes.push(quake),
            None => feed.skipped += 1,
        }
    }
    Ok(feed)
}

/// Load an earthquake feed file
pub(crate) fn load_feed(path: &str) -> Result<Feed, String> {
    parse_feed(&read_file(path)?)
}

/// Parse plate boundaries from GeoJSON text
pub(crate) fn parse_plates(text: &str) -> Result<PlateBoundaries, String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid GeoJSON: {}", e))?;

    match value.get("type").and_then(Value::as_str) {
        Some(FEATURE_COLLECTION) => Ok(PlateBoundaries(value)),
        Some(other) => Err(format!("Expected a {}, found {}", FEATURE_COLLECTION, other)),
        None => Err("Invalid GeoJSON: missing \"type\"".to_string()),
    }
}

/// Load a plate boundary file
pub(crate) fn load_plates(path: &str) -> Result<PlateBoundaries, String> {
    parse_plates(&read_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"title": "USGS All Earthquakes, Past Week"},
        "features": [
            {
                "type": "Feature",
                "id": "nc75012345",
                "properties": {"mag": 2.4, "place": "10 km NW of Cobb, CA", "time": 1717000000000},
                "geometry": {"type": "Point", "coordinates": [-122.8, 38.8, 3.1]}
            },
            {
                "type": "Feature",
                "id": "us7000abcd",
                "properties": {"mag": 5.1, "place": null, "time": 1717000100000},
                "geometry": {"type": "Point", "coordinates": [142.3, 37.9, 88.0]}
            },
            {
                "type": "Feature",
                "id": "ak024",
                "properties": {"mag": null, "place": "Alaska"},
                "geometry": {"type": "Point", "coordinates": [-150.1, 61.2, 40.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.0, "place": "No depth"},
                "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.5, "place": "No geometry"},
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_feed_extracts_quakes() {
        let feed = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(feed.quakes.len(), 2);
        assert_eq!(feed.skipped, 3);

        let first = &feed.quakes[0];
        assert_eq!(first.id.as_deref(), Some("nc75012345"));
        assert_eq!(first.place, "10 km NW of Cobb, CA");
        assert_eq!(first.magnitude, 2.4);
        assert_eq!(first.depth, 3.1);
        assert_eq!(first.longitude, -122.8);
        assert_eq!(first.latitude, 38.8);
        assert_eq!(first.time, Some(1717000000000));
    }

    #[test]
    fn test_parse_feed_null_place() {
        let feed = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(feed.quakes[1].place, UNKNOWN_PLACE);
        assert_eq!(feed.quakes[1].depth, 88.0);
    }

    #[test]
    fn test_parse_feed_empty_collection() {
        let feed = parse_feed(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(feed.quakes.is_empty());
        assert_eq!(feed.skipped, 0);
    }

    #[test]
    fn test_parse_feed_rejects_non_collection() {
        let err = parse_feed(r#"{"type": "Feature", "properties": {}}"#).unwrap_err();
        assert!(err.contains("Expected a FeatureCollection"), "{}", err);
    }

    #[test]
    fn test_parse_feed_rejects_invalid_json() {
        let err = parse_feed("not json").unwrap_err();
        assert!(err.starts_with("Invalid GeoJSON"), "{}", err);
    }

    #[test]
    fn test_parse_plates() {
        let plates = parse_plates(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"Name": "AF-AN"},
                 "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [-0.03, -54.6]]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(plates.feature_count(), 1);
        assert!(plates.as_value().get("features").is_some());
    }

    #[test]
    fn test_parse_plates_rejects_other_types() {
        assert!(parse_plates(r#"{"type": "Point", "coordinates": [0, 0]}"#).is_err());
        assert!(parse_plates(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_load_feed_missing_file() {
        let err = load_feed("/nonexistent/feed.geojson").unwrap_err();
        assert!(err.starts_with("Error opening file"), "{}", err);
    }
}
