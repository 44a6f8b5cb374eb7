//! Common test utilities

use std::path::Path;

use serde_json::{Value, json};

/// A synthetic earthquake event
pub struct TestQuake {
    pub place: Option<&'static str>,
    pub mag: Option<f64>,
    pub lon: f64,
    pub lat: f64,
    pub depth: Option<f64>,
}

impl TestQuake {
    pub fn new(place: &'static str, mag: f64, depth: f64) -> Self {
        Self {
            place: Some(place),
            mag: Some(mag),
            lon: -118.0,
            lat: 34.0,
            depth: Some(depth),
        }
    }

    fn to_json(&self, id: usize) -> Value {
        let coords: Vec<f64> = match self.depth {
            Some(d) => vec![self.lon, self.lat, d],
            None => vec![self.lon, self.lat],
        };
        json!({
            "type": "Feature",
            "id": format!("test{}", id),
            "properties": {
                "mag": self.mag,
                "place": self.place,
                "time": 1717000000000i64,
            },
            "geometry": { "type": "Point", "coordinates": coords },
        })
    }
}

/// One event in each depth bucket, magnitudes 1 to 5
pub fn sample_quakes() -> Vec<TestQuake> {
    vec![
        TestQuake::new("Shallow Town", 1.0, 5.0),
        TestQuake::new("Yellow Valley", 2.0, 20.0),
        TestQuake::new("Orange Ridge", 3.0, 40.0),
        TestQuake::new("Red Basin", 4.0, 60.0),
        TestQuake::new("Deep Trench", 5.0, 300.0),
    ]
}

/// Build a USGS-style GeoJSON feed
pub fn feed_json(quakes: &[TestQuake]) -> String {
    let features: Vec<Value> = quakes
        .iter()
        .enumerate()
        .map(|(i, q)| q.to_json(i))
        .collect();
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "test" },
        "features": features,
    })
    .to_string()
}

/// A small plate boundary collection
pub fn plates_json() -> String {
    r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"Name": "NA-PA"},
         "geometry": {"type": "LineString", "coordinates": [[-124.8, 40.3], [-115.5, 32.6]]}}
    ]}"#
    .to_string()
}

/// Write a feed file to the given path
pub fn write_feed(path: &Path, quakes: &[TestQuake]) -> std::io::Result<()> {
    std::fs::write(path, feed_json(quakes))
}
