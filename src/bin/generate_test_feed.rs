use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Value, json};

fn write_json(path: &Path, value: &Value) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn quake(id: &str, place: Option<&str>, mag: Option<f64>, coords: &[f64]) -> Value {
    json!({
        "type": "Feature",
        "id": id,
        "properties": {
            "mag": mag,
            "place": place,
            "time": 1717000000000i64,
            "type": "earthquake",
        },
        "geometry": { "type": "Point", "coordinates": coords },
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "quakemap test feed", "count": features.len() },
        "features": features,
    })
}

fn week() -> Value {
    // One event per depth bucket plus boundary depths (10 and 70 km stay in the shallower bucket)
    collection(vec![
        quake("t01", Some("5 km N of The Geysers, CA"), Some(1.2), &[-122.76, 38.83, 2.1]),
        quake("t02", Some("10 km SW of Ridgecrest, CA"), Some(2.8), &[-117.75, 35.56, 10.0]),
        quake("t03", Some("Central Alaska"), Some(3.4), &[-149.9, 62.3, 24.5]),
        quake("t04", Some("offshore Oregon"), Some(4.1), &[-126.1, 44.2, 38.0]),
        quake("t05", Some("Puerto Rico region"), Some(3.9), &[-66.4, 18.9, 62.0]),
        quake("t06", Some("Fiji region"), Some(5.6), &[178.1, -17.9, 70.0]),
        quake("t07", Some("Tonga"), Some(6.3), &[-175.2, -20.1, 210.0]),
        quake("t08", Some("near the east coast of Honshu, Japan"), Some(4.8), &[142.4, 37.7, 45.3]),
    ])
}

fn edge_cases() -> Value {
    collection(vec![
        quake("e01", Some("Yellowstone National Park, Wyoming"), Some(-0.4), &[-110.7, 44.7, -1.8]),
        quake("e02", Some("Hawaii"), Some(0.0), &[-155.3, 19.4, 0.0]),
        quake("e03", None, Some(2.2), &[-98.0, 36.1, 6.0]),
        quake("e04", Some("Nevada"), None, &[-117.9, 38.1, 8.0]),
        quake("e05", Some("Missing depth"), Some(1.1), &[-120.0, 40.0]),
    ])
}

fn plates() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "Name": "NA-PA", "PlateA": "NA", "PlateB": "PA" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-124.8, 40.3], [-122.5, 37.5], [-120.6, 35.8], [-115.5, 32.6]],
                },
            },
            {
                "type": "Feature",
                "properties": { "Name": "PA-PS", "PlateA": "PA", "PlateB": "PS" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[142.2, 41.0], [143.9, 37.5], [142.8, 34.0]],
                },
            },
        ],
    })
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    write_json(&dir.join("week.geojson"), &week())?;
    write_json(&dir.join("edge_cases.geojson"), &edge_cases())?;
    write_json(&dir.join("plates.json"), &plates())?;

    println!("Generated: week.geojson, edge_cases.geojson, plates.json");
    Ok(())
}
