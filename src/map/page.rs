//! HTML page template and script data encoding

/// Leaflet page shell (tera template). Script data arrives pre-encoded by `script_json`.
pub(super) const MAP_PAGE_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{ title }}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { height: 100%; width: 100%; }
    .legend {
      background: rgba(255, 255, 255, 0.9);
      padding: 8px 10px;
      border-radius: 5px;
      box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
      font: 14px/20px Arial, Helvetica, sans-serif;
      color: #333;
    }
    .legend i {
      width: 18px;
      height: 18px;
      display: inline-block;
      vertical-align: middle;
      margin-right: 6px;
    }
  </style>
</head>

<body>
  <div id="map"></div>
  <script>
    const config = {{ config | safe }};
    const quakes = {{ quakes | safe }};
    const plates = {{ plates | safe }};

    const map = L.map('map').setView(config.center, config.zoom);

    const baseMaps = {};
    config.baseLayers.forEach(function (layer, i) {
      const tiles = L.tileLayer(layer.url, {
        maxZoom: layer.maxZoom,
        attribution: layer.attribution
      });
      baseMaps[layer.name] = tiles;
      if (i === config.activeBase) {
        tiles.addTo(map);
      }
    });

    const overlayMaps = {};
    if (plates) {
      overlayMaps['Tectonic Plates'] = L.geoJSON(plates, { style: config.plateStyle });
    }
    overlayMaps['Earthquakes'] = L.geoJSON(quakes, {
      pointToLayer: function (feature, latlng) {
        return L.circleMarker(latlng, feature.properties.style);
      },
      onEachFeature: function (feature, layer) {
        layer.bindPopup(feature.properties.popup);
      }
    });
    // Plates go in first so the quake markers stay on top and clickable
    Object.keys(overlayMaps).forEach(function (name) {
      overlayMaps[name].addTo(map);
    });

    if (config.layerControl) {
      L.control.layers(baseMaps, overlayMaps, { collapsed: false }).addTo(map);
    }

    const legend = L.control({ position: 'bottomright' });
    legend.onAdd = function () {
      const div = L.DomUtil.create('div', 'legend');
      div.innerHTML = config.legendHtml;
      return div;
    };
    legend.addTo(map);
  </script>
</body>

</html>
"#;

/// Serialize a value as JSON that is safe inside an inline `<script>`
pub(super) fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    let json =
        serde_json::to_string(value).map_err(|e| format!("Failed to encode map data: {}", e))?;
    // '<' only occurs inside JSON strings, where < is equivalent
    Ok(json.replace('<', "\\u003c"))
}
