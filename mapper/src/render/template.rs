/// Page skeleton. `__TITLE__` and `__MAP_MODEL__` are substituted at render time.
pub const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css" />
  <link rel="stylesheet" href="https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/ljagis/leaflet-measure@2.1.7/dist/leaflet-measure.min.css" />
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.css" />
  <script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
  <script src="https://cdn.jsdelivr.net/gh/ljagis/leaflet-measure@2.1.7/dist/leaflet-measure.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.js"></script>
  <style>
    html, body, #map { width: 100%; height: 100%; margin: 0; padding: 0; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    (function () {
      var model = __MAP_MODEL__;
      var map = L.map("map", { center: model.center, zoom: model.zoom });
      if (model.controlScale) {
        L.control.scale().addTo(map);
      }

      var baseLayers = {};
      var active = null;
      model.tiles.forEach(function (tile) {
        var layer = L.tileLayer(tile.url, { attribution: tile.attribution, maxZoom: 19 });
        baseLayers[tile.name] = layer;
        if (tile.show && active === null) {
          active = layer;
        }
      });
      if (active === null && model.tiles.length > 0) {
        active = baseLayers[model.tiles[0].name];
      }
      if (active !== null) {
        active.addTo(map);
      }

      L.control.measure(model.measure).addTo(map);

      var overlays = {};
      model.layers.forEach(function (source) {
        var group = L.featureGroup();
        source.points.forEach(function (point) {
          L.circleMarker(point.location, {
            radius: model.pointStyle.radius,
            color: point.color,
            fill: true,
            fillColor: point.color,
            fillOpacity: model.pointStyle.fillOpacity
          }).bindPopup(point.popup).addTo(group);
        });
        group.addTo(map);
        overlays[source.label] = group;

        L.marker(source.origin, {
          icon: L.AwesomeMarkers.icon({
            icon: model.originStyle.icon,
            prefix: model.originStyle.prefix,
            markerColor: model.originStyle.markerColor,
            iconColor: model.originStyle.iconColor
          })
        }).bindPopup(model.originStyle.popup).addTo(map);
      });

      L.control.layers(baseLayers, overlays, { collapsed: model.layerControl.collapsed }).addTo(map);

      if (model.tiles.length > 0) {
        var mini = L.tileLayer(model.tiles[0].url, { attribution: model.tiles[0].attribution });
        new L.Control.MiniMap(mini, model.minimap).addTo(map);
      }
    })();
  </script>
</body>
</html>
"#;
