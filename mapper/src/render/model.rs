use rangecore::record::SourceLayer;
use rangecore::MapDescription;
use serde::Serialize;

use super::style::{
    LayerControl, MapStyle, MeasureControl, MiniMap, OriginStyle, PointStyle, TileLayer,
};

/// Everything the page script needs, serialised to JSON inside the document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapModel {
    pub center: [f64; 2],
    pub zoom: u8,
    pub control_scale: bool,
    pub tiles: Vec<TileLayer>,
    pub measure: MeasureControl,
    pub minimap: MiniMap,
    pub layer_control: LayerControl,
    pub point_style: PointStyle,
    pub origin_style: OriginStyle,
    pub layers: Vec<LayerModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerModel {
    pub name: String,
    /// HTML-safe name for the layer control.
    pub label: String,
    pub points: Vec<PointModel>,
    pub origin: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PointModel {
    pub location: [f64; 2],
    pub color: String,
    pub popup: String,
}

impl MapModel {
    pub fn build(map: &MapDescription, style: &MapStyle) -> Self {
        Self {
            center: [map.center.lat, map.center.long],
            zoom: style.zoom_start,
            control_scale: style.control_scale,
            tiles: style.tiles.clone(),
            measure: style.measure.clone(),
            minimap: style.minimap.clone(),
            layer_control: style.layer_control.clone(),
            point_style: style.point.clone(),
            origin_style: style.origin.clone(),
            layers: map.layers.iter().map(LayerModel::from).collect(),
        }
    }
}

impl From<&SourceLayer> for LayerModel {
    fn from(layer: &SourceLayer) -> Self {
        let name = escape_html(&layer.name);
        let points = layer
            .points
            .iter()
            .map(|colored| PointModel {
                location: [colored.point.rx_lat, colored.point.rx_long],
                color: colored.color.clone(),
                popup: format!(
                    "{}<br>SNR: {:?}<br>Elevation: {:?}",
                    name, colored.point.rx_snr, colored.point.rx_elevation
                ),
            })
            .collect();
        Self {
            name: layer.name.clone(),
            label: name,
            points,
            origin: [layer.origin.sender_lat, layer.origin.sender_long],
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangecore::processing::ViewCenter;
    use rangecore::record::{ColoredPoint, OriginPoint, PointRecord};

    fn layer(name: &str) -> SourceLayer {
        SourceLayer {
            name: name.into(),
            points: vec![ColoredPoint {
                point: PointRecord {
                    rx_lat: 46.5,
                    rx_long: 6.6,
                    rx_snr: -3.5,
                    sender_name: "base".into(),
                    rx_elevation: 400.0,
                    sender_lat: 46.52,
                    sender_long: 6.63,
                    payload: "seq 1".into(),
                },
                color: "#ff8000".into(),
            }],
            origin: OriginPoint {
                sender_name: "base".into(),
                sender_lat: 46.52,
                sender_long: 6.63,
            },
        }
    }

    #[test]
    fn model_carries_points_origin_and_center() {
        let map = MapDescription {
            center: ViewCenter { lat: 46.0, long: 6.0 },
            layers: vec![layer("lake.csv")],
            skipped: vec![],
        };
        let model = MapModel::build(&map, &MapStyle::default());
        assert_eq!(model.center, [46.0, 6.0]);
        assert_eq!(model.zoom, 13);
        assert_eq!(model.layers[0].origin, [46.52, 6.63]);
        assert_eq!(
            model.layers[0].points[0].popup,
            "lake.csv<br>SNR: -3.5<br>Elevation: 400.0"
        );
    }

    #[test]
    fn popup_escapes_layer_name() {
        let model = LayerModel::from(&layer("<b>&co.csv"));
        assert!(model.points[0].popup.starts_with("&lt;b&gt;&amp;co.csv<br>"));
        assert_eq!(model.name, "<b>&co.csv");
        assert_eq!(model.label, "&lt;b&gt;&amp;co.csv");
    }

    #[test]
    fn model_serialises_camel_case_controls() {
        let map = MapDescription {
            center: ViewCenter::default(),
            layers: vec![],
            skipped: vec![],
        };
        let json = serde_json::to_value(MapModel::build(&map, &MapStyle::default())).unwrap();
        assert_eq!(json["measure"]["primaryLengthUnit"], "meters");
        assert_eq!(json["minimap"]["toggleDisplay"], true);
        assert_eq!(json["layerControl"]["collapsed"], false);
        assert_eq!(json["pointStyle"]["fillOpacity"], 0.7);
        assert!(json["measure"]["primaryAreaUnit"].is_null());
        assert!(json["measure"]["tertiaryAreaUnit"].is_null());
    }
}
