use serde::{Deserialize, Serialize};

/// Static map configuration handed to the renderer untouched by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    pub title: String,
    pub zoom_start: u8,
    pub control_scale: bool,
    /// Background tile layers. The first with `show` set is active at load.
    pub tiles: Vec<TileLayer>,
    pub measure: MeasureControl,
    pub minimap: MiniMap,
    pub layer_control: LayerControl,
    pub point: PointStyle,
    pub origin: OriginStyle,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            title: "Range test map".into(),
            zoom_start: 13,
            control_scale: true,
            tiles: vec![
                TileLayer {
                    name: "OpenStreetMap".into(),
                    url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
                    attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
                    show: true,
                },
                TileLayer {
                    name: "Esri WorldImagery".into(),
                    url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".into(),
                    attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community".into(),
                    show: false,
                },
                TileLayer {
                    name: "OpenTopoMap".into(),
                    url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".into(),
                    attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)".into(),
                    show: false,
                },
            ],
            measure: MeasureControl::default(),
            minimap: MiniMap::default(),
            layer_control: LayerControl::default(),
            point: PointStyle::default(),
            origin: OriginStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub url: String,
    pub attribution: String,
    #[serde(default)]
    pub show: bool,
}

/// Distance measurement tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct MeasureControl {
    pub active_color: String,
    pub completed_color: String,
    pub primary_length_unit: String,
    pub secondary_length_unit: String,
    pub primary_area_unit: Option<String>,
    pub secondary_area_unit: Option<String>,
    pub tertiary_area_unit: Option<String>,
}

impl Default for MeasureControl {
    fn default() -> Self {
        Self {
            active_color: "blue".into(),
            completed_color: "blue".into(),
            primary_length_unit: "meters".into(),
            secondary_length_unit: "miles".into(),
            primary_area_unit: None,
            secondary_area_unit: None,
            tertiary_area_unit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct MiniMap {
    pub width: u32,
    pub height: u32,
    pub toggle_display: bool,
    pub minimized: bool,
}

impl Default for MiniMap {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            toggle_display: true,
            minimized: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerControl {
    pub collapsed: bool,
}

/// Circle marker drawn for each point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct PointStyle {
    pub radius: f64,
    pub fill_opacity: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: 7.0,
            fill_opacity: 0.7,
        }
    }
}

/// Marker drawn at each source's transmitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct OriginStyle {
    pub popup: String,
    pub marker_color: String,
    pub icon: String,
    pub prefix: String,
    pub icon_color: String,
}

impl Default for OriginStyle {
    fn default() -> Self {
        Self {
            popup: "Base".into(),
            marker_color: "blue".into(),
            icon: "info-sign".into(),
            prefix: "glyphicon".into(),
            icon_color: "white".into(),
        }
    }
}
