use serde::{Deserialize, Serialize};

use crate::record::RawRow;

/// A row that survived every filter stage.
///
/// Receiver coordinates are finite and in range, and every field the map
/// needs is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub rx_lat: f64,
    pub rx_long: f64,
    pub rx_snr: f64,
    pub sender_name: String,
    pub rx_elevation: f64,
    pub sender_lat: f64,
    pub sender_long: f64,
    pub payload: String,
}

impl PointRecord {
    /// Builds a record when the payload and all seven required fields are present.
    ///
    /// `NaN` and infinities count as missing. Range checks are left to the filter.
    pub fn from_complete(row: &RawRow) -> Option<Self> {
        Some(Self {
            rx_lat: present(row.rx_lat)?,
            rx_long: present(row.rx_long)?,
            rx_snr: present(row.rx_snr)?,
            sender_name: row.sender_name.clone()?,
            rx_elevation: present(row.rx_elevation)?,
            sender_lat: present(row.sender_lat)?,
            sender_long: present(row.sender_long)?,
            payload: row.payload.clone()?,
        })
    }

    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.rx_lat) && (-180.0..=180.0).contains(&self.rx_long)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl From<&PointRecord> for RawRow {
    fn from(point: &PointRecord) -> Self {
        RawRow {
            rx_lat: Some(point.rx_lat),
            rx_long: Some(point.rx_long),
            rx_snr: Some(point.rx_snr),
            sender_name: Some(point.sender_name.clone()),
            rx_elevation: Some(point.rx_elevation),
            sender_lat: Some(point.sender_lat),
            sender_long: Some(point.sender_long),
            payload: Some(point.payload.clone()),
        }
    }
}

/// Transmitter location of a source, taken from its first valid record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginPoint {
    pub sender_name: String,
    pub sender_lat: f64,
    pub sender_long: f64,
}

impl From<&PointRecord> for OriginPoint {
    fn from(point: &PointRecord) -> Self {
        Self {
            sender_name: point.sender_name.clone(),
            sender_lat: point.sender_lat,
            sender_long: point.sender_long,
        }
    }
}

/// A validated record together with its display colour (`#rrggbb`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint {
    pub point: PointRecord,
    pub color: String,
}

/// Everything the renderer needs for one input log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLayer {
    pub name: String,
    pub points: Vec<ColoredPoint>,
    pub origin: OriginPoint,
}
