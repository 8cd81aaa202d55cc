use serde::{Deserialize, Serialize};

/// One row of a range-test log as read from disk.
///
/// Every attribute may be absent. Numeric attributes are already typed: a
/// cell that held no number is `None` by the time it reaches the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRow {
    #[serde(rename = "rx lat")]
    pub rx_lat: Option<f64>,
    #[serde(rename = "rx long")]
    pub rx_long: Option<f64>,
    #[serde(rename = "rx snr")]
    pub rx_snr: Option<f64>,
    #[serde(rename = "sender name")]
    pub sender_name: Option<String>,
    #[serde(rename = "rx elevation")]
    pub rx_elevation: Option<f64>,
    #[serde(rename = "sender lat")]
    pub sender_lat: Option<f64>,
    #[serde(rename = "sender long")]
    pub sender_long: Option<f64>,
    pub payload: Option<String>,
}
