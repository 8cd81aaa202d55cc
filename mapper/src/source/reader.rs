use anyhow::{bail, Context};
use csv::{ReaderBuilder, Trim};
use rangecore::record::RawRow;
use serde::Deserialize;
use std::path::Path;

use super::RowSource;

/// On-disk shape of a range-test log row.
///
/// Numeric cells that do not parse become `None` here, so the core only
/// ever sees typed values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    #[serde(rename = "rx lat", deserialize_with = "csv::invalid_option")]
    rx_lat: Option<f64>,
    #[serde(rename = "rx long", deserialize_with = "csv::invalid_option")]
    rx_long: Option<f64>,
    #[serde(rename = "rx snr", deserialize_with = "csv::invalid_option")]
    rx_snr: Option<f64>,
    #[serde(rename = "sender name")]
    sender_name: Option<String>,
    #[serde(rename = "rx elevation", deserialize_with = "csv::invalid_option")]
    rx_elevation: Option<f64>,
    #[serde(rename = "sender lat", deserialize_with = "csv::invalid_option")]
    sender_lat: Option<f64>,
    #[serde(rename = "sender long", deserialize_with = "csv::invalid_option")]
    sender_long: Option<f64>,
    payload: Option<String>,
}

impl From<CsvRow> for RawRow {
    fn from(row: CsvRow) -> Self {
        RawRow {
            rx_lat: row.rx_lat,
            rx_long: row.rx_long,
            rx_snr: row.rx_snr,
            sender_name: row.sender_name,
            rx_elevation: row.rx_elevation,
            sender_lat: row.sender_lat,
            sender_long: row.sender_long,
            payload: row.payload,
        }
    }
}

/// Reads comma-separated logs with a header row.
#[derive(Debug, Clone, Default)]
pub struct CsvSource;

impl CsvSource {
    pub fn new() -> Self {
        Self
    }
}

impl RowSource for CsvSource {
    fn read_rows(&self, path: &Path) -> anyhow::Result<Vec<RawRow>> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;
        let headers = rdr
            .headers()
            .with_context(|| format!("reading header of {}", path.display()))?
            .clone();

        // Short rows read their missing trailing cells as absent; long rows are malformed.
        let mut rows = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record
                .with_context(|| format!("parsing row {} of {}", index + 1, path.display()))?;
            if record.len() > headers.len() {
                bail!(
                    "parsing row {} of {}: {} fields, header has {}",
                    index + 1,
                    path.display(),
                    record.len(),
                    headers.len()
                );
            }
            let row: CsvRow = record
                .deserialize(Some(&headers))
                .with_context(|| format!("parsing row {} of {}", index + 1, path.display()))?;
            rows.push(row.into());
        }
        Ok(rows)
    }
}
