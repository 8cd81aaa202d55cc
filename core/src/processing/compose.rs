use serde::{Deserialize, Serialize};

use crate::math::StatsHelper;
use crate::processing::color::ColorScale;
use crate::processing::filter::{FilterOutcome, RecordFilter};
use crate::record::{ColoredPoint, RawRow, SourceLayer};
use crate::telemetry::log::LogManager;

/// Raw rows of one input log, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRows {
    pub name: String,
    pub rows: Vec<RawRow>,
}

impl SourceRows {
    pub fn new(name: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Initial map viewport centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewCenter {
    pub lat: f64,
    pub long: f64,
}

impl ViewCenter {
    /// Mean receiver position over all raw rows, valid or not.
    pub fn from_rows(rows: &[RawRow]) -> Option<Self> {
        Some(Self {
            lat: StatsHelper::mean(rows.iter().map(|row| row.rx_lat))?,
            long: StatsHelper::mean(rows.iter().map(|row| row.rx_long))?,
        })
    }
}

/// Renderer-ready description of the whole map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDescription {
    pub center: ViewCenter,
    pub layers: Vec<SourceLayer>,
    /// Sources that had no valid row, in input order.
    pub skipped: Vec<String>,
}

/// Turns filtered sources into coloured layers.
pub struct LayerComposer {
    filter: RecordFilter,
    scale: ColorScale,
    logger: LogManager,
}

impl LayerComposer {
    pub fn new(filter: RecordFilter, scale: ColorScale) -> Self {
        Self {
            filter,
            scale,
            logger: LogManager::scoped("rangecore::compose"),
        }
    }

    pub fn compose_source(&self, source: &SourceRows) -> Option<SourceLayer> {
        match self.filter.apply(&source.name, &source.rows) {
            FilterOutcome::Points { points, origin } => {
                let points: Vec<ColoredPoint> = points
                    .into_iter()
                    .map(|point| ColoredPoint {
                        color: self.scale.color(point.rx_snr).to_hex(),
                        point,
                    })
                    .collect();
                self.logger.record(&format!(
                    "{}: {} of {} rows mapped",
                    source.name,
                    points.len(),
                    source.rows.len()
                ));
                Some(SourceLayer {
                    name: source.name.clone(),
                    points,
                    origin,
                })
            }
            FilterOutcome::Empty => {
                self.logger.skipped(&source.name, "no valid data");
                None
            }
        }
    }

    /// Folds every source into one map description.
    ///
    /// The centre comes from the raw rows of the first source only.
    pub fn compose<'a, I>(&self, sources: I) -> MapDescription
    where
        I: IntoIterator<Item = &'a SourceRows>,
    {
        let mut sources = sources.into_iter().peekable();
        let center = match sources.peek() {
            Some(first) => ViewCenter::from_rows(&first.rows).unwrap_or_else(|| {
                self.logger.warn(&format!(
                    "{}: no receiver coordinates, centring map on (0, 0)",
                    first.name
                ));
                ViewCenter::default()
            }),
            None => ViewCenter::default(),
        };

        sources.fold(
            MapDescription {
                center,
                layers: Vec::new(),
                skipped: Vec::new(),
            },
            |mut map, source| {
                match self.compose_source(source) {
                    Some(layer) => map.layers.push(layer),
                    None => map.skipped.push(source.name.clone()),
                }
                map
            },
        )
    }
}
