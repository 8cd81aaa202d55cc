use regex::Regex;

use crate::prelude::{PipelineResult, DEFAULT_PAYLOAD_PATTERN};
use crate::record::{OriginPoint, PointRecord, RawRow};
use crate::telemetry::log::LogManager;

/// Result of filtering one source.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// At least one row survived. `origin` comes from `points[0]`.
    Points {
        points: Vec<PointRecord>,
        origin: OriginPoint,
    },
    /// Nothing usable; the caller reports the source and moves on.
    Empty,
}

impl FilterOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::Empty)
    }

    pub fn points(&self) -> &[PointRecord] {
        match self {
            FilterOutcome::Points { points, .. } => points,
            FilterOutcome::Empty => &[],
        }
    }
}

/// Three-stage row validator: payload pattern, field completeness, coordinate range.
///
/// Rows are dropped, never repaired, and survivors keep their input order.
pub struct RecordFilter {
    pattern: Regex,
    logger: LogManager,
}

impl RecordFilter {
    pub fn new() -> PipelineResult<Self> {
        Self::with_pattern(DEFAULT_PAYLOAD_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> PipelineResult<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            logger: LogManager::scoped("rangecore::filter"),
        })
    }

    pub fn apply(&self, source: &str, rows: &[RawRow]) -> FilterOutcome {
        let sequenced: Vec<&RawRow> = rows
            .iter()
            .filter(|row| self.has_sequence(row))
            .collect();
        self.logger.stage(
            source,
            "payload",
            sequenced.len(),
            rows.len() - sequenced.len(),
        );

        let complete: Vec<PointRecord> = sequenced
            .iter()
            .filter_map(|row| PointRecord::from_complete(row))
            .collect();
        self.logger.stage(
            source,
            "completeness",
            complete.len(),
            sequenced.len() - complete.len(),
        );

        let before = complete.len();
        let points: Vec<PointRecord> = complete
            .into_iter()
            .filter(PointRecord::in_bounds)
            .collect();
        self.logger
            .stage(source, "range", points.len(), before - points.len());

        match points.first().map(OriginPoint::from) {
            Some(origin) => FilterOutcome::Points { points, origin },
            None => FilterOutcome::Empty,
        }
    }

    fn has_sequence(&self, row: &RawRow) -> bool {
        row.payload
            .as_deref()
            .is_some_and(|payload| self.pattern.is_match(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(lat: f64, long: f64, payload: &str) -> RawRow {
        RawRow {
            rx_lat: Some(lat),
            rx_long: Some(long),
            rx_snr: Some(1.0),
            sender_name: Some("tx".into()),
            rx_elevation: Some(100.0),
            sender_lat: Some(lat + 0.01),
            sender_long: Some(long + 0.01),
            payload: Some(payload.into()),
        }
    }

    #[test]
    fn payload_must_carry_sequence_number() {
        let filter = RecordFilter::new().unwrap();
        let rows = vec![
            row(10.0, 10.0, "seq 1"),
            row(11.0, 11.0, "SEQ 2"),
            row(12.0, 12.0, "seq x"),
            row(13.0, 13.0, "seq"),
            row(14.0, 14.0, "hello seq 42 world"),
            RawRow {
                payload: None,
                ..row(15.0, 15.0, "")
            },
        ];
        let outcome = filter.apply("payloads", &rows);
        let lats: Vec<f64> = outcome.points().iter().map(|p| p.rx_lat).collect();
        assert_eq!(lats, vec![10.0, 14.0]);
    }

    #[test]
    fn incomplete_rows_are_dropped() {
        let filter = RecordFilter::new().unwrap();
        let rows = vec![
            RawRow {
                sender_name: None,
                ..row(1.0, 1.0, "seq 1")
            },
            RawRow {
                rx_snr: None,
                ..row(2.0, 2.0, "seq 2")
            },
            RawRow {
                sender_long: Some(f64::NAN),
                ..row(3.0, 3.0, "seq 3")
            },
            row(4.0, 4.0, "seq 4"),
        ];
        let outcome = filter.apply("complete", &rows);
        assert_eq!(outcome.points().len(), 1);
        assert_eq!(outcome.points()[0].rx_lat, 4.0);
    }

    #[test]
    fn out_of_range_coordinates_are_dropped() {
        let filter = RecordFilter::new().unwrap();
        let rows = vec![
            row(90.0, 180.0, "seq 1"),
            row(-90.5, 0.0, "seq 2"),
            row(0.0, 180.5, "seq 3"),
            row(-90.0, -180.0, "seq 4"),
            row(f64::INFINITY, 0.0, "seq 5"),
        ];
        let outcome = filter.apply("range", &rows);
        let seqs: Vec<&str> = outcome.points().iter().map(|p| p.payload.as_str()).collect();
        assert_eq!(seqs, vec!["seq 1", "seq 4"]);
    }

    #[test]
    fn origin_is_first_surviving_row() {
        let filter = RecordFilter::new().unwrap();
        let rows = vec![
            row(1.0, 1.0, "no sequence"),
            RawRow {
                rx_lat: None,
                ..row(2.0, 2.0, "seq 2")
            },
            row(3.0, 3.0, "seq 3"),
            row(4.0, 4.0, "seq 4"),
        ];
        match filter.apply("origin", &rows) {
            FilterOutcome::Points { points, origin } => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].rx_lat, 3.0);
                assert_eq!(origin.sender_lat, 3.01);
                assert_eq!(origin.sender_long, 3.01);
            }
            FilterOutcome::Empty => panic!("expected points"),
        }
    }

    #[test]
    fn source_without_sequence_numbers_is_empty() {
        let filter = RecordFilter::new().unwrap();
        let rows = vec![row(1.0, 1.0, "ping"), row(2.0, 2.0, "pong")];
        assert!(filter.apply("silent", &rows).is_empty());
        assert!(filter.apply("nothing", &[]).is_empty());
    }

    #[test]
    fn custom_pattern_is_honoured() {
        let filter = RecordFilter::with_pattern(r"pkt#\d+").unwrap();
        let rows = vec![row(1.0, 1.0, "seq 1"), row(2.0, 2.0, "pkt#9")];
        assert_eq!(filter.apply("custom", &rows).points().len(), 1);
        assert!(RecordFilter::with_pattern("(").is_err());
    }

    fn coordinate() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![
            Just(None),
            Just(Some(f64::NAN)),
            (-250.0..250.0f64).prop_map(Some),
        ]
    }

    fn raw_row() -> impl Strategy<Value = RawRow> {
        (
            coordinate(),
            coordinate(),
            prop::option::of(-30.0..30.0f64),
            prop::option::of("[a-z]{1,6}"),
            prop::sample::select(vec!["seq 7", "seq", "SEQ 3", "id seq 12", "x"]),
            any::<bool>(),
        )
            .prop_map(|(lat, long, snr, name, payload, has_payload)| RawRow {
                rx_lat: lat,
                rx_long: long,
                rx_snr: snr,
                sender_name: name,
                rx_elevation: Some(12.0),
                sender_lat: Some(1.0),
                sender_long: Some(2.0),
                payload: has_payload.then(|| payload.to_string()),
            })
    }

    proptest! {
        #[test]
        fn survivors_satisfy_invariants(rows in prop::collection::vec(raw_row(), 0..40)) {
            let filter = RecordFilter::new().unwrap();
            for point in filter.apply("prop", &rows).points() {
                prop_assert!((-90.0..=90.0).contains(&point.rx_lat));
                prop_assert!((-180.0..=180.0).contains(&point.rx_long));
                prop_assert!(filter.pattern.is_match(&point.payload));
            }
        }

        #[test]
        fn filtering_is_idempotent(rows in prop::collection::vec(raw_row(), 0..40)) {
            let filter = RecordFilter::new().unwrap();
            let first = filter.apply("prop", &rows);
            let again: Vec<RawRow> = first.points().iter().map(RawRow::from).collect();
            prop_assert_eq!(filter.apply("prop", &again), first);
        }

        #[test]
        fn survivors_keep_input_order(rows in prop::collection::vec(raw_row(), 0..40)) {
            let filter = RecordFilter::new().unwrap();
            let indexed: Vec<RawRow> = rows
                .into_iter()
                .enumerate()
                .map(|(i, mut row)| {
                    row.rx_elevation = Some(i as f64);
                    row
                })
                .collect();
            let order: Vec<f64> = filter
                .apply("prop", &indexed)
                .points()
                .iter()
                .map(|p| p.rx_elevation)
                .collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
