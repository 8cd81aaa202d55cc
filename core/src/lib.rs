//! Filtering and colour encoding for range-test telemetry maps.
//!
//! Raw log rows go through [`processing::RecordFilter`], then
//! [`processing::LayerComposer`] colours the survivors by SNR and folds every
//! source into a [`processing::MapDescription`] ready for rendering.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod record;
pub mod telemetry;

pub use prelude::{ColorConfig, PipelineError, PipelineResult};
pub use processing::{LayerComposer, MapDescription, RecordFilter, SourceRows};
