pub mod color;
pub mod compose;
pub mod filter;

pub use color::ColorScale;
pub use compose::{LayerComposer, MapDescription, SourceRows, ViewCenter};
pub use filter::{FilterOutcome, RecordFilter};
