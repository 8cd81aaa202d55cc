pub mod point;
pub mod raw;

pub use point::{ColoredPoint, OriginPoint, PointRecord, SourceLayer};
pub use raw::RawRow;
