pub mod gradient;
pub mod stats;

pub use gradient::{Gradient, Rgb};
pub use stats::StatsHelper;
