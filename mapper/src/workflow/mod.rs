pub mod config;
pub mod runner;

pub use config::MapConfig;
pub use runner::Runner;
