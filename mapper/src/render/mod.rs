use rangecore::MapDescription;
use std::path::Path;

pub mod html;
pub mod model;
pub mod style;
pub mod template;

pub use html::LeafletRenderer;
pub use style::MapStyle;

/// Turns a composed map into an output artifact at `output`.
pub trait MapRenderer {
    fn render(&self, map: &MapDescription, output: &Path) -> anyhow::Result<()>;
}
