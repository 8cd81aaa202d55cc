use anyhow::Context;
use log::info;
use rangecore::MapDescription;
use std::fs;
use std::path::Path;

use super::model::{escape_html, MapModel};
use super::style::MapStyle;
use super::template::MAP_TEMPLATE;
use super::MapRenderer;

/// Writes a single Leaflet page with the map data embedded as JSON.
#[derive(Debug, Clone, Default)]
pub struct LeafletRenderer {
    style: MapStyle,
}

impl LeafletRenderer {
    pub fn new(style: MapStyle) -> Self {
        Self { style }
    }

    pub fn document(&self, map: &MapDescription) -> anyhow::Result<String> {
        let model = MapModel::build(map, &self.style);
        let json = serde_json::to_string(&model).context("serialising map model")?;
        // Keep "</script>" and friends out of the inline script.
        let json = json.replace('<', "\\u003c");
        Ok(MAP_TEMPLATE
            .replace("__TITLE__", &escape_html(&self.style.title))
            .replace("__MAP_MODEL__", &json))
    }
}

impl MapRenderer for LeafletRenderer {
    fn render(&self, map: &MapDescription, output: &Path) -> anyhow::Result<()> {
        let document = self.document(map)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        fs::write(output, document)
            .with_context(|| format!("writing map to {}", output.display()))?;
        info!(
            "wrote {} layer(s) to {}",
            map.layers.len(),
            output.display()
        );
        Ok(())
    }
}
