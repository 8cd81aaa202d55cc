use anyhow::Context;
use rangecore::prelude::DEFAULT_PAYLOAD_PATTERN;
use rangecore::ColorConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::MapStyle;

/// Run configuration, optionally loaded from YAML.
///
/// Every field has a default so an empty file, or no file at all, gives the
/// stock behaviour.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Directory scanned for logs. Defaults to the executable's directory.
    pub input_dir: Option<PathBuf>,
    pub extension: String,
    pub output: PathBuf,
    /// Skip sources that cannot be read instead of aborting the run.
    pub skip_unreadable: bool,
    pub payload_pattern: String,
    pub colors: ColorConfig,
    pub map: MapStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            extension: "csv".into(),
            output: PathBuf::from("rangetest-map.html"),
            skip_unreadable: false,
            payload_pattern: DEFAULT_PAYLOAD_PATTERN.into(),
            colors: ColorConfig::default(),
            map: MapStyle::default(),
        }
    }
}

impl MapConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading map config {}", path_ref.display()))?;
        let config: MapConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing map config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        input_dir: Option<PathBuf>,
        output: Option<PathBuf>,
        skip_unreadable: bool,
    ) -> Self {
        if input_dir.is_some() {
            self.input_dir = input_dir;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self.skip_unreadable |= skip_unreadable;
        self
    }

    pub fn resolve_input_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.input_dir {
            return Ok(dir.clone());
        }
        let exe = env::current_exe().context("locating the running executable")?;
        exe.parent()
            .map(Path::to_path_buf)
            .with_context(|| format!("{} has no parent directory", exe.display()))
    }
}
