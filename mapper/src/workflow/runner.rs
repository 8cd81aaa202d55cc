use anyhow::{bail, Context};
use log::{info, warn};
use rangecore::processing::ColorScale;
use rangecore::{LayerComposer, RecordFilter, SourceRows};
use std::path::{Path, PathBuf};

use crate::render::MapRenderer;
use crate::source::{discover, source_name, RowSource};
use crate::workflow::config::MapConfig;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub layers: Vec<String>,
    /// Readable sources with no valid row.
    pub skipped_empty: Vec<String>,
    /// Only populated when unreadable sources are skipped.
    pub skipped_unreadable: Vec<String>,
}

/// Drives one batch run: discover, read, compose, render.
pub struct Runner<S, R> {
    config: MapConfig,
    source: S,
    renderer: R,
}

impl<S: RowSource, R: MapRenderer> Runner<S, R> {
    pub fn new(config: MapConfig, source: S, renderer: R) -> Self {
        Self {
            config,
            source,
            renderer,
        }
    }

    pub fn run(&self, input_dir: &Path) -> anyhow::Result<RunSummary> {
        let filter = RecordFilter::with_pattern(&self.config.payload_pattern)
            .context("building record filter")?;
        let scale = ColorScale::new(self.config.colors.clone()).context("building colour scale")?;
        let composer = LayerComposer::new(filter, scale);

        let files = discover(input_dir, &self.config.extension)?;
        if files.is_empty() {
            bail!(
                "No {} files found in {}. Exiting.",
                self.config.extension,
                input_dir.display()
            );
        }
        info!("found {} source(s) in {}", files.len(), input_dir.display());

        let mut sources = Vec::with_capacity(files.len());
        let mut skipped_unreadable = Vec::new();
        for path in &files {
            let name = source_name(path);
            match self.source.read_rows(path) {
                Ok(rows) => sources.push(SourceRows::new(name, rows)),
                Err(err) if self.config.skip_unreadable => {
                    warn!("{}: unreadable, skipping: {:#}", name, err);
                    skipped_unreadable.push(name);
                }
                Err(err) => {
                    return Err(err.context(format!("reading source {}", path.display())));
                }
            }
        }

        let map = composer.compose(&sources);
        if map.layers.is_empty() {
            warn!("no source produced valid points, map will only show background tiles");
        }

        self.renderer
            .render(&map, &self.config.output)
            .context("rendering map")?;

        Ok(RunSummary {
            output: self.config.output.clone(),
            layers: map.layers.iter().map(|layer| layer.name.clone()).collect(),
            skipped_empty: map.skipped,
            skipped_unreadable,
        })
    }
}
