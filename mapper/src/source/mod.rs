use anyhow::Context;
use rangecore::record::RawRow;
use std::fs;
use std::path::{Path, PathBuf};

pub mod reader;

pub use reader::CsvSource;

/// Reads the rows of one log file, in file order.
pub trait RowSource {
    fn read_rows(&self, path: &Path) -> anyhow::Result<Vec<RawRow>>;
}

/// Lists visible regular files in `dir` whose extension matches, sorted by file name.
pub fn discover(dir: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("scanning input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("scanning input directory {}", dir.display()))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        let matches = !hidden
            && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Layer name for a source file.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
