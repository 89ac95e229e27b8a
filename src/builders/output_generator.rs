// Writes the merged dataset to disk as pretty-printed JSON
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::PipelineError;
use crate::classes::MergedCardList;

/// Serialize `{"cards": [...]}` to `path`, replacing any existing file.
///
/// Output is UTF-8 with two-space indentation; non-ASCII characters are
/// written as-is. Missing parent directories are created.
pub fn write_cards(path: &Path, document: &MergedCardList) -> Result<(), PipelineError> {
    let write_error = |source: std::io::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| write_error(e.into()))?;
    writer.flush().map_err(write_error)?;

    info!("Wrote {} cards to {}", document.cards.len(), path.display());
    Ok(())
}
