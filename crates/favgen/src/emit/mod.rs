//! Metadata documents emitted alongside the icons

mod browserconfig;
mod manifest;

pub use browserconfig::*;
pub use manifest::*;

use crate::FavgenError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Create (or truncate) `path` and write `data` to it
pub(crate) fn write_document(path: &Path, data: &[u8]) -> Result<(), FavgenError> {
    let mut file = File::create(path).map_err(|e| {
        FavgenError::io_error(format!("Failed to create {}: {}", path.display(), e))
    })?;
    file.write_all(data).map_err(|e| {
        FavgenError::io_error(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}
