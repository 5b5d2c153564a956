//! Output directory handling

use crate::FavgenError;
use std::fs::DirBuilder;
use std::path::Path;
use tracing::info;

/// Make sure `dir` exists and is a directory, creating it (and any parents) if absent
pub fn ensure_output_dir(dir: &Path) -> Result<(), FavgenError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(FavgenError::invalid_input(format!(
            "Output path {} exists and is not a directory",
            dir.display()
        )));
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder.create(dir).map_err(|e| {
        FavgenError::io_error(format!("Failed to create dir {}: {}", dir.display(), e))
    })?;

    info!(dir = %dir.display(), "created output directory");
    Ok(())
}
