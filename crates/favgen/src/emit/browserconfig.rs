//! Legacy tile configuration (`browserconfig.xml`)

use super::write_document;
use crate::assets::{
    BROWSERCONFIG_FILE_NAME, MSTILE_150, MSTILE_310, MSTILE_310_WIDE, MSTILE_70,
};
use crate::FavgenError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Render the document. The tile color is inserted verbatim, unescaped.
pub fn render_browserconfig(tile_color: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<browserconfig>
    <msapplication>
        <tile>
            <square70x70logo src="{}"/>
            <square150x150logo src="{}"/>
            <wide310x150logo src="{}"/>
            <square310x310logo src="{}"/>
            <TileColor>{}</TileColor>
        </tile>
    </msapplication>
</browserconfig>"#,
        MSTILE_70.url(),
        MSTILE_150.url(),
        MSTILE_310_WIDE.url(),
        MSTILE_310.url(),
        tile_color
    )
}

/// Write `<out_dir>/browserconfig.xml`
pub fn write_browserconfig(out_dir: &Path, tile_color: &str) -> Result<PathBuf, FavgenError> {
    let path = out_dir.join(BROWSERCONFIG_FILE_NAME);
    write_document(&path, render_browserconfig(tile_color).as_bytes())?;

    debug!(path = %path.display(), "favgen.browserconfig_written");
    Ok(path)
}
