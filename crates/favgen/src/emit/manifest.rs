//! Web application manifest (`site.webmanifest`)

use super::write_document;
use crate::assets::{MANIFEST_FILE_NAME, MANIFEST_ICONS};
use crate::FavgenError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const PNG_MIME: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Field order here is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

/// Build the manifest record; the background color always follows the theme color
pub fn build_manifest(site_name: &str, theme_color: &str, display_mode: &str) -> WebManifest {
    let icons = MANIFEST_ICONS
        .iter()
        .map(|asset| ManifestIcon {
            src: asset.url(),
            sizes: asset.size_label(),
            mime_type: PNG_MIME.to_string(),
        })
        .collect();

    WebManifest {
        name: site_name.to_string(),
        short_name: site_name.to_string(),
        icons,
        theme_color: theme_color.to_string(),
        background_color: theme_color.to_string(),
        display: display_mode.to_string(),
    }
}

/// Serialize as compact JSON
pub fn render_manifest(manifest: &WebManifest) -> Result<Vec<u8>, FavgenError> {
    serde_json::to_vec(manifest)
        .map_err(|e| FavgenError::serialize_error(format!("Failed to json marshal: {}", e)))
}

/// Build, serialize and write `<out_dir>/site.webmanifest`
pub fn write_manifest(
    out_dir: &Path,
    site_name: &str,
    theme_color: &str,
    display_mode: &str,
) -> Result<PathBuf, FavgenError> {
    let path = out_dir.join(MANIFEST_FILE_NAME);
    let manifest = build_manifest(site_name, theme_color, display_mode);
    let data = render_manifest(&manifest)?;
    write_document(&path, &data)?;

    debug!(path = %path.display(), bytes = data.len(), "favgen.manifest_written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_build_manifest_colors_match() {
        let manifest = build_manifest("Example", "#123456", "standalone");
        assert_eq!(manifest.theme_color, "#123456");
        assert_eq!(manifest.background_color, manifest.theme_color);
        assert_eq!(manifest.name, "Example");
        assert_eq!(manifest.short_name, "Example");
    }

    #[test]
    fn test_build_manifest_icons() {
        let manifest = build_manifest("", "#ffffff", "standalone");
        assert_eq!(
            manifest.icons,
            vec![
                ManifestIcon {
                    src: "/android-chrome-192x192.png".to_string(),
                    sizes: "192x192".to_string(),
                    mime_type: "image/png".to_string(),
                },
                ManifestIcon {
                    src: "/android-chrome-512x512.png".to_string(),
                    sizes: "512x512".to_string(),
                    mime_type: "image/png".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_render_manifest_exact_output() {
        let manifest = build_manifest("My Site", "#ffffff", "standalone");
        let json = String::from_utf8(render_manifest(&manifest).unwrap()).unwrap();

        assert_eq!(
            json,
            concat!(
                r##"{"name":"My Site","short_name":"My Site","icons":["##,
                r##"{"src":"/android-chrome-192x192.png","sizes":"192x192","type":"image/png"},"##,
                r##"{"src":"/android-chrome-512x512.png","sizes":"512x512","type":"image/png"}],"##,
                r##""theme_color":"#ffffff","background_color":"#ffffff","display":"standalone"}"##
            )
        );
    }

    #[test]
    fn test_render_manifest_escapes_site_name() {
        let manifest = build_manifest("Tom \"T\" Site", "#000", "browser");
        let json = render_manifest(&manifest).unwrap();

        let value: Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["name"], "Tom \"T\" Site");
        assert_eq!(value["display"], "browser");
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "Site", "#abcdef", "fullscreen").unwrap();
        assert_eq!(path, dir.path().join("site.webmanifest"));

        let value: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["theme_color"], value["background_color"]);
        assert_eq!(value["icons"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_manifest_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_manifest(&dir.path().join("missing"), "", "#fff", "standalone")
            .unwrap_err();
        assert!(matches!(err, FavgenError::Io { .. }));
    }
}
