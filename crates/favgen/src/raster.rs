//! Icon rasterization: decode the source once, write every asset as PNG

use crate::assets::{IconAsset, ICON_ASSETS};
use crate::FavgenError;
use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Open and decode the source image
///
/// The format is detected from the file contents, so a PNG saved with a
/// `.jpg` extension still decodes.
pub fn open_source(path: &Path) -> Result<DynamicImage, FavgenError> {
    let reader = ImageReader::open(path)
        .map_err(|e| {
            FavgenError::decode_error(format!("Failed to open {}: {}", path.display(), e))
        })?
        .with_guessed_format()
        .map_err(|e| {
            FavgenError::decode_error(format!("Failed to read {}: {}", path.display(), e))
        })?;

    let img = reader.decode().map_err(|e| {
        FavgenError::decode_error(format!("Failed to decode {}: {}", path.display(), e))
    })?;

    debug!(
        width = img.width(),
        height = img.height(),
        "favgen.source_decoded"
    );
    Ok(img)
}

/// Resize to the exact asset dimensions
///
/// Non-square targets stretch the source; there is no letterboxing.
pub fn render_icon(img: &DynamicImage, asset: &IconAsset) -> DynamicImage {
    let resized = img.resize_exact(asset.width, asset.height, FilterType::Lanczos3);

    // PNG has no float sample type
    match resized {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(resized.to_rgba16())
        }
        other => other,
    }
}

/// Render a single asset into `out_dir`, overwriting any existing file
pub fn write_icon(
    img: &DynamicImage,
    asset: &IconAsset,
    out_dir: &Path,
) -> Result<PathBuf, FavgenError> {
    let path = out_dir.join(asset.file_name);
    render_icon(img, asset)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| {
            FavgenError::encode_error(format!("Failed to save image({}): {}", asset.file_name, e))
        })?;

    debug!(
        file = asset.file_name,
        width = asset.width,
        height = asset.height,
        "favgen.icon_written"
    );
    Ok(path)
}

/// Write every asset of the table in order, stopping at the first failure
pub fn write_icons(img: &DynamicImage, out_dir: &Path) -> Result<Vec<PathBuf>, FavgenError> {
    ICON_ASSETS
        .iter()
        .map(|asset| write_icon(img, asset, out_dir))
        .collect()
}
