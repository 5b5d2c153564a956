//! favgen - favicon and web app icon set generation
//!
//! Turns one source image into:
//! - ten resized PNG icons (see [`assets::ICON_ASSETS`])
//! - `site.webmanifest`, referencing the Android Chrome icons
//! - `browserconfig.xml`, referencing the mstile icons
//!
//! [`generate`] runs the whole pipeline for a [`GenerateConfig`]. Every step
//! returns a [`FavgenError`]; the caller decides how to exit.

use std::path::{Path, PathBuf};
use tracing::info;

pub mod assets;
pub mod emit;
pub mod output;
pub mod raster;

#[cfg(test)]
pub mod fixtures;

// ============================================================================
// Error Types
// ============================================================================

/// Error code range: 9200-9299
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum FavgenErrorCode {
    InvalidInput = 9200,
    Decode = 9201,
    Encode = 9202,
    Io = 9203,
    Serialize = 9204,
}

#[derive(Debug, thiserror::Error)]
pub enum FavgenError {
    #[error("[{code}] Invalid input: {message}")]
    InvalidInput { code: u32, message: String },

    #[error("[{code}] Decode error: {message}")]
    Decode { code: u32, message: String },

    #[error("[{code}] Encode error: {message}")]
    Encode { code: u32, message: String },

    #[error("[{code}] IO error: {message}")]
    Io { code: u32, message: String },

    #[error("[{code}] Serialization error: {message}")]
    Serialize { code: u32, message: String },
}

impl FavgenError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            code: FavgenErrorCode::InvalidInput as u32,
            message: message.into(),
        }
    }

    pub fn decode_error(message: impl Into<String>) -> Self {
        Self::Decode {
            code: FavgenErrorCode::Decode as u32,
            message: message.into(),
        }
    }

    pub fn encode_error(message: impl Into<String>) -> Self {
        Self::Encode {
            code: FavgenErrorCode::Encode as u32,
            message: message.into(),
        }
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            code: FavgenErrorCode::Io as u32,
            message: message.into(),
        }
    }

    pub fn serialize_error(message: impl Into<String>) -> Self {
        Self::Serialize {
            code: FavgenErrorCode::Serialize as u32,
            message: message.into(),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidInput { code, .. }
            | Self::Decode { code, .. }
            | Self::Encode { code, .. }
            | Self::Io { code, .. }
            | Self::Serialize { code, .. } => *code,
        }
    }
}

// ============================================================================
// Types
// ============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = "public";
pub const DEFAULT_TILE_COLOR: &str = "#da532c";
pub const DEFAULT_THEME_COLOR: &str = "#ffffff";
pub const DEFAULT_DISPLAY_MODE: &str = "standalone";

/// Everything one generation run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub source_image: PathBuf,
    pub output_dir: PathBuf,
    pub site_name: String,
    pub tile_color: String,
    /// Also used as the manifest background color
    pub theme_color: String,
    pub display_mode: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source_image: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            site_name: String::new(),
            tile_color: DEFAULT_TILE_COLOR.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            display_mode: DEFAULT_DISPLAY_MODE.to_string(),
        }
    }
}

impl GenerateConfig {
    /// Fixed values used by the `favgen-preset` entry point
    pub fn preset() -> Self {
        Self {
            source_image: PathBuf::from("favicon-source.png"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            site_name: "My Site".to_string(),
            tile_color: DEFAULT_TILE_COLOR.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            display_mode: DEFAULT_DISPLAY_MODE.to_string(),
        }
    }

    /// Reject configurations that cannot produce any output
    pub fn validate(&self) -> Result<(), FavgenError> {
        if self.source_image.as_os_str().is_empty() {
            return Err(FavgenError::invalid_input("target image is required"));
        }
        Ok(())
    }
}

/// Files written by one run, in write order
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub icons: Vec<PathBuf>,
    pub browserconfig: PathBuf,
    pub manifest: PathBuf,
}

impl GenerationReport {
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.icons
            .iter()
            .chain([&self.browserconfig, &self.manifest])
            .map(PathBuf::as_path)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full generation: output dir, icons, browserconfig, manifest
///
/// Stops at the first failure. Files written before the failure are left in place.
pub fn generate(config: &GenerateConfig) -> Result<GenerationReport, FavgenError> {
    config.validate()?;

    output::ensure_output_dir(&config.output_dir)?;

    let source = raster::open_source(&config.source_image)?;
    let icons = raster::write_icons(&source, &config.output_dir)?;
    info!(count = icons.len(), "icons written");

    let browserconfig = emit::write_browserconfig(&config.output_dir, &config.tile_color)?;
    let manifest = emit::write_manifest(
        &config.output_dir,
        &config.site_name,
        &config.theme_color,
        &config.display_mode,
    )?;
    info!(dir = %config.output_dir.display(), "metadata written");

    Ok(GenerationReport {
        icons,
        browserconfig,
        manifest,
    })
}

// ============================================================================
// Tests
// ============================================================================
