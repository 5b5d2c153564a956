//! Shared plumbing for the `favgen` and `favgen-preset` binaries
//!
//! Both entry points build a [`GenerateConfig`] and hand it to [`run`], which
//! is the only place that turns a failure into an exit status.

use anyhow::{Context, Result};
use favgen::GenerateConfig;
use std::process::ExitCode;

pub mod args;

/// Exit status for a malformed command line
pub const EXIT_USAGE: u8 = 2;
/// Exit status for any generation failure
pub const EXIT_FAILURE: u8 = 1;

/// Initialize tracing; `FAVGEN_LOG` overrides the default `info` filter
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("FAVGEN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Generate the icon set and map the outcome to an exit status
pub fn run(config: &GenerateConfig) -> ExitCode {
    match try_run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn try_run(config: &GenerateConfig) -> Result<()> {
    config.validate()?;

    print_banner(config);

    let report = favgen::generate(config).with_context(|| {
        format!(
            "generating icons from {} into {}",
            config.source_image.display(),
            config.output_dir.display()
        )
    })?;

    for path in report.files() {
        tracing::debug!(path = %path.display(), "written");
    }
    println!("Successfully generated.");
    Ok(())
}

fn print_banner(config: &GenerateConfig) {
    println!("========== favgen ==========");
    println!("Target image   : {}", config.source_image.display());
    println!("Output dir     : {}", config.output_dir.display());
    println!("Your site name : {}", config.site_name);
    println!("Tile color     : {}", config.tile_color);
    println!("Theme color    : {}", config.theme_color);
    println!("Display mode   : {}", config.display_mode);
    println!("============================");
    println!();
}
