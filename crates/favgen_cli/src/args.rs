//! Command-line flags for `favgen`
//!
//! Flags take one or two leading dashes and their value either as the next
//! argument or after `=`: `-d out`, `--d=out`, `-tileColor=#000`.

use favgen::GenerateConfig;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Generate(GenerateConfig),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),

    #[error("flag needs an argument: -{0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for flag -{flag}: not valid UTF-8")]
    InvalidValue { flag: String, value: String },

    #[error("flag is not valid UTF-8: {0}")]
    InvalidUnicode(String),
}

enum Field {
    Source,
    OutputDir,
    SiteName,
    TileColor,
    ThemeColor,
    DisplayMode,
}

pub fn usage() -> String {
    format!(
        "\
Usage: favgen -i <image> [options]

  -i string
        [Required] Specify target image.
  -d string
        Specify output directory. If the directory does not exist, create it. (default \"{}\")
  -n string
        Specify your site name.
  -tileColor string
        Specify tile color. (default \"{}\")
  -themeColor string
        Specify theme color. (default \"{}\")
  -displayMode string
        Specify display mode. (default \"{}\")
",
        favgen::DEFAULT_OUTPUT_DIR,
        favgen::DEFAULT_TILE_COLOR,
        favgen::DEFAULT_THEME_COLOR,
        favgen::DEFAULT_DISPLAY_MODE,
    )
}

/// Parse arguments (without the program name)
///
/// Parsing stops at `--` or the first non-flag argument. A missing `-i` is
/// not a parse error; `GenerateConfig::validate` reports it.
///
/// Path values (`-i`, `-d`) may be any OS string when given as a separate
/// argument; every other value must be UTF-8.
pub fn parse(args: &[OsString]) -> Result<Command, ArgsError> {
    let mut config = GenerateConfig::default();

    let mut i = 0;
    while i < args.len() {
        let raw = args[i].as_os_str();
        let Some(arg) = raw.to_str() else {
            if raw.as_encoded_bytes().starts_with(b"-") {
                return Err(ArgsError::InvalidUnicode(
                    raw.to_string_lossy().into_owned(),
                ));
            }
            break;
        };
        if arg == "--" {
            break;
        }
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            break;
        };
        if flag.is_empty() {
            break;
        }

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(OsString::from(value))),
            None => (flag, None),
        };

        if matches!(name, "h" | "help") {
            return Ok(Command::Help);
        }

        let field = match name {
            "i" => Field::Source,
            "d" => Field::OutputDir,
            "n" => Field::SiteName,
            "tileColor" => Field::TileColor,
            "themeColor" => Field::ThemeColor,
            "displayMode" => Field::DisplayMode,
            _ => return Err(ArgsError::UnknownFlag(name.to_string())),
        };

        let value = match inline_value {
            Some(value) => value,
            None => {
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| ArgsError::MissingValue(name.to_string()))?
            }
        };
        match field {
            Field::Source => config.source_image = PathBuf::from(value),
            Field::OutputDir => config.output_dir = PathBuf::from(value),
            Field::SiteName => config.site_name = utf8_value(name, value)?,
            Field::TileColor => config.tile_color = utf8_value(name, value)?,
            Field::ThemeColor => config.theme_color = utf8_value(name, value)?,
            Field::DisplayMode => config.display_mode = utf8_value(name, value)?,
        }
        i += 1;
    }

    Ok(Command::Generate(config))
}

fn utf8_value(name: &str, value: OsString) -> Result<String, ArgsError> {
    value.into_string().map_err(|value| ArgsError::InvalidValue {
        flag: name.to_string(),
        value: value.to_string_lossy().into_owned(),
    })
}
