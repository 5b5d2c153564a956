//! `favgen-preset`: generate from fixed values, no flags

use favgen::GenerateConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    favgen_cli::init_tracing();
    favgen_cli::run(&GenerateConfig::preset())
}
