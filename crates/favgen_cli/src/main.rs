//! `favgen`: flag-driven favicon set generator

use favgen_cli::args::{self, Command};
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    favgen_cli::init_tracing();

    let argv: Vec<OsString> = env::args_os().skip(1).collect();
    let config = match args::parse(&argv) {
        Ok(Command::Generate(config)) => config,
        Ok(Command::Help) => {
            print!("{}", args::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprint!("{}", args::usage());
            return ExitCode::from(favgen_cli::EXIT_USAGE);
        }
    };

    favgen_cli::run(&config)
}
