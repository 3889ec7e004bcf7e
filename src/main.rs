use std::{env, fs::read_to_string, io, path::Path, process::ExitCode};

use log::error;
use trashlang::{config::ReplConfig, parser::parser::parse, render_error, repl};

const EXIT_SUCCESS: u8 = 0;
/// Parse diagnostics or an unreadable input file
const EXIT_ERROR: u8 = 1;
const EXIT_USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let config = match ReplConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: trashlang [-q] [-d <dir>] [file]");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if let Some(input) = &config.input {
        return parse_file(input);
    }

    let stdin = io::stdin();
    match repl::start(&config, stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            error!("Read-loop stopped: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn parse_file(path: &Path) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not read {}: {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned());

    match parse(&source, file_name) {
        Ok(program) => {
            println!("{}", program);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("{}\n", render_error(e, &source));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
