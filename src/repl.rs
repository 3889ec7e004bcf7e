//! Line-oriented read-loop over the parser.

use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use thiserror::Error;

use crate::{config::ReplConfig, parser::parser::parse, render_error};

lazy_static! {
    static ref FILE_COMMAND: Regex = Regex::new(r"^\s*file\s+(\S+)\s*$").unwrap();
}

pub const PROMPT: &str = ">> ";

const BANNER: &str = r"
   ___/-\___
  |---------|
   | | | | |
   | | | | |
   | | | | |
   |_______|

  TrashLang v0.1
";

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parses `source` and renders the outcome as the read-loop prints it.
///
/// Either the program rendering, or `Parser errors:` followed by one rendered
/// diagnostic per error.
pub fn render_parse(source: &str, file: Option<String>) -> String {
    match parse(source, file) {
        Ok(program) => program.to_string(),
        Err(errors) => {
            let mut out = String::from("Parser errors:");
            for error in &errors {
                out.push('\n');
                out.push_str(&render_error(error, source));
            }
            out
        }
    }
}

/// Evaluates one input line.
///
/// `file <name>` loads and parses `<name>` from the configured script
/// directory, anything else is parsed as source.
pub fn eval_line(config: &ReplConfig, line: &str) -> Result<String, ReplError> {
    if let Some(captures) = FILE_COMMAND.captures(line) {
        let path = config.script_path(&captures[1]);
        debug!("Loading script {}", path.display());

        return eval_file(&path);
    }

    Ok(render_parse(line, None))
}

/// Reads and parses a whole file, naming diagnostics after it.
pub fn eval_file(path: &Path) -> Result<String, ReplError> {
    let source = read_to_string(path).map_err(|source| ReplError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(render_parse(&source, Some(file_name)))
}

/// Runs the read-loop until `input` is exhausted.
///
/// Script loading failures are reported on `output` and the loop carries on.
/// Only failures to read `input` or write `output` end it early.
pub fn start<R: BufRead, W: Write>(
    config: &ReplConfig,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    if !config.quiet {
        writeln!(output, "{}", BANNER)?;
    }

    info!("Read-loop started, scripts from {}", config.script_dir.display());

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match eval_line(config, trimmed) {
            Ok(rendered) => writeln!(output, "{}", rendered)?,
            Err(error) => writeln!(output, "{}", error)?,
        }
        writeln!(output)?;
    }

    info!("Read-loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn quiet_config() -> ReplConfig {
        ReplConfig {
            quiet: true,
            ..ReplConfig::default()
        }
    }

    #[test]
    fn test_render_parse_program() {
        assert_eq!(render_parse("var x = 1 + 2 * 3;", None), "var x = (1+(2*3));");
    }

    #[test]
    fn test_render_parse_errors() {
        let rendered = render_parse("var x 5;", None);

        assert_eq!(
            rendered,
            "Parser errors:\n\
             Error: Expected token ASSIGN, got INT instead\n\
             -> shell\n  |\n\
             1 | var x 5;\n  \
             | ------^"
        );
    }

    #[test]
    fn test_file_command_matching() {
        assert!(FILE_COMMAND.is_match("file hello"));
        assert!(FILE_COMMAND.is_match("  file   hello  "));
        assert!(!FILE_COMMAND.is_match("file"));
        assert!(!FILE_COMMAND.is_match("filename"));
        assert!(!FILE_COMMAND.is_match("file a b"));
    }

    #[test]
    fn test_missing_script_is_reported() {
        let config = ReplConfig {
            script_dir: PathBuf::from("does/not/exist"),
            ..quiet_config()
        };

        let error = eval_line(&config, "file nothing").unwrap_err();
        assert!(error.to_string().starts_with("Could not read does/not/exist/nothing.txt"));

        let error = eval_line(&config, "file test.v2").unwrap_err();
        assert!(error.to_string().starts_with("Could not read does/not/exist/test.v2.txt"));
    }

    #[test]
    fn test_start_loop() {
        let input = Cursor::new("var x = 5;\n\n-a * b\n");
        let mut output = Vec::new();

        start(&quiet_config(), input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, ">> var x = 5;\n\n>> >> ((-a)*b)\n\n>> ");
    }

    #[test]
    fn test_start_loop_continues_after_io_error() {
        let config = ReplConfig {
            script_dir: PathBuf::from("does/not/exist"),
            ..quiet_config()
        };
        let input = Cursor::new("file missing\ntrue\n");
        let mut output = Vec::new();

        start(&config, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Could not read"));
        assert!(output.ends_with(">> true\n\n>> "));
    }

    #[test]
    fn test_banner() {
        let mut output = Vec::new();
        start(&ReplConfig::default(), Cursor::new(""), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("TrashLang"));
        assert!(output.ends_with(PROMPT));
    }
}
