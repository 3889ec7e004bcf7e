//! Start-up configuration for the `trashlang` binary.
//!
//! Resolved once from command-line arguments and the environment, then passed
//! read-only to the read-loop.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the directory `file <name>` loads scripts from.
pub const SCRIPT_DIR_ENV: &str = "TRASHLANG_SCRIPT_DIR";
pub const DEFAULT_SCRIPT_DIR: &str = "scripts";
pub const SCRIPT_EXTENSION: &str = "txt";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown option {0}")]
    UnknownFlag(String),
    #[error("Option {0} requires a value")]
    MissingValue(String),
    #[error("Only one input file can be given, got {0} and {1}")]
    TooManyInputs(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Directory searched by the `file <name>` command
    pub script_dir: PathBuf,
    pub script_extension: String,
    /// Suppress the banner (`-q`)
    pub quiet: bool,
    /// Parse this file once and exit instead of starting the read-loop
    pub input: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            script_dir: PathBuf::from(DEFAULT_SCRIPT_DIR),
            script_extension: SCRIPT_EXTENSION.to_string(),
            quiet: false,
            input: None,
        }
    }
}

impl ReplConfig {
    /// Resolves configuration from program arguments, without the program name,
    /// and the process environment.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError> {
        Self::resolve(args, std::env::var(SCRIPT_DIR_ENV).ok())
    }

    /// Like [`ReplConfig::from_args`] with the environment value passed in.
    ///
    /// `--dir` wins over `env_dir`, which wins over the default.
    pub fn resolve<I: IntoIterator<Item = String>>(
        args: I,
        env_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = ReplConfig::default();
        let mut dir_flag: Option<PathBuf> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-q" | "--quiet" => config.quiet = true,
                "-d" | "--dir" => match args.next() {
                    Some(dir) => dir_flag = Some(PathBuf::from(dir)),
                    None => return Err(ConfigError::MissingValue(arg)),
                },
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
                _ => {
                    if let Some(previous) = &config.input {
                        return Err(ConfigError::TooManyInputs(
                            previous.display().to_string(),
                            arg,
                        ));
                    }
                    config.input = Some(PathBuf::from(arg));
                }
            }
        }

        config.script_dir = match (dir_flag, env_dir) {
            (Some(dir), _) => dir,
            (None, Some(dir)) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_SCRIPT_DIR),
        };

        Ok(config)
    }

    /// Path of the script loaded by `file <name>`.
    ///
    /// The extension is appended, so `file notes.v2` loads `notes.v2.txt`.
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.script_dir.join(format!("{}.{}", name, self.script_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ReplConfig::resolve(args(&[]), None).unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.script_dir, PathBuf::from("scripts"));
    }

    #[test]
    fn test_flags() {
        let config = ReplConfig::resolve(args(&["-q", "--dir", "demo", "main.txt"]), None).unwrap();

        assert!(config.quiet);
        assert_eq!(config.script_dir, PathBuf::from("demo"));
        assert_eq!(config.input, Some(PathBuf::from("main.txt")));
    }

    #[test]
    fn test_script_dir_precedence() {
        let from_env = ReplConfig::resolve(args(&[]), Some("env_dir".to_string())).unwrap();
        assert_eq!(from_env.script_dir, PathBuf::from("env_dir"));

        let from_flag =
            ReplConfig::resolve(args(&["-d", "flag_dir"]), Some("env_dir".to_string())).unwrap();
        assert_eq!(from_flag.script_dir, PathBuf::from("flag_dir"));

        let empty_env = ReplConfig::resolve(args(&[]), Some(String::new())).unwrap();
        assert_eq!(empty_env.script_dir, PathBuf::from("scripts"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            ReplConfig::resolve(args(&["--verbose"]), None),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            ReplConfig::resolve(args(&["-d"]), None),
            Err(ConfigError::MissingValue("-d".to_string()))
        );
        assert_eq!(
            ReplConfig::resolve(args(&["a.txt", "b.txt"]), None),
            Err(ConfigError::TooManyInputs("a.txt".to_string(), "b.txt".to_string()))
        );
        assert_eq!(
            ConfigError::MissingValue("--dir".to_string()).to_string(),
            "Option --dir requires a value"
        );
    }

    #[test]
    fn test_script_path() {
        let config = ReplConfig::resolve(args(&["-d", "scripts"]), None).unwrap();
        assert_eq!(config.script_path("hello"), PathBuf::from("scripts/hello.txt"));
        assert_eq!(config.script_path("test.v2"), PathBuf::from("scripts/test.v2.txt"));
        assert_eq!(config.script_path("notes.txt"), PathBuf::from("scripts/notes.txt.txt"));
    }
}
