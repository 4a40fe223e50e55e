//! Command-line arguments.

use crate::config::EngineConfig;

pub const USAGE: &str = "\
Gridsnake - Terminal Snake

Usage: gridsnake [options]

Options:
  --speed <ms>  Tick interval in milliseconds (default 400)
  --verbose     Debug-level logging
  --version     Show version information
  --help        Show this help message

Controls:
  Arrows        Steer
  Enter / R     Retry after game over
  Q / Esc       Quit";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play { config: EngineConfig, verbose: bool },
    Version,
    Help,
}

/// Parse arguments (without the program name). Errors are user-facing messages.
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = EngineConfig::default();
    let mut verbose = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--verbose" => verbose = true,
            "--speed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--speed needs a value in milliseconds".to_string())?;
                let ms = value
                    .as_ref()
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid --speed value: {}", value.as_ref()))?;
                config = config.with_tick_interval_ms(ms);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(CliCommand::Play { config, verbose })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_plays_with_defaults() {
        let command = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(
            command,
            CliCommand::Play {
                config: EngineConfig::default(),
                verbose: false
            }
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(["-v"]).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(["--help"]).unwrap(), CliCommand::Help);
        assert_eq!(parse_args(["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_speed_and_verbose() {
        match parse_args(["--speed", "150", "--verbose"]).unwrap() {
            CliCommand::Play { config, verbose } => {
                assert_eq!(config.tick_interval_ms, 150);
                assert!(verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_speed_errors() {
        assert!(parse_args(["--speed"]).is_err());
        assert!(parse_args(["--speed", "fast"]).is_err());
        let err = parse_args(["--speed", "1"]).unwrap_err();
        assert!(err.contains("tick interval"));
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse_args(["--obstacles"]).unwrap_err(),
            "Unknown argument: --obstacles"
        );
    }
}
