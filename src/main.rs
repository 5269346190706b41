//! hexsift entry point.

use clap::Parser;
use hexsift::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// Interactive hex viewer with inline JSON region detection.
#[derive(Parser, Debug)]
#[command(name = "hexsift")]
#[command(version)]
#[command(about = "TUI hex viewer that detects and pretty-prints embedded JSON regions")]
pub struct Args {
    /// File whose bytes to view (a demo buffer is generated if omitted)
    pub file: Option<PathBuf>,

    /// Starting layout
    #[arg(short, long, value_parser = ["hex", "smart"])]
    pub layout: Option<String>,

    /// Size of the generated demo buffer when no file is given
    #[arg(long)]
    pub sample_size: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Full precedence chain: defaults -> config file -> env vars -> CLI
    let config = {
        let config_file = hexsift::config::load_config_with_precedence(args.config.clone())?;
        let merged = hexsift::config::merge_config(config_file);
        let with_env = hexsift::config::apply_env_overrides(merged);
        hexsift::config::apply_cli_overrides(with_env, args.layout.clone(), args.sample_size)
    };

    hexsift::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration resolved");

    let data = match &args.file {
        Some(path) => std::fs::read(path)?,
        None => hexsift::sample::generate(config.sample_size),
    };

    let layout_index = hexsift::model::layout::index_for(&config.layout).unwrap_or(0);
    hexsift::view::run_with_data(data, layout_index)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["hexsift", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["hexsift"]);
        assert_eq!(args.file, None);
        assert_eq!(args.layout, None);
        assert_eq!(args.sample_size, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn file_path_populates_file_field() {
        let args = Args::parse_from(["hexsift", "dump.bin"]);
        assert_eq!(args.file, Some(PathBuf::from("dump.bin")));
    }

    #[test]
    fn layout_accepts_known_names() {
        let args = Args::parse_from(["hexsift", "--layout", "smart"]);
        assert_eq!(args.layout.as_deref(), Some("smart"));
    }

    #[test]
    fn layout_rejects_unknown_names() {
        let result = Args::try_parse_from(["hexsift", "--layout", "fancy"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn sample_size_parses_as_number() {
        let args = Args::parse_from(["hexsift", "--sample-size", "2048"]);
        assert_eq!(args.sample_size, Some(2048));
    }

    #[test]
    fn config_path_flag() {
        let args = Args::parse_from(["hexsift", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
