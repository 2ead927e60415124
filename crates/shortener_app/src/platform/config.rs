use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::LevelFilter;

use super::logging::LogDestination;

const APP_DIR_NAME: &str = "url-shortener";
const LOG_FILENAME: &str = "shortener.log";

#[derive(Debug, Parser)]
#[command(
    name = "url-shortener",
    version,
    about = "Shorten long URLs into local short codes"
)]
pub struct Cli {
    /// Directory holding the persisted entry list.
    #[arg(long, env = "SHORTENER_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log file path (defaults to shortener.log inside the data directory).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log to stderr instead of a file.
    #[arg(long)]
    pub log_stderr: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn into_config(self) -> Result<AppConfig> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => dirs::data_local_dir()
                .map(|base| base.join(APP_DIR_NAME))
                .ok_or_else(|| {
                    anyhow!("could not determine a local data directory; pass --data-dir")
                })?,
        };

        let log_destination = if self.log_stderr {
            LogDestination::Terminal
        } else {
            LogDestination::File(
                self.log_file
                    .unwrap_or_else(|| data_dir.join(LOG_FILENAME)),
            )
        };

        let log_level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        Ok(AppConfig {
            data_dir,
            log_destination,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        Cli::try_parse_from(args).unwrap().into_config().unwrap()
    }

    #[test]
    fn explicit_data_dir_drives_log_path() {
        let config = parse(&["url-shortener", "--data-dir", "/tmp/short"]);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/short"));
        assert_eq!(
            config.log_destination,
            LogDestination::File(PathBuf::from("/tmp/short/shortener.log"))
        );
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn stderr_logging_and_verbose() {
        let config = parse(&[
            "url-shortener",
            "--data-dir",
            "/tmp/short",
            "--log-stderr",
            "-v",
        ]);

        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = parse(&[
            "url-shortener",
            "--data-dir",
            "/tmp/short",
            "--log-file",
            "/var/tmp/s.log",
        ]);

        assert_eq!(
            config.log_destination,
            LogDestination::File(PathBuf::from("/var/tmp/s.log"))
        );
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["url-shortener", "--bogus"]).is_err());
    }
}
