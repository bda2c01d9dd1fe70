use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

const DEFAULT_DATA_FILE: &str = "finances.csv";

/// finance-tracker: record and review your income, expenses and liabilities.
///
/// Reads one command per line from stdin; type `help` for the list of commands.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// Pipe-delimited file the transactions are loaded from and saved to.
    #[arg(long, env = "FINANCE_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Keep transactions in memory only, nothing is read or written.
    #[arg(long)]
    in_memory: bool,

    /// Logging verbosity written to stderr: off, error, warn, info, debug, trace.
    #[arg(long, env = "FINANCE_LOG_LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    /// Enable debug commands such as `random`.
    #[arg(short, long)]
    debug: bool
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StorageBackend {
    Csv(PathBuf),
    Memory
}

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: StorageBackend,
    pub log_level: LevelFilter,
    pub debug: bool
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let backend = if args.in_memory {
            StorageBackend::Memory
        } else {
            StorageBackend::Csv(args.data_file)
        };

        Self {
            backend,
            log_level: args.log_level,
            debug: args.debug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_csv_file_and_warn_level() {
        let config = Config::from(Args::parse_from(["finance-tracker"]));

        assert_eq!(config.backend, StorageBackend::Csv(PathBuf::from(DEFAULT_DATA_FILE)));
        assert_eq!(config.log_level, LevelFilter::WARN);
        assert!(!config.debug);
    }

    #[test]
    fn test_in_memory_flag_selects_memory_backend() {
        let config = Config::from(Args::parse_from(["finance-tracker", "--in-memory", "--log-level", "debug", "-d"]));

        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert!(config.debug);
    }
}
