//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster_persistence::DEFAULT_FILE_NAME;

/// Environment variable naming the record file.
pub const RECORDS_FILE_ENV: &str = "ROSTER_RECORDS_FILE";

/// Roster - flat-file employee records
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the record file
    #[arg(short, long, env = RECORDS_FILE_ENV, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a new employee record
    Add {
        /// Employee ID
        id: String,

        /// Employee name
        name: String,

        /// Employee department
        department: String,
    },

    /// Display all records
    List {
        /// Output format (table, json, brief)
        #[arg(short = 'o', long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the record file path, using the default if not specified.
    pub fn records_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_add() {
        let cli = Cli::parse_from(["roster", "add", "7", "Dana", "Ops"]);
        match cli.command {
            Commands::Add {
                id,
                name,
                department,
            } => {
                assert_eq!(id, "7");
                assert_eq!(name, "Dana");
                assert_eq!(department, "Ops");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parse_list_default_format() {
        let cli = Cli::parse_from(["roster", "list"]);
        match cli.command {
            Commands::List { format } => assert_eq!(format, OutputFormat::Table),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_list_json() {
        let cli = Cli::parse_from(["roster", "list", "--format", "json"]);
        match cli.command {
            Commands::List { format } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_file_flag() {
        let cli = Cli::parse_from(["roster", "list", "--file", "/tmp/staff.txt"]);
        assert_eq!(cli.records_file(), PathBuf::from("/tmp/staff.txt"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["roster"]).is_err());
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["roster", "-vvv", "list"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
