//! CLI argument parsing definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "loadgen", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the invocations a run would send for consecutive iterations
    Preview {
        /// Function name, e.g. word-stats-java
        #[arg(long, value_name = "NAME")]
        function: String,

        /// First iteration number
        #[arg(long, value_name = "N", default_value_t = 0)]
        iteration: u64,

        /// Number of iterations to print
        #[arg(long, value_name = "K", default_value_t = 1)]
        count: u64,

        /// Seed for unpooled payloads; random when omitted
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },

    /// Validate a response the way a run would
    Check {
        /// Function name, selects the expected-output predicate
        #[arg(long, value_name = "NAME")]
        function: String,

        /// HTTP status code of the response
        #[arg(long, value_name = "CODE")]
        status: u16,

        /// Response body
        #[arg(
            long,
            value_name = "JSON",
            conflicts_with = "body_file",
            required_unless_present = "body_file"
        )]
        body: Option<String>,

        /// File holding the response body
        #[arg(long, value_name = "PATH")]
        body_file: Option<PathBuf>,
    },

    /// List function names for workloads × runtimes
    Matrix {
        /// Comma-separated workloads (default: all)
        #[arg(long, value_name = "LIST", value_delimiter = ',')]
        workloads: Vec<String>,

        /// Comma-separated runtimes (default: all)
        #[arg(long, value_name = "LIST", value_delimiter = ',')]
        runtimes: Vec<String>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_cmd: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration in use
    Show,

    /// Print a sample configuration with defaults
    Sample,
}
