use anyhow::{Context, Result};
use clap::Parser;
use loadgen_config::{ConfigLoader, LogFormat, LoadgenConfig, LoggingConfig};
use std::path::PathBuf;
use tracing::{debug, info, warn, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};

/// Load configuration from file or environment
fn load_config(config_path: Option<&PathBuf>) -> Result<LoadgenConfig> {
    let loader = ConfigLoader::new();

    match config_path {
        Some(path) => {
            if path.exists() {
                info!("Loading configuration from: {:?}", path);
                loader
                    .from_file(path)
                    .context(format!("Failed to load configuration from {:?}", path))
            } else {
                warn!("Configuration file not found: {:?}. Using defaults.", path);
                loader
                    .from_env()
                    .context("Failed to load configuration from environment")
            }
        }
        None => {
            debug!("No configuration file specified. Loading from environment or defaults.");
            loader
                .from_env()
                .context("Failed to load configuration from environment")
        }
    }
}

/// Filter used while configuration loads: `--log-level`, then `RUST_LOG`,
/// then `info`.
fn bootstrap_filter(log_level: Option<&String>) -> EnvFilter {
    log_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn bootstrap_subscriber<W>(
    log_level: Option<&String>,
    make_writer: W,
) -> impl Subscriber + Send + Sync
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(bootstrap_filter(log_level))
        .with_writer(make_writer)
        .finish()
}

/// Load configuration under a scoped bootstrap subscriber so fallback
/// warnings are not lost before the configured subscriber exists.
fn load_config_logged<W>(
    log_level: Option<&String>,
    config_path: Option<&PathBuf>,
    make_writer: W,
) -> Result<LoadgenConfig>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let bootstrap = bootstrap_subscriber(log_level, make_writer);
    tracing::subscriber::with_default(bootstrap, || load_config(config_path))
}

/// Initialize tracing on stderr so stdout only carries command output.
///
/// Level precedence: `--log-level`, then `RUST_LOG`, then the configured level.
fn init_tracing(log_level: Option<&String>, logging: &LoggingConfig) -> Result<()> {
    let env_filter = match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', falling back to 'info'", level);
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.level.as_filter())),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Text => builder.init(),
    }

    debug!("Tracing initialized with {:?} format", logging.format);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = load_config_logged(
        cli.log_level.as_ref(),
        cli.config.as_ref(),
        std::io::stderr,
    )?;
    init_tracing(cli.log_level.as_ref(), &config.logging)?;

    match &cli.command {
        Some(Commands::Preview {
            function,
            iteration,
            count,
            seed,
        }) => commands::preview::handle_preview(&config, function, *iteration, *count, *seed),
        Some(Commands::Check {
            function,
            status,
            body,
            body_file,
        }) => commands::check::handle_check(
            &config,
            function,
            *status,
            body.as_deref(),
            body_file.as_deref(),
        ),
        Some(Commands::Matrix {
            workloads,
            runtimes,
        }) => commands::matrix::handle_matrix(workloads, runtimes),
        Some(Commands::Config { config_cmd }) => match config_cmd {
            ConfigCommands::Show => commands::config::handle_config_show(&config),
            ConfigCommands::Sample => commands::config::handle_config_sample(),
        },
        None => {
            // If no subcommand is provided, print help
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().context("Failed to print help")?;
            println!();
            Ok(())
        }
    }
}
