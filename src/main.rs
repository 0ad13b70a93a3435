use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "pingarr")]
#[command(about = "Notification preferences companion for your media request server")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.pingarr/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the desktop app
    Gui,

    /// Print the current notification settings for the configured user
    Status,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Status) => {
            cli::status::status_command(cli.config.as_deref())?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force)?;
        }
        Some(Commands::Gui) | None => {
            pingarr::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
