//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use crewgate_core::config;
use crewgate_core::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "crewgate")]
#[command(version)]
#[command(about = "Crew registration terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the auth server (overrides CREWGATE_API_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Write logs to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in with an existing account
    Login {
        /// Account ID
        #[arg(long)]
        id: String,

        /// Account password
        #[arg(long, env = "CREWGATE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a new account
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Unit
        #[arg(long)]
        unit: String,

        /// Assigned tank
        #[arg(long)]
        tank: String,

        /// Position
        #[arg(long)]
        rank: String,

        /// Account ID
        #[arg(long)]
        id: String,

        /// Account password
        #[arg(long, env = "CREWGATE_PASSWORD", hide_env_values = true)]
        password: String,

        /// Password confirmation (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Check that the auth server is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Save the auth server base URL
    SetApiUrl {
        /// Base URL, e.g. http://127.0.0.1:5000
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = if cli.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    let _log_guard = logging::init(target).context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    let Cli {
        command, api_url, ..
    } = cli;
    let api_url = api_url.as_deref();

    // default to the interactive client
    let Some(command) = command else {
        return commands::ui::run(&config, api_url).await;
    };

    match command {
        Commands::Login { id, password } => {
            commands::auth::login(&config, api_url, id, password).await
        }
        Commands::Register {
            name,
            unit,
            tank,
            rank,
            id,
            password,
            confirm_password,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            commands::auth::register(
                &config,
                api_url,
                commands::auth::RegisterArgs {
                    name,
                    unit,
                    tank,
                    rank,
                    id,
                    password,
                    confirm_password,
                },
            )
            .await
        }
        Commands::Health => commands::health::run(&config, api_url).await,
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetApiUrl { url } => commands::config::set_api_url(&url),
        },
    }
}
