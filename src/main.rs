use arrforms::client::HttpClient;
use arrforms::commands;
use arrforms::config;
use arrforms::data_provider::SettingsApi;
use arrforms::swaparr::SwaparrAction;
use arrforms::types::AppType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "arrforms")]
#[command(
    about = "Settings forms for the media automation dashboard",
    long_about = "Settings forms for the media automation dashboard\n\nRenders settings forms as HTML, extracts submitted forms back into settings, and talks to the dashboard backend."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Answer backend calls with fixture data
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SwaparrCommand {
    /// Show whether Swaparr is enabled and its session statistics
    Status,
    /// Check the Swaparr configuration
    Test,
    /// Start a Swaparr cycle now
    Run,
    /// Reset the session statistics
    Reset,
}

impl SwaparrCommand {
    fn to_action(self) -> Option<SwaparrAction> {
        match self {
            SwaparrCommand::Status => None,
            SwaparrCommand::Test => Some(SwaparrAction::Test),
            SwaparrCommand::Run => Some(SwaparrAction::Run),
            SwaparrCommand::Reset => Some(SwaparrAction::Reset),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the settings form for an app as HTML
    Render {
        /// App type (sonarr, radarr, lidarr, readarr, whisparr, eros, swaparr, general)
        app: AppType,

        /// Stored settings as JSON (optional, defaults to empty settings)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Extract settings JSON from a urlencoded form submission
    Extract {
        /// App type (sonarr, radarr, lidarr, readarr, whisparr, eros, swaparr, general)
        app: AppType,

        /// Urlencoded form body (optional, reads stdin when omitted)
        #[arg(short, long)]
        form: Option<PathBuf>,
    },
    /// Test the connection to an app instance
    TestConnection {
        /// App type (sonarr, radarr, lidarr, readarr, whisparr, eros)
        app: AppType,

        /// Instance API URL
        #[arg(short, long)]
        url: String,

        /// Instance API key
        #[arg(short, long)]
        key: String,
    },
    /// Query or control Swaparr
    Swaparr {
        #[arg(value_enum)]
        command: SwaparrCommand,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("request_timeout_secs: {} seconds", cfg.request_timeout_secs);
    println!();
    println!("[forms]");
    println!("standalone: {}", cfg.forms.standalone);
    println!("stylesheet: {}", cfg.forms.stylesheet.as_deref().unwrap_or("(none)"));
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_client(cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn SettingsApi>> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Ok(Arc::new(arrforms::dev::mock_client::MockClient::new()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let client = HttpClient::from_config(config)?;
    tracing::debug!("Using backend at {}", config.api_base_url);
    Ok(Arc::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(cli: &Cli, config: &config::Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Render { app, settings } => {
            commands::render::run(*app, settings.as_deref(), &config.forms)
        }
        Commands::Extract { app, form } => commands::extract::run(*app, form.as_deref()),
        Commands::TestConnection { app, url, key } => {
            let client = create_client(cli, config)?;
            commands::test_connection::run(client, *app, url, key).await
        }
        Commands::Swaparr { command } => {
            let client = create_client(cli, config)?;
            match command.to_action() {
                Some(action) => commands::swaparr::run(client.as_ref(), action).await,
                None => commands::swaparr::status(client.as_ref()).await,
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = cli.command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&cli, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
