//! Unique IP Solutions CLI - terminal front-end for the marketing site.
//!
//! Renders the site's pages (home, services, portfolio, blog) from the
//! managed store and drives the contact and newsletter forms from the
//! terminal. Each subcommand corresponds to one routed page.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use uip_core::config::{AppConfig, ConfigHandle};
use uip_core::error::UipResult;
use uip_core::{logging, paths};

/// Unique IP Solutions - buy, sell, or lease intellectual property.
#[derive(Parser)]
#[command(
    name = "uniqueip",
    version,
    about = "Unique IP Solutions site client",
    long_about = "A terminal client for the Unique IP Solutions site.\n\
                   Browse the portfolio, read the blog, and request an IP valuation \
                   straight from your terminal."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page: services, featured portfolio, and testimonials.
    Home {
        /// Keep the testimonial carousel rotating until interrupted.
        #[arg(short, long)]
        watch: bool,
    },
    /// Browse the service catalog.
    Services {
        /// Service slug: selling, buying, or leasing.
        service: Option<String>,
    },
    /// Browse the portfolio of completed IP transactions.
    Portfolio {
        /// Show only one category of cases.
        #[arg(short = 'c', long)]
        category: Option<commands::portfolio::CategoryArg>,
    },
    /// Read the IP industry insights blog.
    Blog,
    /// Send a message or request an IP valuation.
    Contact {
        /// Request an IP valuation instead of a general inquiry.
        #[arg(long)]
        valuation: bool,
        /// Full name (prompted for when omitted).
        #[arg(long)]
        name: Option<String>,
        /// Email address (prompted for when omitted).
        #[arg(long)]
        email: Option<String>,
        /// Company name (optional).
        #[arg(long)]
        company: Option<String>,
        /// Message body (prompted for when omitted).
        #[arg(long)]
        message: Option<String>,
    },
    /// Subscribe to the newsletter.
    Subscribe {
        /// Email address to subscribe.
        email: String,
    },
    /// Show configuration and store connectivity.
    Status,
}

#[tokio::main]
async fn main() -> UipResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let log_dir = paths::data_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("logs");
    let _guard = logging::init_logging(log_level, &log_dir, false)?;

    // Load configuration; environment variables override the store values
    let config = if let Some(path) = cli.config.as_deref() {
        let mut config = AppConfig::load_from_file(std::path::Path::new(path))?;
        config.apply_env_overrides();
        config
    } else {
        AppConfig::load_default()?
    };

    let config_handle = ConfigHandle::new(config);

    info!("Unique IP Solutions CLI v{}", uip_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Home { watch } => commands::home::run(config_handle, watch, cli.format).await,
        Commands::Services { service } => {
            commands::services::run(service.as_deref(), cli.format).await
        }
        Commands::Portfolio { category } => {
            commands::portfolio::run(config_handle, category, cli.format).await
        }
        Commands::Blog => commands::blog::run(config_handle, cli.format).await,
        Commands::Contact {
            valuation,
            name,
            email,
            company,
            message,
        } => {
            let input = commands::contact::ContactInput {
                valuation,
                name,
                email,
                company,
                message,
            };
            commands::contact::run(config_handle, input, cli.format).await
        }
        Commands::Subscribe { email } => commands::subscribe::run(email, cli.format).await,
        Commands::Status => commands::status::run(config_handle, cli.format).await,
    }
}
