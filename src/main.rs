use analytics::Dashboard;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, DEFAULT_CONFIG_PATH, LogLevel};
use events::{DashboardRequest, respond};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod render;

/// The main entry point for the Tradeboard dashboard.
fn main() -> Result<()> {
    // Load TRADEBOARD_* overrides from a .env file when one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("TRADEBOARD_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = configuration::read_config(&config_path)
        .with_context(|| format!("Failed to load dashboard data from {}", config_path.display()))?;

    // Validate only once the subscriber is installed.
    let _guard = init_tracing(cli.log_level.unwrap_or(config.logging.level));
    config
        .validate()
        .with_context(|| format!("Invalid dashboard data in {}", config_path.display()))?;
    tracing::info!(
        path = %config_path.display(),
        trades = config.trades.len(),
        "Dashboard data loaded."
    );

    let dashboard = build_dashboard(&config)?;
    let request = cli.command.into_request();
    let view = respond(&dashboard, &request)
        .with_context(|| format!("Failed to compute the {} view", request_name(&request)))?;

    let output = if cli.json {
        view.to_json()?
    } else {
        render::render(&view, dashboard.title())
    };
    println!("{}", output);

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Read-only analytics for a trading account: balance curve, win/loss
/// distribution, benchmark comparison and a filterable trade history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dashboard TOML file (defaults to $TRADEBOARD_CONFIG, then ./dashboard.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the view as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// Overrides `logging.level` from the configuration file.
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline metric cards.
    Summary,
    /// Cumulative account balance, one point per closed trade.
    Performance,
    /// Win/loss split and long/short breakdown.
    Distribution,
    /// Portfolio versus market benchmarks.
    Benchmarks,
    /// The trade history, optionally filtered.
    Trades(TradesArgs),
    /// Insights and tips derived from the account statistics.
    Insights,
}

#[derive(Parser)]
struct TradesArgs {
    /// Case-insensitive text matched against the ticket or the instrument.
    #[arg(long, default_value = "")]
    search: String,

    /// One of: all, buy, sell.
    #[arg(long = "type", default_value = "all")]
    trade_type: String,

    /// One of: all, profit, loss.
    #[arg(long, default_value = "all")]
    result: String,
}

impl Commands {
    fn into_request(self) -> DashboardRequest {
        match self {
            Commands::Summary => DashboardRequest::Summary,
            Commands::Performance => DashboardRequest::Performance,
            Commands::Distribution => DashboardRequest::Distribution,
            Commands::Benchmarks => DashboardRequest::Benchmarks,
            Commands::Trades(args) => DashboardRequest::Trades {
                search: args.search,
                trade_type: args.trade_type,
                result: args.result,
            },
            Commands::Insights => DashboardRequest::Insights,
        }
    }
}

fn request_name(request: &DashboardRequest) -> &'static str {
    match request {
        DashboardRequest::Summary => "summary",
        DashboardRequest::Performance => "performance",
        DashboardRequest::Distribution => "distribution",
        DashboardRequest::Benchmarks => "benchmarks",
        DashboardRequest::Trades { .. } => "trades",
        DashboardRequest::Insights => "insights",
    }
}

// ==============================================================================
// Setup
// ==============================================================================

/// Logs go to stderr through a non-blocking writer; `RUST_LOG` wins over the
/// configured level.
fn init_tracing(level: LogLevel) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();

    guard
}

fn build_dashboard(config: &Config) -> Result<Dashboard> {
    let trades = config.trade_log()?;
    Ok(Dashboard::new(
        trades,
        config.performance.clone(),
        config.statistics.clone(),
        config.benchmarks.clone(),
        config.dashboard.starting_balance,
    )
    .with_title(config.dashboard.title.clone()))
}
