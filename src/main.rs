use chips::config::Config;
use chips::display::{display_categories, display_projects, display_stats};
use chips::http::{AppState, app};
use chips::listing::Listing;
use chips::loaders::load_projects;
use chips::sort::{SortField, SortOrder};
use chips::stats::{by_category, compute_stats};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(version, author, about)]
struct Options {
    /// Use FILE instead of chips.toml
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level
    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site API
    Serve {
        /// Listen on ADDR instead of the configured address
        #[clap(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },
    /// List projects
    List {
        /// Only show projects mentioning TERM
        #[clap(short, long, value_name = "TERM", default_value = "")]
        search: String,
        /// Only show projects located in REGION
        #[clap(short, long, value_name = "REGION")]
        region: Option<String>,
        /// Sort by name, beneficiaries or status
        #[clap(long, value_name = "FIELD")]
        sort: Option<SortField>,
        /// asc or desc
        #[clap(long, value_name = "ORDER", default_value = "asc")]
        order: SortOrder,
    },
    /// Show aggregate statistics
    Stats,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("chips={level},tower_http={level}"))),
        )
        .init();
    let config = Config::discover(options.config.as_deref())?.with_env();
    let projects = load_projects(&config.dataset).await?;
    match options.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.server.bind);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(%addr, environment = %config.server.environment, "listening");
            axum::serve(listener, app(AppState::new(projects, config)))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Command::List {
            search,
            region,
            sort,
            order,
        } => {
            let listing = Listing {
                search,
                region,
                sort,
                order,
            };
            display_projects(&listing.apply(&projects));
        }
        Command::Stats => {
            display_stats(&compute_stats(&projects));
            display_categories(&by_category(&projects));
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
