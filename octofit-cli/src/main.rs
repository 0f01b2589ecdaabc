//! OctoFit - fitness tracker backend and CLI
//!
//! Runs the REST API with the embedded web UI, seeds demo data, and lists
//! collections from a running server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use octofit::cli;
use octofit::db;
use octofit::server;

#[derive(Parser, Debug)]
#[command(name = "octofit")]
#[command(author = "OctoFit Team")]
#[command(version)]
#[command(about = "OctoFit Tracker backend and CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port for the API and web UI
    #[arg(short, long, default_value = "8000", env = "OCTOFIT_PORT", global = true)]
    port: u16,

    /// Data directory (defaults to ~/.octofit, then ./data)
    #[arg(long, env = "OCTOFIT_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// OctoFit server URL for CLI commands
    #[arg(long, default_value = "http://localhost:8000", env = "OCTOFIT_URL", global = true)]
    url: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server with the web UI
    Serve {
        /// Open the web UI in a browser
        #[arg(long)]
        open: bool,
    },
    /// Replace all collections with demo data
    Populate,
    /// List a collection from a running server
    List(cli::ListArgs),
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &cli.command {
        Some(Commands::Serve { open }) => serve(&cli, *open).await?,
        Some(Commands::Populate) => populate(&cli).await?,
        Some(Commands::List(args)) => {
            let client = cli::CliClient::new(&cli.url)?;
            args.execute(&client).await?;
        }
        Some(Commands::Version) => {
            println!("OctoFit {}", env!("CARGO_PKG_VERSION"));
        }
        None => serve(&cli, false).await?,
    }

    Ok(())
}

async fn open_database(cli: &Cli) -> anyhow::Result<db::Database> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(get_data_dir);
    info!("Data directory: {}", data_dir.display());

    db::Database::new(&data_dir.join("octofit.db"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize database: {}", e))
}

async fn populate(cli: &Cli) -> anyhow::Result<()> {
    let db = open_database(cli).await?;
    let summary = db::seed::populate(db.pool()).await?;
    db.close().await;

    println!(
        "Populated {} users, {} team, {} activities and {} workouts.",
        summary.users, summary.teams, summary.activities, summary.workouts
    );
    Ok(())
}

async fn serve(cli: &Cli, open_browser: bool) -> anyhow::Result<()> {
    info!("Starting OctoFit...");

    let db = open_database(cli).await?;
    if db.is_empty().await? {
        info!("Empty database - seeding demo data");
        db::seed::populate(db.pool()).await?;
    }

    let server_handle = server::start_server(cli.port, db.clone()).await?;

    let ui_url = format!("http://127.0.0.1:{}", cli.port);
    if open_browser {
        info!("Opening browser...");
        if let Err(e) = open::that(&ui_url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    info!("");
    info!("   OctoFit is running");
    info!("   Web UI: {}", ui_url);
    info!("   API:    {}/api/activities", ui_url);
    info!("");
    info!("   Press Ctrl+C to stop");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
        result = server_handle => {
            match result {
                Ok(Err(e)) => tracing::error!("Server error: {}", e),
                Err(e) => tracing::error!("Server task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
    }

    db.close().await;
    info!("OctoFit stopped.");
    Ok(())
}

/// Get the data directory for OctoFit
/// Uses: ~/.octofit > ./data ($OCTOFIT_DATA_DIR is handled by clap)
fn get_data_dir() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        let octofit_dir = home.join(".octofit");
        if std::fs::create_dir_all(&octofit_dir).is_ok() {
            return octofit_dir;
        }
    }

    let local_dir = PathBuf::from("./data");
    let _ = std::fs::create_dir_all(&local_dir);
    local_dir
}
