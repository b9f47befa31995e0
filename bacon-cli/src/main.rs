use anyhow::{Context, Result};
use bacon::logging::{self, LogConfig};
use bacon::App;
use bacon_store::config::Settings;
use bacon_store::db::Database;
use bacon_store::state::AppState;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Bacon - a tiny social network that lives in a SQLite file
#[derive(Parser)]
#[command(name = "bacon")]
#[command(about = "A command-line social media simulator")]
#[command(version)]
struct Cli {
    /// Path to the SQLite database file (overrides settings.toml and BACON_DATABASE_PATH)
    #[arg(long, short)]
    database: Option<String>,

    /// Log in as this user instead of being prompted
    #[arg(long, short)]
    username: Option<String>,

    /// Insert demo users (alice, bob, charlie) before starting
    #[arg(long)]
    seed: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    logging::init_logging(&LogConfig::from_verbosity(cli.verbose))?;

    let settings = Settings::new().context("Failed to load settings")?;
    let db_path = settings.database_path(cli.database);

    let db = Database::new(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path))?;
    db.initialize()
        .context("Failed to initialize database schema")?;
    if cli.seed {
        db.seed_demo_users().context("Failed to seed demo users")?;
    }
    tracing::info!("Database {} ready", db_path);

    let state = AppState::new(db);
    let app = App::start(
        state,
        io::stdin().lock(),
        io::stdout().lock(),
        StdRng::from_entropy(),
        cli.username,
    )?;

    if let Some(mut app) = app {
        app.run().context("Terminal I/O failed")?;
    }

    Ok(())
}
