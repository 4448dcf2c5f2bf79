//! CLI administration tool for short-url.
//!
//! Creates and resolves short ids and performs database checks directly
//! against the store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Resolve a short id
//! cargo run --bin admin -- resolve Xy3_aB-q
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use short_url::application::services::UrlService;
use short_url::domain::repositories::UrlRepository;
use short_url::infrastructure::cache::NullCache;
use short_url::infrastructure::persistence::PgUrlRepository;
use short_url::utils::id_generator::OsIdGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short id for a URL
    Shorten {
        /// Absolute http(s) URL to shorten
        url: String,
    },

    /// Print the URL behind a short id
    Resolve {
        /// Short id returned by `shorten`
        id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Shorten { url } => shorten(&url_service(&pool), &url).await?,
        Commands::Resolve { id } => resolve(&url_service(&pool), &id).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool.clone()))
}

/// Builds a service on the database store with caching disabled.
fn url_service(pool: &PgPool) -> UrlService {
    UrlService::new(
        Arc::new(repository(pool)),
        Arc::new(OsIdGenerator),
        Arc::new(NullCache::new()),
    )
}

async fn shorten(service: &UrlService, url: &str) -> Result<()> {
    let mapping = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!();
    println!("  Id:  {}", mapping.id.bright_yellow().bold());
    println!("  URL: {}", mapping.original_url.cyan());
    println!();

    Ok(())
}

async fn resolve(service: &UrlService, id: &str) -> Result<()> {
    match service.resolve(id).await {
        Ok(url) => {
            println!("  {} → {}", id.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(short_url::AppError::NotFound { .. }) => {
            println!("{}", format!("  No URL stored under '{}'", id).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve id: {}", e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository(pool)
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let urls_count = repository(pool)
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Stored URLs: {}",
                urls_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
