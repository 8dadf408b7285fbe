//! CLI administration tool for user-directory.
//!
//! Runs listing queries and maintenance tasks without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show server version and user count
//! cargo run --bin admin -- db info
//!
//! # Print a page of the listing straight from the database
//! cargo run --bin admin -- users list --search alice --page 2
//!
//! # Drop every cached listing page from Redis
//! cargo run --bin admin -- cache purge
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*`: PostgreSQL connection (db and users commands)
//! - `REDIS_URL` or `REDIS_*`: Redis connection (cache commands)

use user_directory::application::services::{DEFAULT_CACHE_TTL, UserService};
use user_directory::config::Config;
use user_directory::domain::entities::UserPage;
use user_directory::domain::user_query::UserQuery;
use user_directory::infrastructure::cache::{CacheService, NullCache, RedisCache};
use user_directory::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Query users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Page cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
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

/// User query subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// Print one page of the listing, bypassing the cache
    List {
        /// Substring matched against name or email
        #[arg(short, long)]
        search: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u64,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Remove every cached listing page
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
        Commands::Users { action } => handle_users_action(action, connect().await?).await?,
        Commands::Cache { action } => handle_cache_action(action).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Failed to count users (have migrations been applied?)")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Users:      {}", users.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Handles user query commands.
async fn handle_users_action(action: UsersAction, pool: PgPool) -> Result<()> {
    match action {
        UsersAction::List { search, page } => {
            let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));
            let service = UserService::new(
                repository,
                Arc::new(NullCache::new()),
                DEFAULT_CACHE_TTL,
            );

            let query = UserQuery::new(search, page);
            let result = service
                .fetch_page(&query)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

            print_page(&query, &result);
        }
    }

    Ok(())
}

/// Prints a listing page as a table.
///
/// # Output Format
///
/// ```text
/// 👥 Users matching "alice"
///
///   ID     Name                      Email                          Phone
///   ──────────────────────────────────────────────────────────────────────────────
///   1      Alice                     alice@x.io                     555-0100
///
///   Page 1 of 1 (1 total)
/// ```
fn print_page(query: &UserQuery, page: &UserPage) {
    if query.search().is_empty() {
        println!("{}", "👥 Users".bright_blue().bold());
    } else {
        println!(
            "{} {}",
            "👥 Users matching".bright_blue().bold(),
            format!("\"{}\"", query.search()).cyan()
        );
    }
    println!();

    if page.is_empty() {
        println!("{}", "  No users found".yellow());
    } else {
        println!(
            "  {:<6} {:<25} {:<30} {}",
            "ID".bright_white().bold(),
            "Name".bright_white().bold(),
            "Email".bright_white().bold(),
            "Phone".bright_white().bold()
        );
        println!("  {}", "─".repeat(78).bright_black());

        for user in &page.users {
            println!(
                "  {:<6} {:<25} {:<30} {}",
                user.id.to_string().bright_black(),
                user.name.cyan(),
                user.email,
                user.phone.bright_black()
            );
        }
    }

    println!();
    println!(
        "  Page {} of {} ({} total)",
        page.page.to_string().bright_white().bold(),
        page.total_pages.to_string().bright_white().bold(),
        page.total.to_string().bright_white().bold()
    );
    println!();
}

/// Handles cache maintenance commands.
async fn handle_cache_action(action: CacheAction) -> Result<()> {
    match action {
        CacheAction::Purge { yes } => {
            println!("{}", "🧹 Purge Page Cache".bright_blue().bold());
            println!();

            let redis_url = Config::load_redis_url()
                .context("REDIS_URL or REDIS_HOST must be set to purge the shared cache")?;

            let cache = RedisCache::connect(&redis_url)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every cached listing page?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let removed = cache
                .purge()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge cache: {}", e))?;

            println!();
            println!(
                "{} {}",
                "✅ Removed".green().bold(),
                format!("{} cached pages", removed).bright_white()
            );
            println!();
        }
    }

    Ok(())
}
