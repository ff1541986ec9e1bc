//! CLI administration tool for visit-stats.
//!
//! Queries daily series, records visits, and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Daily series for a code (default: last 30 days)
//! cargo run --bin admin -- stats abc123 --from 2024-01-01 --to 2024-01-31
//!
//! # Add visits to a day (default: today, 1 visit)
//! cargo run --bin admin -- record abc123 --date 2024-01-15 --count 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `VISITS_TABLE` (required for `stats` and `record`): counter table

use visit_stats::application::services::StatsService;
use visit_stats::domain::date_range::parse_date;
use visit_stats::domain::entities::DailyStats;
use visit_stats::infrastructure::persistence::PgVisitRepository;
use visit_stats::infrastructure::persistence::pg_visit_repository::DEFAULT_PAGE_SIZE;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// Width of the longest bar in the series chart.
const BAR_WIDTH: u64 = 40;

/// CLI tool for managing visit-stats.
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
    /// Show the daily visit series for a code
    Stats {
        /// Code to report on
        code: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Add visits to a code's daily counter
    Record {
        /// Code to record visits for
        code: String,

        /// Day to record on (YYYY-MM-DD, default: today UTC)
        #[arg(short, long)]
        date: Option<String>,

        /// Number of visits to add
        #[arg(short, long, default_value_t = 1)]
        count: u64,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats { code, from, to } => handle_stats(&pool, code, from, to).await?,
        Commands::Record { code, date, count } => handle_record(&pool, code, date, count).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn visits_table() -> Option<String> {
    std::env::var("VISITS_TABLE")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn repository(pool: &PgPool) -> Arc<PgVisitRepository> {
    Arc::new(PgVisitRepository::new(Arc::new(pool.clone()), DEFAULT_PAGE_SIZE))
}

/// Prints the daily series for a code with a proportional bar per day.
///
/// # Output Format
///
/// ```text
/// 📊 Visits for abc123 (2024-01-01 → 2024-01-03)
///
///   2024-01-01      3  ████████████████████████
///   2024-01-02      0
///   2024-01-03      5  ████████████████████████████████████████
///
///   Total: 8 (2 stored records)
/// ```
async fn handle_stats(
    pool: &PgPool,
    code: String,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let service = StatsService::new(repository(pool), visits_table());

    let stats = service
        .get_daily_stats(&code, from.as_deref(), to.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load stats: {}", e))?;

    print_series(&stats);
    Ok(())
}

fn print_series(stats: &DailyStats) {
    println!(
        "{}",
        format!(
            "📊 Visits for {} ({} → {})",
            stats.code, stats.from, stats.to
        )
        .bright_blue()
        .bold()
    );
    println!();

    let max = stats.series.iter().map(|p| p.count).max().unwrap_or(0);

    for point in &stats.series {
        let bar_len = if max == 0 {
            0
        } else {
            (point.count * BAR_WIDTH).div_ceil(max)
        };
        let count = if point.count == 0 {
            point.count.to_string().bright_black()
        } else {
            point.count.to_string().bright_white()
        };

        println!(
            "  {}  {:>6}  {}",
            point.date.to_string().cyan(),
            count,
            "█".repeat(bar_len as usize).green()
        );
    }

    println!();
    println!(
        "  Total: {} ({} stored records)",
        stats.total.to_string().bright_green().bold(),
        stats.raw_items_count
    );
    println!();
}

/// Adds visits to a day's counter and prints the new value.
async fn handle_record(
    pool: &PgPool,
    code: String,
    date: Option<String>,
    count: u64,
) -> Result<()> {
    let table = visits_table().context("VISITS_TABLE must be set")?;

    if code.is_empty() {
        anyhow::bail!("Code must not be empty");
    }

    let date = match date {
        Some(d) => parse_date(&d)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", d))?,
        None => Utc::now().date_naive(),
    };

    let updated = repository(pool)
        .record_visits(&table, &code, date, count)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to record visits: {}", e))?;

    println!(
        "{} {} on {}: {}",
        "✅ Recorded".green().bold(),
        code.cyan(),
        date.to_string().bright_white(),
        updated.to_string().bright_green().bold()
    );

    Ok(())
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

            println!("  PostgreSQL: {}", version.bright_white());
            match visits_table() {
                Some(table) => println!("  Visits table: {}", table.bright_white()),
                None => println!("  Visits table: {}", "not configured".yellow()),
            }
            println!();
        }
    }

    Ok(())
}
