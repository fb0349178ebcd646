//! CLI tool for running cinerank queries from a terminal.
//!
//! Runs the same services as the HTTP API against the configured store,
//! which makes it handy for checking a seed file or a database snapshot
//! without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Top films, optionally filtered
//! cargo run --bin admin -- popular --count 5 --genre 1 --year 1999
//!
//! # A director's films by release year
//! cargo run --bin admin -- director 3 --sort year
//!
//! # Films two users both like
//! cargo run --bin admin -- common 1 2
//!
//! # Recommendations for a user
//! cargo run --bin admin -- recommend 1
//!
//! # Search (prompts for the query if omitted)
//! cargo run --bin admin -- search matrix --by title,director
//!
//! # Shared friends
//! cargo run --bin admin -- friends 1 2
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `DATABASE_URL` (or `DB_*`),
//! `SEED_FILE`, `QUERY_TIMEOUT_MS`.

use cinerank::application::query::run_query;
use cinerank::config::{self, Config, StoreBackend};
use cinerank::domain::entities::{Film, User};
use cinerank::domain::query::{DirectorSort, SearchFields};
use cinerank::server::{connect_pool, open_repositories};
use cinerank::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for querying cinerank.
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
    #[command(flatten)]
    Query(QueryCommand),

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Commands that run a ranking query.
#[derive(Subcommand)]
enum QueryCommand {
    /// Show the most liked films
    Popular {
        /// Number of films to show
        #[arg(short, long, default_value_t = 10)]
        count: i64,

        /// Only films with this genre id
        #[arg(short, long)]
        genre: Option<i64>,

        /// Only films released in this year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show a director's films
    Director {
        /// Director id
        director_id: i64,

        /// Sort mode: likes or year
        #[arg(short, long, default_value = "likes")]
        sort: String,
    },

    /// Show films two users both like
    Common { user_id: i64, friend_id: i64 },

    /// Show recommendations for a user
    Recommend { user_id: i64 },

    /// Search films by title and/or director
    Search {
        /// Text to look for (prompted if omitted)
        query: Option<String>,

        /// Fields to search: title, director, or both comma separated
        #[arg(short, long)]
        by: Option<String>,
    },

    /// Show users both users have added as friends
    Friends { user_id: i64, other_id: i64 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show catalog size
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Query(command) => {
            let repositories = open_repositories(&config).await?;
            let state = AppState::new(repositories, config.query_timeout());
            handle_query(command, &state).await?
        }
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches query commands to the services.
async fn handle_query(command: QueryCommand, state: &AppState) -> Result<()> {
    let timeout = state.query_timeout;

    match command {
        QueryCommand::Popular { count, genre, year } => {
            println!("{}", "🏆 Popular films".bright_blue().bold());
            let films = run_query(
                "popular_films",
                timeout,
                state.popularity_service.popular_films(count, genre, year),
            )
            .await?;
            print_films(&films);
        }
        QueryCommand::Director { director_id, sort } => {
            let sort: DirectorSort = sort.parse()?;
            println!(
                "{}",
                format!("🎬 Films by director {director_id} (sorted by {sort})")
                    .bright_blue()
                    .bold()
            );
            let films = run_query(
                "director_films",
                timeout,
                state.filmography_service.director_films(director_id, sort),
            )
            .await?;
            print_films(&films);
        }
        QueryCommand::Common { user_id, friend_id } => {
            println!(
                "{}",
                format!("🤝 Films liked by both {user_id} and {friend_id}")
                    .bright_blue()
                    .bold()
            );
            let films = run_query(
                "common_films",
                timeout,
                state.overlap_service.common_films(user_id, friend_id),
            )
            .await?;
            print_films(&films);
        }
        QueryCommand::Recommend { user_id } => {
            println!(
                "{}",
                format!("✨ Recommendations for user {user_id}")
                    .bright_blue()
                    .bold()
            );
            let films = run_query(
                "recommended_films",
                timeout,
                state.recommendation_service.recommended_films(user_id),
            )
            .await?;
            print_films(&films);
        }
        QueryCommand::Search { query, by } => {
            let query = match query {
                Some(q) => q,
                None => Input::<String>::new().with_prompt("Search query").interact_text()?,
            };
            let fields = SearchFields::parse(by.as_deref())?;
            println!(
                "{}",
                format!("🔍 Search results for \"{query}\"").bright_blue().bold()
            );
            let films = run_query(
                "search_films",
                timeout,
                state.search_service.search_films(&query, &fields),
            )
            .await?;
            print_films(&films);
        }
        QueryCommand::Friends { user_id, other_id } => {
            println!(
                "{}",
                format!("👥 Friends shared by {user_id} and {other_id}")
                    .bright_blue()
                    .bold()
            );
            let users = run_query(
                "common_friends",
                timeout,
                state.overlap_service.common_friends(user_id, other_id),
            )
            .await?;
            print_users(&users);
        }
    }

    Ok(())
}

/// Prints films as a table.
///
/// # Output Format
///
/// ```text
///   ID    Title                          Year  Genres               Directors
///   ──────────────────────────────────────────────────────────────────────────
///   1     The Matrix                     1999  Action               Lana Wachowski
/// ```
fn print_films(films: &[Film]) {
    println!();

    if films.is_empty() {
        println!("{}", "  No films found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<5} {:<30} {:<5} {:<20} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Year".bright_white().bold(),
        "Genres".bright_white().bold(),
        "Directors".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for film in films {
        let genres: Vec<&str> = film.genres.iter().map(|g| g.name.as_str()).collect();
        let directors: Vec<&str> = film.directors.iter().map(|d| d.name.as_str()).collect();

        println!(
            "  {:<5} {:<30} {:<5} {:<20} {}",
            film.id.to_string().bright_black(),
            film.name.cyan(),
            film.release_year(),
            genres.join(", "),
            directors.join(", ").bright_white()
        );
    }

    println!();
    println!("  Total: {}", films.len().to_string().bright_white().bold());
    println!();
}

fn print_users(users: &[User]) {
    println!();

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        return;
    }

    for user in users {
        println!(
            "  {:<5} {:<20} {}",
            user.id.to_string().bright_black(),
            user.login.cyan(),
            user.display_name()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    if config.store_backend != StoreBackend::Postgres {
        println!(
            "{}",
            "⚠️  STORE_BACKEND is not postgres, nothing to check".yellow()
        );
        return Ok(());
    }

    let pool = connect_pool(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Catalog Information".bright_blue().bold());
            println!();

            for (label, table) in [
                ("Films", "films"),
                ("Users", "users"),
                ("Directors", "directors"),
                ("Likes", "film_likes"),
                ("Friendships", "friends"),
            ] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(&pool)
                    .await?;
                println!(
                    "  {:<12} {}",
                    format!("{label}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
