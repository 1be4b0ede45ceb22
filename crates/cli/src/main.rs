//! NameNest CLI - database migrations, name seeding and sitemap export.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations from crates/web/migrations
//! namenest migrate
//!
//! # Load names from a YAML file (upserts on name + gender)
//! namenest seed crates/cli/seeds/names.yaml
//!
//! # Write sitemap.xml without a running server
//! namenest sitemap --base-url https://namenest.app -o sitemap.xml
//! ```
//!
//! # Environment Variables
//!
//! - `NAMENEST_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "namenest")]
#[command(author, version, about = "NameNest CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the names table from a YAML file
    Seed {
        /// Path to the YAML file
        file: PathBuf,

        /// Validate the file without touching the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Render sitemap.xml
    Sitemap {
        /// Public base URL used for every `<loc>`
        #[arg(short, long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, dry_run } => commands::seed::names(&file, dry_run).await?,
        Commands::Sitemap { base_url, output } => {
            commands::sitemap::write(&base_url, output.as_deref()).await?;
        }
    }
    Ok(())
}
