//! # Course RAG CLI (`coursebot`)
//!
//! ## Usage
//!
//! ```bash
//! coursebot --config ./config/coursebot.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `coursebot serve` | Load the course catalog and start the HTTP API |
//! | `coursebot query "<question>"` | Answer a question and print ranked sources |
//! | `coursebot courses` | List loaded courses and their chunk counts |
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use course_rag::{config, courses, loader, query, server};

/// Course RAG CLI: lexical question answering over course material.
#[derive(Parser)]
#[command(
    name = "coursebot",
    about = "Course RAG: answer questions from course material using lexical retrieval",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/coursebot.toml`. When the file does not exist,
    /// built-in defaults are used.
    #[arg(long, global = true, default_value = "./config/coursebot.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API.
    ///
    /// Loads the course catalog from `[catalog].path` (or `--catalog`) and
    /// binds to `[server].bind`.
    Serve {
        /// Course catalog (JSON) to load instead of `[catalog].path`.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Answer a question from the command line.
    Query {
        /// The question to answer.
        question: String,

        /// Maximum number of chunks to use. Defaults to `[retrieval].default_top_k`.
        #[arg(long, allow_negative_numbers = true)]
        top_k: Option<i64>,

        /// Course catalog (JSON) to load instead of `[catalog].path`.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List loaded courses.
    Courses {
        /// Course catalog (JSON) to load instead of `[catalog].path`.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<config::Config> {
    if path.exists() {
        config::load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(config::Config::minimal())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;

    match cli.command {
        Commands::Serve { catalog } => {
            let engine = loader::build_engine(&cfg, catalog.as_deref())?;
            server::run_server(&cfg, engine).await?;
        }
        Commands::Query {
            question,
            top_k,
            catalog,
        } => {
            let engine = loader::build_engine(&cfg, catalog.as_deref())?;
            query::run_query(&engine, &question, top_k)?;
        }
        Commands::Courses { catalog } => {
            let engine = loader::build_engine(&cfg, catalog.as_deref())?;
            courses::list_courses(&engine)?;
        }
    }

    Ok(())
}
