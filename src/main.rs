//! CLI entry point for thoughtlog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "thoughtlog")]
#[command(version)]
#[command(about = "A markdown-powered blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Include draft posts
        #[arg(long)]
        drafts: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post's metadata and raw markdown body
    Show {
        /// Slug of the post
        slug: String,
    },

    /// Render a post's body to HTML
    Render {
        /// Slug of the post
        slug: String,

        /// Write HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "thoughtlog=debug,info"
    } else {
        "thoughtlog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = thoughtlog::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { drafts, json } => {
            thoughtlog::commands::list::run(&site, drafts, json)?;
        }

        Commands::Show { slug } => {
            thoughtlog::commands::show::run(&site, &slug)?;
        }

        Commands::Render { slug, output } => {
            thoughtlog::commands::render::run(&site, &slug, output.as_deref())?;
        }

        Commands::Version => {
            println!("thoughtlog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
