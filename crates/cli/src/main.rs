//! Urban Brew CLI - Menu browsing and order placement.
//!
//! # Usage
//!
//! ```bash
//! # Show the full menu
//! ub-cli menu
//!
//! # Show only items matching a search term
//! ub-cli menu --search coffee
//!
//! # Start an interactive ordering session
//! ub-cli order
//! ```
//!
//! # Commands
//!
//! - `menu` - Print the menu, optionally filtered
//! - `order` - Interactive session: build a cart, then check out against
//!   the order backend configured via `URBAN_BREW_API_URL`

#![cfg_attr(not(test), forbid(unsafe_code))]
// The terminal is this binary's UI surface; it writes to stdout directly.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod catalog;
mod commands;

#[derive(Parser)]
#[command(name = "ub-cli")]
#[command(author, version, about = "Urban Brew ordering tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu
    Menu {
        /// Only show items whose name contains this term
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Start an interactive ordering session
    Order,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
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
        Commands::Menu { search } => commands::menu::show(search.as_deref()),
        Commands::Order => commands::order::run().await?,
    }
    Ok(())
}
