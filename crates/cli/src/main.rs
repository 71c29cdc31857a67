//! ShopEase CLI - Demo storefront sessions from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the demo catalog with filters
//! shopease browse --category Electronics --sort price-low
//! shopease browse --search coffee --max-price 50
//!
//! # Run a scripted shopping session
//! shopease demo
//!
//! # Clear durable shopper state
//! shopease storage clear
//! ```
//!
//! # Commands
//!
//! - `browse` - Print the filtered catalog view
//! - `demo` - Scripted session exercising every store
//! - `storage` - Manage the durable key/value state

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "shopease")]
#[command(author, version, about = "ShopEase storefront demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the demo catalog
    Browse {
        /// Case-insensitive text matched against name and category
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category label
        #[arg(short, long)]
        category: Option<String>,

        /// Lowest price to include
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Highest price to include
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Minimum rating, e.g. 4.5
        #[arg(short, long)]
        rating: Option<Decimal>,

        /// Only in-stock products
        #[arg(long)]
        in_stock: bool,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Sort key (name, price-low, price-high, rating, reviews, date)
        #[arg(long, default_value = "name")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Run a scripted shopping session
    Demo,
    /// Manage durable shopper state
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },
}

#[derive(Subcommand)]
enum StorageAction {
    /// Remove the persisted theme and recently-viewed entries
    Clear,
}

#[tokio::main]
async fn main() {
    // Load .env before tracing so RUST_LOG set there takes effect
    dotenvy::dotenv().ok();

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
        Commands::Browse {
            search,
            category,
            min_price,
            max_price,
            rating,
            in_stock,
            featured,
            sort,
            order,
        } => {
            let filters = commands::browse::BrowseFilters {
                search,
                category,
                min_price,
                max_price,
                rating,
                in_stock,
                featured,
                sort,
                order,
            };
            commands::browse::browse(&filters)?;
        }
        Commands::Demo => commands::demo::run().await?,
        Commands::Storage { action } => match action {
            StorageAction::Clear => commands::storage::clear()?,
        },
    }
    Ok(())
}
