//! Lumaprint CLI - Catalog, cart, and order management tools.
//!
//! Each invocation hydrates the state store from the data directory,
//! applies one operation, and writes the affected slices back, so state
//! carries across invocations exactly as it carries across process
//! restarts.
//!
//! # Usage
//!
//! ```bash
//! # Browse and edit the catalog
//! lumaprint catalog list
//! lumaprint catalog add -i poster-dune -t "Dune" -c Films -p 7.50
//! lumaprint catalog delete -i poster-dune
//! lumaprint catalog reset
//!
//! # Cart operations
//! lumaprint cart show
//! lumaprint cart add -i film-neon-drive -f A3
//! lumaprint cart update -i film-neon-drive -f A3 -d -1
//! lumaprint cart remove -i film-neon-drive -f A3
//!
//! # Checkout and history
//! lumaprint order complete
//! lumaprint order history
//!
//! # Session
//! lumaprint user login -i u1 -n "Ada" -e ada@example.com
//! lumaprint user logout
//! lumaprint studio set -b bg-neon-alley
//! lumaprint studio clear
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lumaprint")]
#[command(author, version, about = "Lumaprint management tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Checkout and order history
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Session user management
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Custom-print studio background
    Studio {
        #[command(subcommand)]
        action: StudioAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the catalog, newest first
    List,
    /// Add a product
    Add {
        /// Stable product id
        #[arg(short, long)]
        id: String,

        /// Display title
        #[arg(short, long)]
        title: String,

        /// Description
        #[arg(short = 'D', long, default_value = "")]
        description: String,

        /// Category (`Films`, `Séries`, `Jeux Vidéo`, `Anime`)
        #[arg(short, long, default_value = "Films")]
        category: String,

        /// Base price surcharge (e.g. 7.50)
        #[arg(short, long, default_value = "0")]
        price: String,

        /// Mark as a one-off custom print
        #[arg(long)]
        custom: bool,
    },
    /// Delete a product by id
    Delete {
        #[arg(short, long)]
        id: String,
    },
    /// Restore the built-in catalog and clear the studio background
    Reset,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and the item count
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Product id
        #[arg(short, long)]
        id: String,

        /// Print format (A4, A3, A2, XL)
        #[arg(short, long, default_value = "A4")]
        format: String,

        /// Discount multiplier (e.g. 0.8 for 20% off)
        #[arg(short, long, default_value = "1")]
        multiplier: String,
    },
    /// Adjust a line's quantity by a delta (floors at 1)
    Update {
        #[arg(short, long)]
        id: String,

        #[arg(short, long, default_value = "A4")]
        format: String,

        /// Quantity delta, may be negative
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line
    Remove {
        #[arg(short, long)]
        id: String,

        #[arg(short, long, default_value = "A4")]
        format: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Turn the current cart into an order and clear the cart
    Complete,
    /// List order history, newest first
    History,
}

#[derive(Subcommand)]
enum UserAction {
    /// Record the signed-in user
    Login {
        #[arg(short, long)]
        id: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,
    },
    /// Clear the session user
    Logout,
    /// Show the current session user
    Show,
}

#[derive(Subcommand)]
enum StudioAction {
    /// Set the studio background identifier
    Set {
        #[arg(short, long)]
        background: String,
    },
    /// Clear the studio background
    Clear,
}

fn main() {
    // Initialize tracing, honoring LUMAPRINT_LOG when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LUMAPRINT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
            CatalogAction::Add {
                id,
                title,
                description,
                category,
                price,
                custom,
            } => commands::catalog::add(&id, &title, &description, &category, &price, custom)?,
            CatalogAction::Delete { id } => commands::catalog::delete(&id)?,
            CatalogAction::Reset => commands::catalog::reset()?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add {
                id,
                format,
                multiplier,
            } => commands::cart::add(&id, &format, &multiplier)?,
            CartAction::Update { id, format, delta } => {
                commands::cart::update(&id, &format, delta)?;
            }
            CartAction::Remove { id, format } => commands::cart::remove(&id, &format)?,
        },
        Commands::Order { action } => match action {
            OrderAction::Complete => commands::order::complete()?,
            OrderAction::History => commands::order::history()?,
        },
        Commands::User { action } => match action {
            UserAction::Login { id, name, email } => commands::session::login(&id, &name, &email)?,
            UserAction::Logout => commands::session::logout()?,
            UserAction::Show => commands::session::show()?,
        },
        Commands::Studio { action } => match action {
            StudioAction::Set { background } => commands::session::set_background(&background)?,
            StudioAction::Clear => commands::session::clear_background()?,
        },
    }
    Ok(())
}
