//! Openbasket CLI - drive the shop from a terminal.
//!
//! The CLI is the screen layer: every command builds a view-model over a
//! repository, invokes it, and renders whatever the observables publish.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog from a running server
//! ob-cli products
//!
//! # List the built-in fixture catalog, no server needed
//! ob-cli products --offline
//!
//! # Register and log in
//! ob-cli auth register -n Alice -e alice@x.com
//! ob-cli auth login -e alice@x.com
//!
//! # Cart operations (logs in with the given email first)
//! ob-cli cart add -e alice@x.com -p 1 -q 2
//! ob-cli cart show -e alice@x.com
//! ```
//!
//! # Commands
//!
//! - `auth register` / `auth login` - account operations
//! - `products` - list the catalog
//! - `cart show|add|update|remove|clear` - cart operations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "ob-cli")]
#[command(author, version, about = "Openbasket CLI")]
struct Cli {
    /// Base URL of the backend API (default: OPENBASKET_API_URL or localhost)
    #[arg(long, global = true)]
    api_url: Option<Url>,

    /// Answer from the built-in fixtures instead of a server
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account operations
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// List the catalog
    Products,
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Register a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Log in with an email
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show {
        /// Email to log in with
        #[arg(short, long)]
        email: String,
    },
    /// Add units of a product
    Add {
        /// Email to log in with
        #[arg(short, long)]
        email: String,

        /// Product id
        #[arg(short, long)]
        product: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Replace a line's quantity
    Update {
        /// Email to log in with
        #[arg(short, long)]
        email: String,

        /// Product id
        #[arg(short, long)]
        product: i32,

        /// Replacement quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Email to log in with
        #[arg(short, long)]
        email: String,

        /// Product id
        #[arg(short, long)]
        product: i32,
    },
    /// Empty the cart
    Clear {
        /// Email to log in with
        #[arg(short, long)]
        email: String,
    },
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
    let backend = commands::BackendChoice::new(cli.offline, cli.api_url)?;

    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Register { name, email } => {
                commands::auth::register(&backend, &name, &email).await?;
            }
            AuthAction::Login { email } => {
                commands::auth::login(&backend, &email).await?;
            }
        },
        Commands::Products => commands::products::list(&backend).await?,
        Commands::Cart { action } => match action {
            CartAction::Show { email } => {
                commands::cart::show(&backend, &email).await?;
            }
            CartAction::Add {
                email,
                product,
                quantity,
            } => {
                commands::cart::add(&backend, &email, product, quantity).await?;
            }
            CartAction::Update {
                email,
                product,
                quantity,
            } => {
                commands::cart::update(&backend, &email, product, quantity).await?;
            }
            CartAction::Remove { email, product } => {
                commands::cart::remove(&backend, &email, product).await?;
            }
            CartAction::Clear { email } => {
                commands::cart::clear(&backend, &email).await?;
            }
        },
    }
    Ok(())
}
