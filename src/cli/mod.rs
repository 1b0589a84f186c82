pub mod categories;
pub mod convert;
pub mod dashboard;
pub mod expenses;
pub mod init;
pub mod serve;

use clap::{Args, Parser, Subcommand};

use crate::client::ApiClient;
use crate::settings::Settings;
use crate::store::{ClientStore, Renderer};

#[derive(Parser)]
#[command(name = "spendbook", about = "Personal expense tracker with a local REST backend.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that talks to the server.
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    /// Server base URL (default from settings: http://localhost:3000)
    #[arg(long)]
    pub server: Option<String>,
    /// Display currency code, e.g. EUR
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write settings and create the expenses database.
    Init {
        /// Directory for expenses.db (default: ~/.local/share/spendbook)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Run the HTTP record service.
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:3000
        #[arg(long)]
        listen: Option<String>,
        /// Path to the SQLite database file
        #[arg(long)]
        db: Option<String>,
    },
    /// List expenses as stored on the server.
    List {
        #[command(flatten)]
        client: ClientArgs,
    },
    /// Record a new expense.
    Add {
        /// Amount, must be positive
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Category label, e.g. 'Food & Dining'
        #[arg(long)]
        category: String,
        /// Free-text note
        #[arg(long)]
        description: Option<String>,
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        client: ClientArgs,
    },
    /// Delete an expense by ID.
    Remove {
        /// Expense ID (shown in `spendbook list`)
        id: i64,
        #[command(flatten)]
        client: ClientArgs,
    },
    /// Show totals, the expense list, and daily/category charts.
    Dashboard {
        #[command(flatten)]
        client: ClientArgs,
    },
    /// Convert an amount between currencies using the built-in rates.
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code
        #[arg(long, default_value = "USD")]
        from: String,
        /// Target currency code
        #[arg(long, default_value = "EUR")]
        to: String,
    },
    /// List suggested expense categories.
    Categories,
}

pub(crate) fn open_store<R: Renderer>(
    settings: &Settings,
    args: &ClientArgs,
    renderer: R,
) -> ClientStore<R> {
    let server = args.server.as_deref().unwrap_or(&settings.server_url);
    let currency = args.currency.as_deref().unwrap_or(&settings.display_currency);
    ClientStore::new(ApiClient::new(server), &currency.to_uppercase(), renderer)
}
