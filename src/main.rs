mod cli;
mod client;
mod currency;
mod db;
mod error;
mod fmt;
mod logging;
mod models;
mod render;
mod server;
mod settings;
mod store;
mod view;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = settings::load_settings();
    logging::init_tracing(&settings);

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Serve { listen, db } => cli::serve::run(&settings, listen, db).await,
        Commands::List { client } => cli::expenses::list(&settings, &client).await,
        Commands::Add {
            amount,
            category,
            description,
            date,
            client,
        } => cli::expenses::add(&settings, &client, amount, &category, description.as_deref(), date).await,
        Commands::Remove { id, client } => cli::expenses::remove(&settings, &client, id).await,
        Commands::Dashboard { client } => cli::dashboard::run(&settings, &client).await,
        Commands::Convert { amount, from, to } => cli::convert::run(amount, &from, &to),
        Commands::Categories => cli::categories::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
