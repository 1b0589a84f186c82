use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::{open_store, ClientArgs};
use crate::error::{Result, TrackerError};
use crate::settings::Settings;
use crate::store::ExpenseForm;
use crate::view::{ListView, ViewController};

/// A failed fetch is logged by the store; the command still succeeds.
pub async fn list(settings: &Settings, args: &ClientArgs) -> Result<()> {
    let mut store = open_store(settings, args, ListView::new(std::io::stdout()));
    store.load().await;
    Ok(())
}

fn resolve_date(date: Option<String>) -> Result<String> {
    match date {
        None => Ok(chrono::Local::now().format("%Y-%m-%d").to_string()),
        Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .map(|parsed| parsed.format("%Y-%m-%d").to_string())
            .map_err(|_| TrackerError::Validation(format!("Invalid date '{d}', expected YYYY-MM-DD."))),
    }
}

pub async fn add(
    settings: &Settings,
    args: &ClientArgs,
    amount: f64,
    category: &str,
    description: Option<&str>,
    date: Option<String>,
) -> Result<()> {
    let form = ExpenseForm {
        date: resolve_date(date)?,
        amount,
        category: category.trim().to_string(),
        description: description.unwrap_or_default().to_string(),
    };
    let mut store = open_store(settings, args, ViewController::new(std::io::stdout()));
    if let Some(created) = store.submit(&form).await? {
        println!("{} #{} {} \u{2192} {}", "Added expense".green(), created.id, created.date, created.category);
    }
    Ok(())
}

pub async fn remove(settings: &Settings, args: &ClientArgs, id: i64) -> Result<()> {
    let mut store = open_store(settings, args, ViewController::new(std::io::stdout()));
    if store.remove(id).await {
        println!("{} #{id}", "Deleted expense".green());
    }
    Ok(())
}
