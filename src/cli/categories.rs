use comfy_table::{Cell, Table};

use crate::error::Result;

// Suggestions only; the server accepts any non-empty label.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Other",
];

pub fn list() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category"]);
    for name in DEFAULT_CATEGORIES {
        table.add_row(vec![Cell::new(name)]);
    }
    println!("Categories\n{table}");
    Ok(())
}
