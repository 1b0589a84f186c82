use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::ExpenseRecord;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    amount REAL NOT NULL,
    category TEXT NOT NULL,
    description TEXT
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn list_expenses(conn: &Connection) -> Result<Vec<ExpenseRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, amount, category, description FROM expenses ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ExpenseRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            amount: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
            currency: None,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

/// Inserts one row and returns the id SQLite assigned to it.
pub fn insert_expense(
    conn: &Connection,
    date: &str,
    amount: f64,
    category: &str,
    description: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses (date, amount, category, description) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![date, amount, category, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_expense(conn: &Connection, id: i64) -> Result<usize> {
    Ok(conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?)
}
