use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY;

/// One row of the `expenses` table, as served by `GET /expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    /// The server has no currency column, so loaded records leave this unset
    /// and [`ExpenseRecord::currency`] reports USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ExpenseRecord {
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

/// Body of `POST /expenses`. Every field is optional on the wire so the
/// server can answer a missing field with its own 400 message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl NewExpense {
    /// Absent, null, empty and zero all count as missing.
    pub fn missing_required(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        blank(&self.date) || blank(&self.category) || self.amount.map_or(true, |a| a == 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertResponse {
    pub message: String,
    pub expense: ExpenseRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedID")]
    pub deleted_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
