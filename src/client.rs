use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Result, TrackerError};
use crate::models::{DeleteResponse, ExpenseRecord, InsertResponse, NewExpense};

/// Thin HTTP client for the record service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<ExpenseRecord>> {
        let resp = self
            .http
            .get(format!("{}/expenses", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn insert(&self, expense: &NewExpense) -> Result<InsertResponse> {
        let resp = self
            .http
            .post(format!("{}/expenses", self.base_url))
            .json(expense)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteResponse> {
        let resp = self
            .http
            .delete(format!("{}/expenses/{id}", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }
    Err(TrackerError::Api {
        status: status.as_u16(),
        message: error_message(status, &bytes),
    })
}

/// Error bodies carry either `error` or `message`.
fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        })
}
