use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::db;
use crate::models::{
    DeleteResponse, ErrorBody, ExpenseRecord, InsertResponse, MessageBody, NewExpense,
};
use crate::server::AppState;

pub(crate) enum ApiError {
    BadRequest(String),
    NotFound,
    /// Generic message for the client; the cause is logged where it happens.
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: "Expense not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: error.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

pub(crate) async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseRecord>>, ApiError> {
    let rows = state.with_db(|conn| db::list_expenses(conn)).await.map_err(|e| {
        error!(error = %e, "error fetching expenses");
        ApiError::Internal("Failed to fetch expenses")
    })?;
    Ok(Json(rows))
}

/// Bodies that are empty or not labelled as JSON read as `{}`, so they fall
/// through to the missing-field check.
pub(crate) fn parse_new_expense(content_type: Option<&str>, body: &[u8]) -> Result<NewExpense, String> {
    let is_json = content_type
        .and_then(|ct| ct.split(';').next())
        .map_or(false, |mime| mime.trim().eq_ignore_ascii_case("application/json"));
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewExpense::default());
    }
    serde_json::from_slice(body).map_err(|e| format!("Invalid JSON body: {e}"))
}

pub(crate) async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let payload = parse_new_expense(content_type, &body).map_err(ApiError::BadRequest)?;

    let (date, amount, category) = match (&payload.date, payload.amount, &payload.category) {
        (Some(d), Some(a), Some(c)) if !payload.missing_required() => (d.clone(), a, c.clone()),
        _ => {
            return Err(ApiError::BadRequest(
                "Date, amount, and category are required.".to_string(),
            ))
        }
    };

    let stored_description = payload.description.clone().unwrap_or_default();
    let (d, c) = (date.clone(), category.clone());
    let id = state
        .with_db(move |conn| db::insert_expense(conn, &d, amount, &c, &stored_description))
        .await
        .map_err(|e| {
            error!(error = %e, "error inserting expense");
            ApiError::Internal("Failed to add expense")
        })?;
    info!(id, %date, amount, %category, "expense added");

    Ok((
        StatusCode::CREATED,
        Json(InsertResponse {
            message: "Expense added successfully".to_string(),
            expense: ExpenseRecord {
                id,
                date,
                amount,
                category,
                description: payload.description,
                currency: None,
            },
        }),
    ))
}

pub(crate) async fn delete_expense(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // A key that is not an integer can never match a row.
    let id: i64 = raw_id.parse().map_err(|_| ApiError::NotFound)?;

    let removed = state
        .with_db(move |conn| db::delete_expense(conn, id))
        .await
        .map_err(|e| {
            error!(error = %e, id, "error deleting expense");
            ApiError::Internal("Failed to delete expense")
        })?;
    if removed == 0 {
        return Err(ApiError::NotFound);
    }
    info!(id, "expense deleted");

    Ok(Json(DeleteResponse {
        message: "Expense deleted successfully".to_string(),
        deleted_id: id,
    }))
}

pub(crate) async fn delete_without_id() -> ApiError {
    ApiError::BadRequest("Expense ID is required".to_string())
}
