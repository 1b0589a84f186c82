//! Client-side cache of the server's expense table.
//!
//! The collection is never patched: every mutation is followed by a full
//! reload, and a reload that fails leaves the previous collection in place.

use tracing::{error, warn};

use crate::client::ApiClient;
use crate::error::{Result, TrackerError};
use crate::models::{ExpenseRecord, NewExpense};

/// Everything a render pass needs.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub expenses: Vec<ExpenseRecord>,
    pub display_currency: String,
}

pub trait Renderer {
    fn render(&mut self, state: &AppState);
}

/// Raw user input for a new expense.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(TrackerError::Validation(
                "Please enter a valid expense amount.".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Please select an expense category.".to_string(),
            ));
        }
        Ok(())
    }

    fn to_payload(&self) -> NewExpense {
        NewExpense {
            date: Some(self.date.clone()),
            amount: Some(self.amount),
            category: Some(self.category.clone()),
            description: Some(self.description.clone()),
        }
    }
}

pub struct ClientStore<R: Renderer> {
    client: ApiClient,
    state: AppState,
    renderer: R,
}

impl<R: Renderer> ClientStore<R> {
    pub fn new(client: ApiClient, display_currency: &str, renderer: R) -> Self {
        Self {
            client,
            state: AppState {
                expenses: Vec::new(),
                display_currency: display_currency.to_string(),
            },
            renderer,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replaces the collection with the server's and re-renders.
    /// Returns false when the fetch failed; nothing is rendered then.
    pub async fn load(&mut self) -> bool {
        match self.client.list().await {
            Ok(expenses) => {
                self.state.expenses = expenses;
                self.renderer.render(&self.state);
                true
            }
            Err(e) => {
                error!(error = %e, server = self.client.base_url(), "error loading expenses");
                false
            }
        }
    }

    /// Validation failures are returned; transport failures are only logged.
    /// The reload runs whether or not the insert was acknowledged.
    pub async fn submit(&mut self, form: &ExpenseForm) -> Result<Option<ExpenseRecord>> {
        form.validate()?;
        let created = match self.client.insert(&form.to_payload()).await {
            Ok(resp) => Some(resp.expense),
            Err(e) => {
                error!(error = %e, "error adding expense");
                None
            }
        };
        self.load().await;
        Ok(created)
    }

    /// Returns whether the server acknowledged the delete.
    pub async fn remove(&mut self, id: i64) -> bool {
        let removed = match self.client.delete(id).await {
            Ok(_) => true,
            Err(TrackerError::Api { status: 404, .. }) => {
                warn!(id, "expense not found");
                false
            }
            Err(e) => {
                error!(error = %e, id, "error deleting expense");
                false
            }
        };
        self.load().await;
        removed
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tokio::net::TcpListener;

    use super::*;
    use crate::db::init_db;
    use crate::server::{build_router, AppState as ServerState};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<i64>>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, state: &AppState) {
            self.frames.push(state.expenses.iter().map(|e| e.id).collect());
        }
    }

    async fn spawn_server() -> String {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let app = build_router(ServerState::new(conn));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn form(amount: f64, category: &str) -> ExpenseForm {
        ExpenseForm {
            date: "2024-01-01".to_string(),
            amount,
            category: category.to_string(),
            description: "lunch".to_string(),
        }
    }

    #[test]
    fn test_form_validation_messages() {
        let err = form(0.0, "Food").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid expense amount.");
        let err = form(f64::NAN, "Food").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid expense amount.");
        let err = form(5.0, "  ").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please select an expense category.");
        assert!(form(5.0, "Food").validate().is_ok());
    }

    #[tokio::test]
    async fn test_submit_reloads_and_renders() {
        let base = spawn_server().await;
        let mut store = ClientStore::new(ApiClient::new(&base), "USD", Recorder::default());

        let created = store.submit(&form(50.0, "Food & Dining")).await.unwrap().unwrap();
        assert_eq!(store.state().expenses.len(), 1);
        assert_eq!(store.state().expenses[0].id, created.id);
        assert_eq!(store.renderer().frames, vec![vec![created.id]]);
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let base = spawn_server().await;
        let mut store = ClientStore::new(ApiClient::new(&base), "USD", Recorder::default());

        assert!(matches!(
            store.submit(&form(-1.0, "Food")).await,
            Err(TrackerError::Validation(_))
        ));
        assert!(store.renderer().frames.is_empty());
        assert!(store.load().await);
        assert!(store.state().expenses.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_still_reloads() {
        let base = spawn_server().await;
        let mut store = ClientStore::new(ApiClient::new(&base), "USD", Recorder::default());
        store.submit(&form(5.0, "Food")).await.unwrap();

        assert!(!store.remove(424242).await);
        assert_eq!(store.state().expenses.len(), 1);
        assert_eq!(store.renderer().frames.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_then_list_omits_record() {
        let base = spawn_server().await;
        let mut store = ClientStore::new(ApiClient::new(&base), "USD", Recorder::default());
        let a = store.submit(&form(5.0, "Food")).await.unwrap().unwrap();
        let b = store.submit(&form(7.0, "Travel")).await.unwrap().unwrap();

        assert!(store.remove(a.id).await);
        let ids: Vec<i64> = store.state().expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b.id]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_state() {
        let base = spawn_server().await;
        let mut store = ClientStore::new(ApiClient::new(&base), "USD", Recorder::default());
        store.submit(&form(5.0, "Food")).await.unwrap();

        store.client = ApiClient::new("http://127.0.0.1:9");
        assert!(!store.load().await);
        assert_eq!(store.state().expenses.len(), 1);
        assert_eq!(store.renderer().frames.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_with_server_down_is_not_an_error() {
        let mut store = ClientStore::new(
            ApiClient::new("http://127.0.0.1:9"),
            "USD",
            Recorder::default(),
        );
        let created = store.submit(&form(5.0, "Food")).await.unwrap();
        assert!(created.is_none());
        assert!(store.renderer().frames.is_empty());
    }
}
