//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Confirmation, NewTransaction, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new transaction from a JSON payload.
///
/// Responds with 201 and a confirmation message on success. Payloads with
/// missing or mistyped fields are rejected with 422 before any storage
/// logic runs.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Response {
    let Json(new_transaction) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!("rejected transaction payload: {rejection}");
            return Error::InvalidPayload(rejection.body_text()).into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLock.into_response();
        }
    };

    match create_transaction(new_transaction, &connection) {
        Ok(transaction) => {
            tracing::debug!("created transaction {}", transaction.id);
            (
                StatusCode::CREATED,
                Json(Confirmation {
                    message: "Transaction added",
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, build_router, endpoints, transaction::Transaction};

    fn new_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not initialize the database.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_returns_confirmation_and_stores_transaction() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-01-05",
                "description": "Coffee",
                "category": "Food",
                "amount": 4.50,
                "type": "expense",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "Transaction added"})
        );

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 1);
        assert!(transactions[0].id > 0);
        assert_eq!(transactions[0].date, "2024-01-05");
        assert_eq!(transactions[0].description, "Coffee");
        assert_eq!(transactions[0].category, "Food");
        assert_eq!(transactions[0].amount, 4.5);
        assert_eq!(transactions[0].kind, "expense");
    }

    #[tokio::test]
    async fn create_rejects_payload_with_missing_field() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-01-05",
                "category": "Food",
                "amount": 4.50,
                "type": "expense",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert!(
            body.get("error").is_some(),
            "expected an error payload, got {body}"
        );

        let transactions = server.get(endpoints::TRANSACTIONS_API).await.json::<Value>();
        assert_eq!(transactions, json!([]));
    }

    #[tokio::test]
    async fn create_rejects_payload_with_mistyped_amount() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-01-05",
                "description": "Coffee",
                "category": "Food",
                "amount": "4.50",
                "type": "expense",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_accepts_empty_description() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-01-05",
                "description": "",
                "category": "Food",
                "amount": 4.50,
                "type": "expense",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
    }
}
