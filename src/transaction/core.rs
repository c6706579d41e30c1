//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// A single financial record, i.e. an event where money was either spent or
/// earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// When the transaction happened, as entered by the client.
    ///
    /// Stored as a plain string: the database does not parse or validate it.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction is filed under, e.g. "Food".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is an "income" or an "expense".
    ///
    /// Free text as far as the store is concerned: the value is not
    /// constrained to an enum and the sign of `amount` is not checked
    /// against it.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The payload for creating a transaction.
///
/// All fields are required. There is deliberately no `id` field: IDs are
/// assigned by the database and clients never supply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// When the transaction happened. Stored as-is, no format validation.
    pub date: String,
    /// A text description of what the transaction was for. An empty string
    /// is accepted.
    pub description: String,
    /// The category to file the transaction under.
    pub category: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the transaction is an "income" or an "expense".
    #[serde(rename = "type")]
    pub kind: String,
}

/// The confirmation body returned by endpoints that modify transactions.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    /// A short human readable summary of what happened.
    pub message: &'static str,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The returned [Transaction] carries the ID the database assigned to the
/// new row.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (date, description, category, amount, type)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, description, category, amount, type",
        )?
        .query_row(
            (
                new_transaction.date,
                new_transaction.description,
                new_transaction.category,
                new_transaction.amount,
                new_transaction.kind,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, date, description, category, amount, type FROM transactions WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transactions table in the database.
///
/// The table uses `AUTOINCREMENT` so that IDs are strictly increasing for
/// the lifetime of the database and are never reused, even after deletes.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                type TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transactions', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let category = row.get(3)?;
    let amount = row.get(4)?;
    let kind = row.get(5)?;

    Ok(Transaction {
        id,
        date,
        description,
        category,
        amount,
        kind,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        transaction::{
            NewTransaction, count_transactions,
            core::{create_transaction, get_transaction},
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(date: &str, description: &str) -> NewTransaction {
        NewTransaction {
            date: date.to_owned(),
            description: description.to_owned(),
            category: "Food".to_owned(),
            amount: 4.5,
            kind: "expense".to_owned(),
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();

        let transaction =
            create_transaction(new_transaction("2024-01-05", "Coffee"), &conn).unwrap();

        assert!(transaction.id > 0);
        assert_eq!(transaction.date, "2024-01-05");
        assert_eq!(transaction.description, "Coffee");
        assert_eq!(transaction.category, "Food");
        assert_eq!(transaction.amount, 4.5);
        assert_eq!(transaction.kind, "expense");
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let conn = get_test_connection();

        let first = create_transaction(new_transaction("2024-01-05", "Coffee"), &conn).unwrap();
        let second = create_transaction(new_transaction("2024-01-06", "Lunch"), &conn).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn create_accepts_empty_description() {
        let conn = get_test_connection();

        let transaction = create_transaction(new_transaction("2024-01-05", ""), &conn).unwrap();

        assert_eq!(transaction.description, "");
    }

    #[test]
    fn get_fails_on_invalid_id() {
        let conn = get_test_connection();

        let maybe_transaction = get_transaction(1337, &conn);

        assert_eq!(maybe_transaction, Err(Error::NotFound));
    }

    #[test]
    fn get_count() {
        let conn = get_test_connection();
        let want_count = 20;
        for i in 1..=want_count {
            create_transaction(new_transaction("2024-01-05", &format!("#{i}")), &conn)
                .expect("Could not create transaction");
        }

        let got_count = count_transactions(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }
}
