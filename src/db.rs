//! Database initialization for the application.

use rusqlite::Connection;

use crate::{Error, transaction::create_transaction_table};

/// Create the application's tables in the database if they do not already
/// exist.
///
/// Tables that already exist are left untouched, so this function is safe to
/// call on every start.
///
/// # Errors
/// Returns an error if the tables cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_transaction_table(connection)?;

    Ok(())
}
