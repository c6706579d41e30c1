//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` payload for creating one
//! - Database functions for storing, querying, and deleting transactions
//! - The JSON API endpoints for listing, creating, and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;

pub use core::{Confirmation, NewTransaction, Transaction, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub use core::{count_transactions, create_transaction, get_transaction};
