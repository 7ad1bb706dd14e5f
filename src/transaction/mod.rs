//! Transaction management for the FinSet front end.
//!
//! This module contains everything related to transactions:
//! - The [Transaction] model and the payload for creating one
//! - Filtering, summarizing and quick date ranges over the transaction list
//! - View handlers for the transaction-related web pages

mod create_endpoint;
mod delete_endpoint;
pub(crate) mod filter;
pub(crate) mod models;
mod new_transaction_page;
pub(crate) mod query;
mod transactions_page;
mod view;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use models::{NewTransaction, Transaction, TransactionKind};
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::{TransactionsViewState, get_transactions_page};
