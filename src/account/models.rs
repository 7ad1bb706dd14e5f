//! The bank account types exchanged with the backend API.

use serde::{Deserialize, Serialize};

/// A linked bank account as returned by the backend API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BankAccount {
    /// The backend's opaque identifier for the account.
    #[serde(rename = "_id")]
    pub id: String,
    /// The name of the bank holding the account.
    pub bank_name: String,
    /// The account number, as the bank formats it.
    pub account_number: String,
    /// The kind of account, e.g. "Checking" or "Savings".
    pub account_type: String,
    /// The balance from the most recent statement, in dollars.
    pub balance: f64,
}

/// The payload for linking a bank account via the backend API.
#[derive(Debug, Clone, Serialize)]
pub struct NewBankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_type: String,
    pub balance: f64,
}
