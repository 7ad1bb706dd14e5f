//! Bank account overview for the FinSet front end.

mod accounts_page;
mod create_endpoint;
mod models;

pub use accounts_page::get_accounts_page;
pub use create_endpoint::create_account_endpoint;
pub use models::{BankAccount, NewBankAccount};
