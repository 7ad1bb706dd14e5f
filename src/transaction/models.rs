//! The transaction types exchanged with the backend API.

use serde::{Deserialize, Serialize};
use time::Date;

/// Whether a transaction adds to or subtracts from the user's balance.
///
/// The backend stores non-negative amounts and carries the direction in a
/// separate `type` field, so amounts are never signed in this crate either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A transaction as returned by the backend API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The backend's opaque identifier for the transaction.
    #[serde(rename = "_id")]
    pub id: String,
    /// The value of the transaction in dollars. Never negative.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category label, if one was assigned.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    /// Text detailing the transaction.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    /// The date when the transaction occurred.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// The payload for creating a transaction via the backend API.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// Deserializes missing or blank strings as `None`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Date (de)serialization for the backend's ISO 8601 strings.
///
/// The backend emits full datetimes such as "2024-05-01T13:45:00.123456", so
/// deserialization only looks at the leading calendar date.
pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    const DATE_FORMAT: &[BorrowedFormatItem] =
        format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let date_part = text.get(..10).unwrap_or(text.as_str());

        Date::parse(date_part, DATE_FORMAT).map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}
