//! Ledger errors

use chrono::NaiveDate;
use interco_core::DateFormatError;
use interco_state::StateError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from ledger operations.
///
/// Each variant maps to one rejection condition, so callers branch on the
/// variant rather than on message text. All are request-scoped; nothing is
/// retried here.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Date text on add did not parse as `YYYY-MM-DD`
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),

    /// Record failed to encode for storage
    #[error("failed to encode transaction {id}")]
    Serialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes under the id are not a valid record
    #[error("stored value for transaction {id} is not a valid record")]
    Deserialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// No record stored under the id
    #[error("transaction {0} does not exist")]
    NotFound(String),

    /// Record is already settled
    #[error("transaction {0} is already reconciled")]
    AlreadyReconciled(String),

    /// The records do not name each other as counterparties
    #[error("counterparty mismatch: transactions {id1} and {id2} do not name each other")]
    CounterpartyMismatch { id1: String, id2: String },

    /// Amounts are not exact signed mirrors
    #[error("amount mismatch: {amount1} and {amount2} are not mirrored")]
    AmountMismatch { amount1: Decimal, amount2: Decimal },

    /// Records do not share a calendar year and month
    #[error("date mismatch: {date1} and {date2} fall in different months")]
    DateMismatch { date1: NaiveDate, date2: NaiveDate },

    /// Backend failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StateError),
}
