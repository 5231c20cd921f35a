//! Transaction record - one leg of an intercompany transfer
//!
//! Records are keyed by caller-supplied ids in the world state. Each leg
//! carries a `reconciled` flag that the ledger flips exactly once when two
//! mirror legs are matched.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input format for transaction dates, e.g. `2024-03-15`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date text that does not parse as `YYYY-MM-DD`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid transaction date {input:?}: expected YYYY-MM-DD")]
pub struct DateFormatError {
    /// The rejected input text
    pub input: String,
    #[source]
    source: chrono::ParseError,
}

/// Parse transaction date text in the `YYYY-MM-DD` input format
pub fn parse_transaction_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| DateFormatError {
        input: text.to_string(),
        source,
    })
}

/// One leg of an intercompany transfer.
///
/// Wire encoding is field-named JSON with camelCase keys. The amount is
/// string-encoded and the date is an ISO date value, so nothing is lost
/// between storage and retrieval.
///
/// # Invariant
/// `reconciled` starts false and transitions to true exactly once, through
/// the ledger's matching operation. The id never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// World-state key, supplied by the caller
    pub id: String,

    /// Initiating party
    pub company: String,

    /// Receiving party
    pub counterparty: String,

    /// Signed amount; the mirror leg carries the exact negation
    pub amount: Decimal,

    /// Free-form classification, uninterpreted by the ledger
    pub transaction_type: String,

    /// Calendar date of the transfer (no time-of-day)
    pub date: NaiveDate,

    /// Settlement flag, set only by reconciliation
    pub reconciled: bool,
}

impl TransactionRecord {
    /// Create an unreconciled record
    pub fn new(
        id: impl Into<String>,
        company: impl Into<String>,
        counterparty: impl Into<String>,
        amount: Decimal,
        transaction_type: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            counterparty: counterparty.into(),
            amount,
            transaction_type: transaction_type.into(),
            date,
            reconciled: false,
        }
    }

    /// True when each record names the other's company as its counterparty
    pub fn mutual_counterparties(&self, other: &TransactionRecord) -> bool {
        self.company == other.counterparty && other.company == self.counterparty
    }

    /// True when both records fall in the same calendar year and month.
    ///
    /// Day-of-month is not compared: counterparties book the same transfer
    /// on different days within the period.
    pub fn same_settlement_period(&self, other: &TransactionRecord) -> bool {
        self.date.year() == other.date.year() && self.date.month() == other.date.month()
    }
}
