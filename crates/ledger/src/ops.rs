//! Ledger operations - add, query, match
//!
//! Every operation takes the world-state handle as an explicit parameter;
//! there is no shared contract state.

use interco_core::{parse_transaction_date, TransactionRecord};
use interco_state::StateStore;
use rust_decimal::Decimal;

use crate::error::LedgerError;

/// Store a new transaction record under `id`.
///
/// The record starts unreconciled. An existing record under the same id is
/// overwritten; uniqueness is the caller's concern.
pub fn add_transaction<S>(
    store: &mut S,
    id: &str,
    company: &str,
    counterparty: &str,
    amount: Decimal,
    transaction_type: &str,
    date_text: &str,
) -> Result<(), LedgerError>
where
    S: StateStore + ?Sized,
{
    let date = parse_transaction_date(date_text)?;
    let record = TransactionRecord::new(id, company, counterparty, amount, transaction_type, date);

    let bytes = encode(&record)?;
    store.put(id, &bytes)?;

    tracing::debug!(id = %id, "transaction stored");
    Ok(())
}

/// Load the transaction record stored under `id`
pub fn query_transaction<S>(store: &S, id: &str) -> Result<TransactionRecord, LedgerError>
where
    S: StateStore + ?Sized,
{
    let bytes = store
        .get(id)?
        .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|source| LedgerError::Deserialization {
        id: id.to_string(),
        source,
    })
}

/// Reconcile two mirror legs of the same transfer.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. both records exist and decode (lookup errors name the failing id)
/// 2. neither record is already settled
/// 3. each record names the other's company as its counterparty
/// 4. the amounts are exact signed mirrors (no tolerance)
/// 5. both dates fall in the same calendar year and month (day ignored)
///
/// On success both records are flagged reconciled and written back, `id1`
/// first. Atomicity across the two writes is the host's commit boundary;
/// nothing is compensated or retried if the second write fails.
pub fn match_transactions<S>(store: &mut S, id1: &str, id2: &str) -> Result<(), LedgerError>
where
    S: StateStore + ?Sized,
{
    let mut first = query_transaction(store, id1)?;
    let mut second = query_transaction(store, id2)?;

    if first.reconciled {
        return Err(LedgerError::AlreadyReconciled(first.id));
    }
    if second.reconciled {
        return Err(LedgerError::AlreadyReconciled(second.id));
    }

    if !first.mutual_counterparties(&second) {
        return Err(LedgerError::CounterpartyMismatch {
            id1: first.id,
            id2: second.id,
        });
    }

    if first.amount != -second.amount {
        return Err(LedgerError::AmountMismatch {
            amount1: first.amount,
            amount2: second.amount,
        });
    }

    if !first.same_settlement_period(&second) {
        return Err(LedgerError::DateMismatch {
            date1: first.date,
            date2: second.date,
        });
    }

    first.reconciled = true;
    second.reconciled = true;

    // Both encodes complete before the first write lands.
    let first_bytes = encode(&first)?;
    let second_bytes = encode(&second)?;

    store.put(id1, &first_bytes)?;
    store.put(id2, &second_bytes)?;

    tracing::info!(id1 = %id1, id2 = %id2, "transactions reconciled");
    Ok(())
}

fn encode(record: &TransactionRecord) -> Result<Vec<u8>, LedgerError> {
    serde_json::to_vec(record).map_err(|source| LedgerError::Serialization {
        id: record.id.clone(),
        source,
    })
}
