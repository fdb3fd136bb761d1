use std::str::FromStr;

use rust_decimal::Decimal;

use crate::db::store::TransactionStore;
use crate::error::{Error, ValidationError};
use crate::models::transaction::Transaction;
use crate::session::Session;
use crate::validation::normalize_date;

/// Parses raw console input, builds a record for the session's own user, and
/// persists it. Anyone may add for themselves; the owner is always the
/// session user, never a typed-in target.
pub fn add_transaction(
    store: &TransactionStore<'_>,
    session: &Session,
    amount_raw: &str,
    label: &str,
    date_raw: &str,
) -> Result<Transaction, Error> {
    let amount =
        Decimal::from_str(amount_raw.trim()).map_err(|_| ValidationError::InvalidAmount)?;
    let date = normalize_date(date_raw)?;

    let mut record = Transaction::new(
        store.kind(),
        0,
        session.user_id(),
        amount,
        label.trim().to_string(),
        date,
    )?;
    store.add(&mut record)?;
    Ok(record)
}
