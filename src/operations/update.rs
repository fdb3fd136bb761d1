use std::str::FromStr;

use rust_decimal::Decimal;

use crate::db::store::TransactionStore;
use crate::error::{Error, ValidationError};
use crate::models::transaction::Transaction;
use crate::session::Session;
use crate::validation::normalize_date;

/// Overwrites amount/label/date for one record. Admin only.
///
/// Returns `Ok(false)` when no row has the given id; the id and owner of an
/// existing row never change.
pub fn update_transaction(
    store: &TransactionStore<'_>,
    session: &Session,
    id: i64,
    user_id: i64,
    amount_raw: &str,
    label: &str,
    date_raw: &str,
) -> Result<bool, Error> {
    session.require_admin()?;

    let amount =
        Decimal::from_str(amount_raw.trim()).map_err(|_| ValidationError::InvalidAmount)?;
    let date = normalize_date(date_raw)?;

    let record = Transaction::new(
        store.kind(),
        id,
        user_id,
        amount,
        label.trim().to_string(),
        date,
    )?;
    store.update(&record)
}
