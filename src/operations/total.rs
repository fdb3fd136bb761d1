use rust_decimal::Decimal;

use crate::db::store::TransactionStore;
use crate::error::Error;
use crate::session::{Scope, Session};

/// Sums amounts over the records the session may see. Recomputed on every
/// call; there is no cached balance.
pub fn total_amount(
    store: &TransactionStore<'_>,
    session: &Session,
    target_user_id: i64,
) -> Result<Decimal, Error> {
    let records = match session.view_scope(target_user_id) {
        Scope::User(user_id) => store.get_by_user_id(user_id)?,
        Scope::AllUsers => store.get_all()?,
    };

    Ok(records.iter().map(|t| t.amount()).sum())
}
