use crate::db::store::TransactionStore;
use crate::error::Error;
use crate::session::Session;

/// Wipes both tables, expenses before incomes to satisfy referential
/// ordering. Admin only. Returns (expenses deleted, incomes deleted).
pub fn reset_all_tables(
    incomes: &TransactionStore<'_>,
    expenses: &TransactionStore<'_>,
    session: &Session,
) -> Result<(usize, usize), Error> {
    session.require_admin()?;

    let expenses_deleted = expenses.delete_all()?;
    let incomes_deleted = incomes.delete_all()?;
    Ok((expenses_deleted, incomes_deleted))
}
