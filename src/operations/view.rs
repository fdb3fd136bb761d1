use crate::db::store::TransactionStore;
use crate::error::Error;
use crate::models::transaction::Transaction;
use crate::session::{Scope, Session};

/// Lists records the session is allowed to see.
///
/// Ordinary users get their own records regardless of the requested target;
/// admins get the requested user, or everyone when the target is 0.
pub fn view_transactions(
    store: &TransactionStore<'_>,
    session: &Session,
    target_user_id: i64,
) -> Result<Vec<Transaction>, Error> {
    match session.view_scope(target_user_id) {
        Scope::User(user_id) => store.get_by_user_id(user_id),
        Scope::AllUsers => store.get_all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::models::transaction::TransactionKind;
    use crate::operations::add::add_transaction;

    fn seed(conn: &rusqlite::Connection) -> TransactionStore<'_> {
        let store = TransactionStore::new(conn, TransactionKind::Income);
        add_transaction(&store, &Session::new(1, 777), "100", "Salary", "20240315").unwrap();
        add_transaction(&store, &Session::new(2, 777), "200", "Bonus", "20240316").unwrap();
        store
    }

    #[test]
    fn test_ordinary_user_sees_only_own_records() {
        let conn = establish_test_connection().unwrap();
        let store = seed(&conn);
        let session = Session::new(1, 777);

        // Asking for another user's records still returns only your own.
        let records = view_transactions(&store, &session, 2).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|t| t.user_id() == 1));
    }

    #[test]
    fn test_admin_sentinel_returns_all_users() {
        let conn = establish_test_connection().unwrap();
        let store = seed(&conn);
        let session = Session::new(777, 777);

        let records = view_transactions(&store, &session, 0).unwrap();
        assert_eq!(records.len(), 2);
        let mut user_ids: Vec<i64> = records.iter().map(|t| t.user_id()).collect();
        user_ids.sort_unstable();
        assert_eq!(user_ids, vec![1, 2]);
    }

    #[test]
    fn test_admin_can_target_a_specific_user() {
        let conn = establish_test_connection().unwrap();
        let store = seed(&conn);
        let session = Session::new(777, 777);

        let records = view_transactions(&store, &session, 2).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id(), 2);
    }

    #[test]
    fn test_view_is_empty_not_an_error_for_unknown_user() {
        let conn = establish_test_connection().unwrap();
        let store = seed(&conn);
        let session = Session::new(777, 777);

        assert!(view_transactions(&store, &session, 999).unwrap().is_empty());
    }
}
