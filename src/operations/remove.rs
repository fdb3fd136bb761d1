use crate::db::store::TransactionStore;
use crate::error::Error;
use crate::session::Session;

/// Deletes one record by id. Admin only; `Ok(false)` when the id is unknown.
pub fn remove_transaction(
    store: &TransactionStore<'_>,
    session: &Session,
    id: i64,
) -> Result<bool, Error> {
    session.require_admin()?;
    store.delete_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::models::transaction::TransactionKind;
    use crate::operations::add::add_transaction;

    #[test]
    fn test_remove_requires_admin() {
        let conn = establish_test_connection().unwrap();
        let store = TransactionStore::new(&conn, TransactionKind::Income);
        let user = Session::new(1, 777);
        let record = add_transaction(&store, &user, "100", "Salary", "20240315").unwrap();

        let result = remove_transaction(&store, &user, record.id());
        assert!(matches!(result, Err(Error::AdminRequired)));
        assert_eq!(store.get_by_user_id(1).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_existing_record() {
        let conn = establish_test_connection().unwrap();
        let store = TransactionStore::new(&conn, TransactionKind::Income);
        let admin = Session::new(777, 777);
        let record =
            add_transaction(&store, &Session::new(1, 777), "100", "Salary", "20240315").unwrap();

        assert!(remove_transaction(&store, &admin, record.id()).unwrap());
        assert!(store.get_by_user_id(1).unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_id_returns_false() {
        let conn = establish_test_connection().unwrap();
        let store = TransactionStore::new(&conn, TransactionKind::Income);
        let admin = Session::new(777, 777);

        assert!(!remove_transaction(&store, &admin, 404).unwrap());
    }
}
