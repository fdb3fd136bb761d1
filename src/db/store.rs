//! Durable CRUD for one transaction kind against one table.
//!
//! One store type covers both kinds: the table name and label column are
//! resolved from the `TransactionKind`, everything else is identical. All
//! values go through bound parameters; only the table/column identifiers,
//! which come from the kind enum, are interpolated.

use std::str::FromStr;

use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use crate::error::Error;
use crate::models::transaction::{Transaction, TransactionKind};

pub struct TransactionStore<'conn> {
    conn: &'conn Connection,
    kind: TransactionKind,
}

impl<'conn> TransactionStore<'conn> {
    pub fn new(conn: &'conn Connection, kind: TransactionKind) -> Self {
        Self { conn, kind }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Inserts the record and assigns the generated id to it.
    pub fn add(&self, record: &mut Transaction) -> Result<(), Error> {
        let sql = format!(
            "INSERT INTO {} (user_id, amount, {}, date) VALUES (?1, ?2, ?3, ?4)",
            self.kind.table(),
            self.kind.label_column(),
        );

        let affected = self.conn.execute(
            &sql,
            params![
                record.user_id(),
                record.amount().to_string(),
                record.label(),
                record.date(),
            ],
        )?;
        if affected == 0 {
            return Err(Error::InsertFailed(self.kind.noun()));
        }

        let id = self.conn.last_insert_rowid();
        record.assign_id(id);
        tracing::debug!(kind = self.kind.noun(), id, "record inserted");
        Ok(())
    }

    /// Records for one user, in row order. Empty when the user has none.
    pub fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Transaction>, Error> {
        let sql = format!(
            "SELECT id, user_id, amount, {}, date FROM {} WHERE user_id = ?1",
            self.kind.label_column(),
            self.kind.table(),
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let kind = self.kind;
        let rows = stmt.query_map([user_id], move |row| map_row(kind, row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Error::from)
    }

    /// Every record across all users. Authorization is the caller's job.
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let sql = format!(
            "SELECT id, user_id, amount, {}, date FROM {}",
            self.kind.label_column(),
            self.kind.table(),
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let kind = self.kind;
        let rows = stmt.query_map([], move |row| map_row(kind, row))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Error::from)
    }

    /// Overwrites amount/label/date for the row matching the record's id.
    /// Returns false when no row matched.
    pub fn update(&self, record: &Transaction) -> Result<bool, Error> {
        let sql = format!(
            "UPDATE {} SET amount = ?1, {} = ?2, date = ?3 WHERE id = ?4",
            self.kind.table(),
            self.kind.label_column(),
        );

        let affected = self.conn.execute(
            &sql,
            params![
                record.amount().to_string(),
                record.label(),
                record.date(),
                record.id(),
            ],
        )?;
        Ok(affected > 0)
    }

    /// Returns false when the id does not exist.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.kind.table());
        let affected = self.conn.execute(&sql, [id])?;
        Ok(affected > 0)
    }

    /// Deletes every record one id at a time. Admin reset only.
    pub fn delete_all(&self) -> Result<usize, Error> {
        let records = self.get_all()?;
        let mut deleted = 0;
        for record in &records {
            if self.delete_by_id(record.id())? {
                deleted += 1;
            }
        }
        tracing::info!(kind = self.kind.noun(), deleted, "table reset");
        Ok(deleted)
    }
}

fn map_row(kind: TransactionKind, row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let amount_str: String = row.get(2)?;
    let amount = Decimal::from_str(&amount_str)
        .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?;

    Transaction::new(
        kind,
        row.get(0)?,
        row.get(1)?,
        amount,
        row.get(3)?,
        row.get(4)?,
    )
    .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))
}
