use std::fmt;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::validation::{check_amount, check_date, check_label};

/// Income and expense records share the same shape; the kind picks the
/// backing table and the name of the label column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn table(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expenses",
        }
    }

    pub fn label_column(self) -> &'static str {
        match self {
            TransactionKind::Income => "source",
            TransactionKind::Expense => "category",
        }
    }

    /// User-facing name of the label field ("Source" / "Category").
    pub fn label_field(self) -> &'static str {
        match self {
            TransactionKind::Income => "Source",
            TransactionKind::Expense => "Category",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// A single income or expense record.
///
/// Every constructor and mutator validates, so a `Transaction` never holds a
/// negative amount, a blank label, or a non-canonical date. `id` is 0 until
/// the store assigns one on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    id: i64,
    user_id: i64,
    amount: Decimal,
    label: String,
    date: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        id: i64,
        user_id: i64,
        amount: Decimal,
        label: String,
        date: String,
    ) -> Result<Self, ValidationError> {
        check_amount(amount)?;
        check_label(&label, kind.label_field())?;
        check_date(&date)?;

        Ok(Self {
            kind,
            id,
            user_id,
            amount,
            label,
            date,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Called by the store after a successful insert. Assigning twice or
    /// assigning a non-positive id is a logic error in the store layer.
    pub(crate) fn assign_id(&mut self, id: i64) {
        debug_assert!(self.id == 0, "id is assigned exactly once");
        debug_assert!(id > 0, "generated ids are positive");
        self.id = id;
    }

    pub fn set_amount(&mut self, amount: Decimal) -> Result<(), ValidationError> {
        check_amount(amount)?;
        self.amount = amount;
        Ok(())
    }

    pub fn set_label(&mut self, label: String) -> Result<(), ValidationError> {
        check_label(&label, self.kind.label_field())?;
        self.label = label;
        Ok(())
    }

    pub fn set_date(&mut self, date: String) -> Result<(), ValidationError> {
        check_date(&date)?;
        self.date = date;
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{id={}, userId={}, amount={:.2}, {}='{}', date='{}'}}",
            self.kind.noun(),
            self.id,
            self.user_id,
            self.amount.round_dp(2),
            self.kind.label_column(),
            self.label,
            self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn income(amount: &str) -> Result<Transaction, ValidationError> {
        Transaction::new(
            TransactionKind::Income,
            0,
            1,
            Decimal::from_str(amount).unwrap(),
            "Salary".to_string(),
            "2024-03-15".to_string(),
        )
    }

    #[test]
    fn test_new_accepts_valid_record() {
        let tx = income("999.99").unwrap();
        assert_eq!(tx.id(), 0);
        assert_eq!(tx.user_id(), 1);
        assert_eq!(tx.label(), "Salary");
        assert_eq!(tx.date(), "2024-03-15");
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        assert_eq!(income("-100.00"), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_new_allows_zero_amount() {
        assert!(income("0").is_ok());
    }

    #[test]
    fn test_new_rejects_blank_label() {
        let result = Transaction::new(
            TransactionKind::Expense,
            0,
            1,
            Decimal::ONE,
            "  ".to_string(),
            "2024-03-15".to_string(),
        );
        assert_eq!(result, Err(ValidationError::InvalidLabel("Category")));
    }

    #[test]
    fn test_new_rejects_non_canonical_date() {
        let result = Transaction::new(
            TransactionKind::Income,
            0,
            1,
            Decimal::ONE,
            "Salary".to_string(),
            "2024/03/15".to_string(),
        );
        assert_eq!(result, Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_set_amount_rejects_negative_without_clamping() {
        let mut tx = income("100.00").unwrap();
        let result = tx.set_amount(Decimal::from_str("-1").unwrap());
        assert_eq!(result, Err(ValidationError::InvalidAmount));
        assert_eq!(tx.amount(), Decimal::from_str("100.00").unwrap());
    }

    #[test]
    fn test_set_date_rejects_impossible_date() {
        let mut tx = income("100.00").unwrap();
        assert_eq!(
            tx.set_date("2023-02-29".to_string()),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(tx.date(), "2024-03-15");
    }

    #[test]
    fn test_display_formats_two_decimals_and_kind_label() {
        let mut tx = income("1000").unwrap();
        tx.assign_id(7);
        assert_eq!(
            tx.to_string(),
            "Income{id=7, userId=1, amount=1000.00, source='Salary', date='2024-03-15'}"
        );
    }
}
