use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GastosError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Category given to transactions created without an explicit one.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Ingreso",
            TransactionKind::Expense => "Gasto",
        }
    }

    /// Store income as positive and expenses as negative, whatever sign the
    /// amount came in with.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = GastosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "ingreso" => Ok(TransactionKind::Income),
            "expense" | "gasto" => Ok(TransactionKind::Expense),
            other => Err(GastosError::Other(format!(
                "Tipo de transacción desconocido: {other} (usa ingreso o gasto)"
            ))),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

/// Transaction fields supplied by the caller; the ledger fills in the id and
/// the owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

impl NewTransaction {
    /// Entry typed in by hand.
    pub fn manual(kind: TransactionKind, description: &str, amount: f64, date: NaiveDate) -> Self {
        Self {
            kind,
            description: description.to_string(),
            amount: kind.signed(amount),
            category: kind.label().to_string(),
            date,
            tags: Vec::new(),
        }
    }
}

impl From<&Transaction> for NewTransaction {
    fn from(t: &Transaction) -> Self {
        Self {
            kind: t.kind,
            description: t.description.clone(),
            amount: t.amount,
            category: t.category.clone(),
            date: t.date,
            tags: t.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amounts() {
        assert_eq!(TransactionKind::Income.signed(-25.0), 25.0);
        assert_eq!(TransactionKind::Expense.signed(25.0), -25.0);
        assert_eq!(TransactionKind::Expense.signed(-25.0), -25.0);
    }

    #[test]
    fn test_kind_from_str_accepts_both_languages() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Gasto".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_new_transaction_from_existing_keeps_fields() {
        let t = Transaction {
            id: "7".to_string(),
            user_id: "user1".to_string(),
            kind: TransactionKind::Income,
            description: "Bono".to_string(),
            amount: 300.0,
            category: "Salario".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            tags: vec!["extra".to_string()],
        };
        let new = NewTransaction::from(&t);
        assert_eq!(new.kind, TransactionKind::Income);
        assert_eq!(new.amount, 300.0);
        assert_eq!(new.category, "Salario");
        assert_eq!(new.tags, vec!["extra".to_string()]);
    }

    #[test]
    fn test_manual_entry_uses_kind_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let t = NewTransaction::manual(TransactionKind::Expense, "Cine", 12.0, date);
        assert_eq!(t.amount, -12.0);
        assert_eq!(t.category, "Gasto");
        assert!(t.tags.is_empty());
    }
}
