use chrono::NaiveDate;

use crate::error::{GastosError, Result};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::voice::TransactionIntent;

impl NewTransaction {
    /// Turn a recognised voice command into a transaction dated `date`.
    /// The category is the kind's label; the description stays empty until
    /// the user edits it.
    pub fn from_intent(intent: &TransactionIntent, date: NaiveDate) -> Self {
        let kind = intent.kind();
        Self {
            kind,
            description: intent.description().to_string(),
            amount: kind.signed(intent.amount()),
            category: kind.label().to_string(),
            date,
            tags: Vec::new(),
        }
    }
}

struct SeedTxn {
    kind: TransactionKind,
    description: &'static str,
    amount: f64,
    category: &'static str,
    date: (i32, u32, u32),
}

const SEED: &[SeedTxn] = &[
    SeedTxn {
        kind: TransactionKind::Income,
        description: "Salario",
        amount: 2000.0,
        category: "Salario",
        date: (2023, 10, 1),
    },
    SeedTxn {
        kind: TransactionKind::Expense,
        description: "Alquiler",
        amount: -800.0,
        category: "Vivienda",
        date: (2023, 10, 5),
    },
    SeedTxn {
        kind: TransactionKind::Expense,
        description: "Supermercado",
        amount: -150.0,
        category: "Alimentación",
        date: (2023, 10, 10),
    },
];

/// In-memory transaction store for one user.
#[derive(Debug, Clone)]
pub struct Ledger {
    user_id: String,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Ledger pre-filled with a salary, rent and groceries from October 2023.
    pub fn with_demo_data(user_id: &str) -> Self {
        let mut ledger = Self::new(user_id);
        for seed in SEED {
            let Some(date) = NaiveDate::from_ymd_opt(seed.date.0, seed.date.1, seed.date.2) else {
                continue;
            };
            ledger.add(NewTransaction {
                kind: seed.kind,
                description: seed.description.to_string(),
                amount: seed.amount,
                category: seed.category.to_string(),
                date,
                tags: Vec::new(),
            });
        }
        ledger
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, new: NewTransaction) -> &Transaction {
        let id = self.next_id.to_string();
        self.next_id += 1;
        log::info!("adding {} {} of {:.2} as #{id}", new.kind, new.category, new.amount);
        self.transactions.push(Transaction {
            id,
            user_id: self.user_id.clone(),
            kind: new.kind,
            description: new.description,
            amount: new.amount,
            category: new.category,
            date: new.date,
            tags: new.tags,
        });
        &self.transactions[self.transactions.len() - 1]
    }

    /// Replace every caller-editable field of transaction `id`.
    pub fn edit(&mut self, id: &str, new: NewTransaction) -> Result<&Transaction> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| GastosError::UnknownTransaction(id.to_string()))?;
        txn.kind = new.kind;
        txn.description = new.description;
        txn.amount = new.amount;
        txn.category = new.category;
        txn.date = new.date;
        txn.tags = new.tags;
        log::info!("edited #{id}");
        Ok(&*txn)
    }

    pub fn delete(&mut self, id: &str) -> Result<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| GastosError::UnknownTransaction(id.to_string()))?;
        log::info!("deleting #{id}");
        Ok(self.transactions.remove(pos))
    }

    /// Register order: latest date first. Same-day entries keep insertion
    /// order.
    pub fn sorted_newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::parse_command;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_data() {
        let ledger = Ledger::with_demo_data("user1");
        assert_eq!(ledger.len(), 3);
        let rent = ledger.get("2").unwrap();
        assert_eq!(rent.description, "Alquiler");
        assert_eq!(rent.amount, -800.0);
        assert_eq!(rent.category, "Vivienda");
        assert_eq!(rent.user_id, "user1");
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut ledger = Ledger::with_demo_data("user1");
        let id = ledger
            .add(NewTransaction::manual(TransactionKind::Income, "Regalo", 50.0, date(2024, 1, 1)))
            .id
            .clone();
        assert_eq!(id, "4");
        ledger.delete("4").unwrap();
        let id = ledger
            .add(NewTransaction::manual(TransactionKind::Income, "Regalo", 50.0, date(2024, 1, 1)))
            .id
            .clone();
        assert_eq!(id, "5");
    }

    #[test]
    fn test_intent_becomes_signed_transaction() {
        let intent = parse_command("gasto cincuenta").unwrap();
        let new = NewTransaction::from_intent(&intent, date(2024, 5, 2));
        assert_eq!(new.kind, TransactionKind::Expense);
        assert_eq!(new.amount, -50.0);
        assert_eq!(new.category, "Gasto");
        assert_eq!(new.description, "");
        assert_eq!(new.date, date(2024, 5, 2));

        let intent = parse_command("ingreso 1000").unwrap();
        let new = NewTransaction::from_intent(&intent, date(2024, 5, 2));
        assert_eq!(new.amount, 1000.0);
        assert_eq!(new.category, "Ingreso");
    }

    #[test]
    fn test_edit_replaces_fields() {
        let mut ledger = Ledger::with_demo_data("user1");
        let edited = ledger
            .edit(
                "3",
                NewTransaction::manual(TransactionKind::Expense, "Mercado", 175.5, date(2023, 10, 11)),
            )
            .unwrap();
        assert_eq!(edited.description, "Mercado");
        assert_eq!(edited.amount, -175.5);
        assert_eq!(edited.id, "3");
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut ledger = Ledger::new("user1");
        let err = ledger
            .edit("99", NewTransaction::manual(TransactionKind::Income, "", 1.0, date(2024, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, GastosError::UnknownTransaction(id) if id == "99"));
    }

    #[test]
    fn test_delete() {
        let mut ledger = Ledger::with_demo_data("user1");
        let removed = ledger.delete("1").unwrap();
        assert_eq!(removed.description, "Salario");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.get("1").is_none());
        assert!(ledger.delete("1").is_err());
    }

    #[test]
    fn test_sorted_newest_first() {
        let mut ledger = Ledger::with_demo_data("user1");
        ledger.add(NewTransaction::manual(TransactionKind::Expense, "Café", 2.0, date(2023, 10, 3)));
        let order: Vec<&str> = ledger
            .sorted_newest_first()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, vec!["Supermercado", "Alquiler", "Café", "Salario"]);
    }
}
