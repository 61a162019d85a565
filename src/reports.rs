use crate::models::{Transaction, TransactionKind};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub income: f64,
    /// Always positive, whatever sign the stored amounts carry.
    pub expenses: f64,
    pub balance: f64,
}

pub fn get_summary(transactions: &[Transaction]) -> Summary {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount.abs())
        .sum();

    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

// ---------------------------------------------------------------------------
// Income / expense split
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub total: f64,
    /// Rounded to a whole percent.
    pub pct: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub slices: Vec<Slice>,
    pub total: f64,
}

pub fn get_breakdown(transactions: &[Transaction]) -> Breakdown {
    let summary = get_summary(transactions);
    let total = summary.income + summary.expenses;
    let pct = |value: f64| -> u32 {
        if total > 0.0 {
            (value / total * 100.0).round() as u32
        } else {
            0
        }
    };

    Breakdown {
        slices: vec![
            Slice {
                label: "Ingresos",
                total: summary.income,
                pct: pct(summary.income),
            },
            Slice {
                label: "Gastos",
                total: summary.expenses,
                pct: pct(summary.expenses),
            },
        ],
        total,
    }
}
