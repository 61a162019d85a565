use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::money;
use crate::layout::Layout;
use crate::ledger::Ledger;
use crate::models::TransactionKind;
use crate::reports::{self, Breakdown, Summary};

pub fn format_summary(summary: &Summary, layout: Layout) -> String {
    let balance = if summary.balance >= 0.0 {
        money(summary.balance).blue().bold()
    } else {
        money(summary.balance).yellow().bold()
    };

    if layout == Layout::Fold {
        return format!(
            "Ingresos  {}\nGastos    {}\nBalance   {}",
            money(summary.income).green(),
            money(summary.expenses).red(),
            balance
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["Ingresos", "Gastos", "Balance"]);
    table.add_row(vec![
        Cell::new(money(summary.income).green()),
        Cell::new(money(summary.expenses).red()),
        Cell::new(balance),
    ]);
    format!("Resumen\n{table}")
}

pub fn format_register(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "Transacciones\nNo hay transacciones.".to_string();
    }
    let rows = ledger.sorted_newest_first();

    let mut table = Table::new();
    table.set_header(vec!["ID", "Fecha", "Descripción", "Categoría", "Monto"]);
    for t in rows {
        let amount = match t.kind {
            TransactionKind::Income => money(t.amount.abs()).green(),
            TransactionKind::Expense => money(t.amount.abs()).red(),
        };
        table.add_row(vec![
            Cell::new(&t.id),
            Cell::new(t.date.format("%d %b %Y")),
            Cell::new(&t.description),
            Cell::new(&t.category),
            Cell::new(amount),
        ]);
    }
    format!("Transacciones\n{table}")
}

pub fn format_breakdown(data: &Breakdown) -> String {
    let mut table = Table::new();
    table.set_header(vec!["", "Total", "%"]);
    for slice in &data.slices {
        table.add_row(vec![
            Cell::new(slice.label),
            Cell::new(money(slice.total)),
            Cell::new(format!("{}%", slice.pct)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(data.total)),
        Cell::new(""),
    ]);
    format!("Distribución\n{table}")
}

/// Everything the layout has room for, separated by blank lines.
pub fn format_ledger(ledger: &Ledger, layout: Layout) -> String {
    let txns = ledger.transactions();
    let mut sections = vec![format_summary(&reports::get_summary(txns), layout)];
    if layout.shows_breakdown() {
        sections.push(format_breakdown(&reports::get_breakdown(txns)));
    }
    if layout.shows_register() {
        sections.push(format_register(ledger));
    }
    sections.join("\n\n")
}
