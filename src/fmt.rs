use crate::models::TransactionKind;

/// Format a float as a euro amount with two decimals and no grouping:
/// €1234.56, €-40.00
pub fn money(val: f64) -> String {
    // avoid printing "€-0.00"
    let val = if val == 0.0 { 0.0 } else { val };
    format!("€{val:.2}")
}

/// Confirmation shown after a voice command creates a transaction.
pub fn created_message(kind: TransactionKind, amount: f64) -> String {
    format!("¡{} de {} creado!", kind.label(), money(amount.abs()))
}
