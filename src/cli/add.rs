use chrono::{Local, NaiveDate};

use crate::error::{GastosError, Result};
use crate::fmt::money;
use crate::models::{NewTransaction, TransactionKind};
use crate::settings::load_settings;

use super::view;

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| GastosError::InvalidDate(d.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn run(kind: &str, amount: f64, description: &str, date: Option<&str>) -> Result<()> {
    let kind: TransactionKind = kind.parse()?;
    if !(amount.is_finite() && amount != 0.0) {
        return Err(GastosError::Other(format!("Monto no válido: {amount}")));
    }
    let date = parse_date(date)?;

    let settings = load_settings();
    let mut ledger = super::starting_ledger(&settings, false);
    let txn = ledger.add(NewTransaction::manual(kind, description, amount, date));
    println!("Añadido #{}: {} {}", txn.id, kind.label(), money(txn.amount.abs()));
    println!();
    println!("{}", view::format_register(&ledger));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(parse_date(Some("29/02/2024")), Err(GastosError::InvalidDate(_))));
        assert!(parse_date(None).is_ok());
    }
}
