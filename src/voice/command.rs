use serde::Serialize;
use thiserror::Error;

use super::numbers::{words_to_amount, NumberPolicy};
use crate::models::TransactionKind;

const INCOME_KEYWORD: &str = "ingreso";
const EXPENSE_KEYWORD: &str = "gasto";

/// Why a transcript could not be turned into a transaction. The messages are
/// shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Debe incluir la palabra 'ingreso' o 'gasto'")]
    MissingIntentKeyword,

    #[error("No se pudo determinar un monto válido")]
    InvalidAmount,
}

/// A recognised voice command. Only the parser builds these, so the amount
/// is always positive and the description always starts out empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionIntent {
    kind: TransactionKind,
    description: String,
    amount: f64,
}

impl TransactionIntent {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

pub type ParseResult = std::result::Result<TransactionIntent, ParseError>;

/// Parse a transcript with the literal number policy.
#[allow(dead_code)]
pub fn parse_command(transcript: &str) -> ParseResult {
    parse_command_with(transcript, NumberPolicy::Literal)
}

/// Parse a transcript like "gasto cincuenta euros". The first keyword found
/// decides the kind ("ingreso" is checked before "gasto"); whatever is left
/// once every copy of that keyword is removed is read as the amount.
pub fn parse_command_with(transcript: &str, policy: NumberPolicy) -> ParseResult {
    let text = transcript.trim().to_lowercase();

    let (kind, remainder) = if text.contains(INCOME_KEYWORD) {
        (TransactionKind::Income, text.replace(INCOME_KEYWORD, ""))
    } else if text.contains(EXPENSE_KEYWORD) {
        (TransactionKind::Expense, text.replace(EXPENSE_KEYWORD, ""))
    } else {
        log::debug!("no intent keyword in {text:?}");
        return Err(ParseError::MissingIntentKeyword);
    };

    let amount = match words_to_amount(remainder.trim(), policy) {
        Some(amount) => amount,
        None => {
            log::debug!("no amount in {remainder:?}");
            0.0
        }
    };
    // NaN also fails here
    if !(amount > 0.0) {
        return Err(ParseError::InvalidAmount);
    }

    log::debug!("parsed {text:?} as {kind} of {amount} ({policy})");
    Ok(TransactionIntent {
        kind,
        description: String::new(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(kind: TransactionKind, amount: f64) -> TransactionIntent {
        TransactionIntent {
            kind,
            description: String::new(),
            amount,
        }
    }

    #[test]
    fn test_income_with_digits() {
        assert_eq!(
            parse_command("ingreso 1000"),
            Ok(intent(TransactionKind::Income, 1000.0))
        );
    }

    #[test]
    fn test_expense_with_words() {
        assert_eq!(
            parse_command("gasto cincuenta"),
            Ok(intent(TransactionKind::Expense, 50.0))
        );
    }

    #[test]
    fn test_income_one_million() {
        assert_eq!(
            parse_command("ingreso un millón"),
            Ok(intent(TransactionKind::Income, 1_000_000.0))
        );
    }

    #[test]
    fn test_expense_five_hundred_thousand() {
        assert_eq!(
            parse_command("gasto quinientos mil"),
            Ok(intent(TransactionKind::Expense, 500_000.0))
        );
    }

    #[test]
    fn test_missing_keyword() {
        assert_eq!(
            parse_command("hola mundo"),
            Err(ParseError::MissingIntentKeyword)
        );
        assert_eq!(parse_command(""), Err(ParseError::MissingIntentKeyword));
        assert_eq!(
            parse_command("cincuenta euros"),
            Err(ParseError::MissingIntentKeyword)
        );
    }

    #[test]
    fn test_keyword_without_amount() {
        assert_eq!(parse_command("ingreso"), Err(ParseError::InvalidAmount));
        assert_eq!(
            parse_command("gasto para la cena"),
            Err(ParseError::InvalidAmount)
        );
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        assert_eq!(parse_command("gasto cero"), Err(ParseError::InvalidAmount));
        assert_eq!(parse_command("ingreso 0"), Err(ParseError::InvalidAmount));
    }

    #[test]
    fn test_lone_decimal_marker_is_invalid() {
        assert_eq!(parse_command("gasto coma"), Err(ParseError::InvalidAmount));
    }

    #[test]
    fn test_compound_number_concatenates_under_literal_policy() {
        assert_eq!(
            parse_command("gasto mil quinientos"),
            Ok(intent(TransactionKind::Expense, 1_000_500.0))
        );
    }

    #[test]
    fn test_compound_number_sums_under_compose_policy() {
        assert_eq!(
            parse_command_with("gasto mil quinientos", NumberPolicy::Compose),
            Ok(intent(TransactionKind::Expense, 1500.0))
        );
    }

    #[test]
    fn test_income_keyword_takes_precedence() {
        let parsed = parse_command("gasto ingreso 20").unwrap();
        assert_eq!(parsed.kind(), TransactionKind::Income);
        // "gasto" is left in the remainder and contributes no digits
        assert_eq!(parsed.amount(), 20.0);
    }

    #[test]
    fn test_every_keyword_copy_removed() {
        let parsed = parse_command("ingreso ingreso 5").unwrap();
        assert_eq!(parsed.amount(), 5.0);
    }

    #[test]
    fn test_description_starts_empty() {
        let parsed = parse_command("gasto 12 coma 5 euros").unwrap();
        assert_eq!(parsed.description(), "");
        assert_eq!(parsed.amount(), 12.5);
    }

    #[test]
    fn test_uppercase_transcript_is_normalised() {
        assert_eq!(
            parse_command("  Gasto CINCUENTA "),
            Ok(intent(TransactionKind::Expense, 50.0))
        );
    }

    #[test]
    fn test_parsing_is_repeatable() {
        for text in ["ingreso 1000", "gasto cincuenta", "hola", "ingreso", "gasto mil quinientos"] {
            assert_eq!(parse_command(text), parse_command(text));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::MissingIntentKeyword.to_string(),
            "Debe incluir la palabra 'ingreso' o 'gasto'"
        );
        assert_eq!(
            ParseError::InvalidAmount.to_string(),
            "No se pudo determinar un monto válido"
        );
    }
}
