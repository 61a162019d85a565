use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How spoken number words are turned into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Substitute each number phrase with its digits and read the digits
    /// left to right. "mil quinientos" becomes 1000500.
    #[default]
    Literal,
    /// Add the words up the way they are spoken. "mil quinientos" is 1500.
    Compose,
}

impl std::fmt::Display for NumberPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberPolicy::Literal => write!(f, "literal"),
            NumberPolicy::Compose => write!(f, "compose"),
        }
    }
}

/// Removed before anything else, in this order. These are substring
/// removals, not word removals.
const FILLERS: &[&str] = &["euros", "euro", "€", "y", "con"];

/// Ordered phrase substitutions. Larger phrases contain smaller ones
/// ("cien mil" contains "cien", "millones" contains "millon"), so the order
/// of this table is load-bearing.
const CASCADE: &[(&str, &str)] = &[
    // millions
    ("diez millones", "10000000"),
    ("nueve millones", "9000000"),
    ("ocho millones", "8000000"),
    ("siete millones", "7000000"),
    ("seis millones", "6000000"),
    ("cinco millones", "5000000"),
    ("cuatro millones", "4000000"),
    ("tres millones", "3000000"),
    ("dos millones", "2000000"),
    ("un millón", "1000000"),
    ("un millon", "1000000"),
    ("millón", "1000000"),
    ("millon", "1000000"),
    // thousands
    ("novecientos mil", "900000"),
    ("ochocientos mil", "800000"),
    ("setecientos mil", "700000"),
    ("seiscientos mil", "600000"),
    ("quinientos mil", "500000"),
    ("cuatrocientos mil", "400000"),
    ("trescientos mil", "300000"),
    ("doscientos mil", "200000"),
    ("cien mil", "100000"),
    ("mil", "1000"),
    // hundreds
    ("novecientos", "900"),
    ("ochocientos", "800"),
    ("setecientos", "700"),
    ("seiscientos", "600"),
    ("quinientos", "500"),
    ("cuatrocientos", "400"),
    ("trescientos", "300"),
    ("doscientos", "200"),
    ("cien", "100"),
    // tens
    ("noventa", "90"),
    ("ochenta", "80"),
    ("setenta", "70"),
    ("sesenta", "60"),
    ("cincuenta", "50"),
    ("cuarenta", "40"),
    ("treinta", "30"),
    ("veinte", "20"),
    ("diez", "10"),
    // units
    ("nueve", "9"),
    ("ocho", "8"),
    ("siete", "7"),
    ("seis", "6"),
    ("cinco", "5"),
    ("cuatro", "4"),
    ("tres", "3"),
    ("dos", "2"),
    ("uno", "1"),
    ("un", "1"),
    ("cero", "0"),
];

/// Extract an amount from free text. `None` means no numeric content was
/// found at all, which is distinct from a spoken zero.
pub fn words_to_amount(text: &str, policy: NumberPolicy) -> Option<f64> {
    match policy {
        NumberPolicy::Literal => literal_amount(text),
        NumberPolicy::Compose => composed_amount(text),
    }
}

/// Literal translation collapsed to a plain number: 0 when nothing numeric
/// was found.
#[allow(dead_code)]
pub fn words_to_number(text: &str) -> f64 {
    words_to_amount(text, NumberPolicy::Literal).unwrap_or(0.0)
}

fn literal_amount(text: &str) -> Option<f64> {
    let mut s = text.to_string();
    for filler in FILLERS {
        s = s.replace(filler, "");
    }
    s = s.replace("coma", ".").replace("punto", "");

    for (phrase, digits) in CASCADE {
        if s.contains(phrase) {
            s = s.replace(phrase, digits);
        }
    }

    let digits: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_float_prefix(&digits)
}

fn numeric_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]*(\.[0-9]*)?").expect("numeric prefix pattern is valid"))
}

/// Longest leading `digits[.digits]` run, as a float. A run without any
/// digit (".", "..") is not a number.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let prefix = numeric_prefix().find(s)?.as_str();
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Composing policy
// ---------------------------------------------------------------------------

enum Word {
    /// `zeros` counts leading zeros written as digits, as in "05".
    Value { value: f64, zeros: u32 },
    Thousand,
    Million,
    Decimal,
    Skip,
}

fn classify(token: &str) -> Word {
    match token {
        "y" | "con" | "euro" | "euros" | "€" | "punto" => Word::Skip,
        "céntimo" | "céntimos" | "centimo" | "centimos" => Word::Skip,
        "coma" => Word::Decimal,
        "mil" => Word::Thousand,
        "millón" | "millon" | "millones" => Word::Million,
        _ => match word_value(token) {
            Some(value) => Word::Value { value, zeros: 0 },
            None => {
                let digits = digits_only(token);
                match parse_float_prefix(&digits) {
                    Some(value) => Word::Value {
                        value,
                        zeros: leading_zeros(&digits, value),
                    },
                    None => Word::Skip,
                }
            }
        },
    }
}

fn digits_only(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Zeros in front of the significant digits of a whole number. A lone "0" is
/// counted by the accumulator like "cero", so "00" has one extra.
fn leading_zeros(digits: &str, value: f64) -> u32 {
    if digits.contains('.') {
        return 0;
    }
    let zeros = digits.chars().take_while(|c| *c == '0').count() as u32;
    if value == 0.0 {
        zeros.saturating_sub(1)
    } else {
        zeros
    }
}

fn word_value(word: &str) -> Option<f64> {
    let v = match word {
        "cero" => 0,
        "un" | "uno" | "una" => 1,
        "dos" => 2,
        "tres" => 3,
        "cuatro" => 4,
        "cinco" => 5,
        "seis" => 6,
        "siete" => 7,
        "ocho" => 8,
        "nueve" => 9,
        "diez" => 10,
        "once" => 11,
        "doce" => 12,
        "trece" => 13,
        "catorce" => 14,
        "quince" => 15,
        "dieciséis" | "dieciseis" => 16,
        "diecisiete" => 17,
        "dieciocho" => 18,
        "diecinueve" => 19,
        "veinte" => 20,
        "veintiuno" | "veintiún" | "veintiun" => 21,
        "veintidós" | "veintidos" => 22,
        "veintitrés" | "veintitres" => 23,
        "veinticuatro" => 24,
        "veinticinco" => 25,
        "veintiséis" | "veintiseis" => 26,
        "veintisiete" => 27,
        "veintiocho" => 28,
        "veintinueve" => 29,
        "treinta" => 30,
        "cuarenta" => 40,
        "cincuenta" => 50,
        "sesenta" => 60,
        "setenta" => 70,
        "ochenta" => 80,
        "noventa" => 90,
        "cien" | "ciento" => 100,
        "doscientos" | "doscientas" => 200,
        "trescientos" | "trescientas" => 300,
        "cuatrocientos" | "cuatrocientas" => 400,
        "quinientos" | "quinientas" => 500,
        "seiscientos" | "seiscientas" => 600,
        "setecientos" | "setecientas" => 700,
        "ochocientos" | "ochocientas" => 800,
        "novecientos" | "novecientas" => 900,
        _ => return None,
    };
    Some(f64::from(v))
}

/// Running sum for one side of the decimal marker.
#[derive(Default)]
struct Accumulator {
    total: f64,
    group: f64,
    seen: bool,
    leading_zeros: u32,
}

impl Accumulator {
    fn push(&mut self, word: Word) {
        match word {
            Word::Value { value, zeros } => {
                if self.total == 0.0 && self.group == 0.0 {
                    self.leading_zeros += zeros + u32::from(value == 0.0);
                }
                self.group += value;
                self.seen = true;
            }
            Word::Thousand => {
                let n = if self.group == 0.0 { 1.0 } else { self.group };
                self.total += n * 1_000.0;
                self.group = 0.0;
                self.seen = true;
            }
            Word::Million => {
                let n = if self.group == 0.0 && self.total == 0.0 {
                    1.0
                } else {
                    self.total + self.group
                };
                self.total = n * 1_000_000.0;
                self.group = 0.0;
                self.seen = true;
            }
            Word::Decimal | Word::Skip => {}
        }
    }

    fn value(&self) -> f64 {
        self.total + self.group
    }
}

fn composed_amount(text: &str) -> Option<f64> {
    let spaced = text.replace('€', " € ");
    let mut integer = Accumulator::default();
    let mut fraction = Accumulator::default();
    let mut in_fraction = false;
    let mut after_currency = false;

    for raw in spaced.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '.' && c != '€');
        // "cinco euros con cincuenta": "con" after the currency starts the cents
        let word = match token {
            "con" if after_currency => Word::Decimal,
            _ => classify(token),
        };
        after_currency = matches!(token, "euro" | "euros" | "€");
        match word {
            Word::Decimal => in_fraction = true,
            word if in_fraction => fraction.push(word),
            word => integer.push(word),
        }
    }

    if !integer.seen && !fraction.seen {
        return None;
    }

    let whole = integer.value();
    let frac = fraction.value();
    if frac <= 0.0 {
        return Some(whole);
    }
    let digits = frac.trunc().to_string().len() as i32;
    let scale = 10f64.powi(digits + fraction.leading_zeros as i32);
    Some(whole + frac.trunc() / scale)
}
