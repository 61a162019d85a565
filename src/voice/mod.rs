//! Voice command parsing.
//!
//! Turns a transcript produced by speech recognition ("gasto cincuenta",
//! "ingreso un millón") into a [`TransactionIntent`]. Everything here is pure:
//! the caller owns microphone capture and what happens to the intent after.

mod command;
mod numbers;

#[cfg(test)]
pub use command::parse_command;
pub use command::{parse_command_with, ParseError, TransactionIntent};
pub use numbers::NumberPolicy;
