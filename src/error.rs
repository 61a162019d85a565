use thiserror::Error;

use crate::voice::ParseError;

#[derive(Error, Debug)]
pub enum GastosError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de ajustes: {0}")]
    Settings(String),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Transacción desconocida: {0}")]
    UnknownTransaction(String),

    #[error("Fecha no válida: {0} (formato AAAA-MM-DD)")]
    InvalidDate(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GastosError>;
