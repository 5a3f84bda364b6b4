//! Error types for tempora operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemporaError {
    #[error("Unparseable date input: {0}")]
    Parse(String),

    #[error("Unknown unit name: {0}")]
    UnknownUnit(String),

    #[error("Invalid date components: {0}")]
    InvalidComponents(String),

    #[error("Invalid locale bundle: {0}")]
    Locale(String),
}

pub type Result<T> = std::result::Result<T, TemporaError>;
