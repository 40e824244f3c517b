//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when no expense matches an identifier.
//! - [`InvalidId`] thrown when an identifier cannot be parsed.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidId`]: EngineError::InvalidId
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("invalid expense id: {0}")]
    InvalidId(String),
    #[error("invalid title: {0}")]
    InvalidTitle(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::InvalidTitle(a), Self::InvalidTitle(b)) => a == b,
            (Self::Configuration(a), Self::Configuration(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
