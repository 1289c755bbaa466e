//! Observability utilities for the gallery services
//!
//! Provides centralized logging setup

pub mod logging;

pub use logging::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Invalid logging configuration: {0}")]
    Config(String),
}

pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
