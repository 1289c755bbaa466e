//! Shared utilities for the gallery backend services

// Re-export common dependencies
pub use mongodb;
pub use thiserror;
pub use tracing;

pub mod database;
pub mod observability;
