//! Painting upload and gallery listing service

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod storage;

#[cfg(test)]
mod test_support;

use storage::PaintingStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PaintingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PaintingStore>) -> Self {
        Self { store }
    }
}
