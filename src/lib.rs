//! Equipool - Hospital Equipment Lending Tracker
//!
//! A REST JSON API server for managing a shared pool of medical
//! equipment: asset registry, borrow/return ledger, and reporting.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
