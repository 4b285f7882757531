//! PhoneBill Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the PhoneBill system. It includes:
//!
//! - Domain models (CallRecord, Tariff, BillSummary)
//! - Currency rounding helpers
//! - Common traits for the rating and billing services
//! - Unified error handling with stable error codes
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
