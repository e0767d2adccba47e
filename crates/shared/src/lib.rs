//! Shared types, errors, and configuration for Cashup.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management (commission rate, commission mode default)

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CommissionMode};
pub use error::{AppError, AppResult};
