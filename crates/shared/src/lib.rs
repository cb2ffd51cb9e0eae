//! Shared types, errors, and configuration for webfuncs.
//!
//! This crate provides common types used across all other crates:
//! - Label placement for formatted money
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::Position;
