//! Core helpers for webfuncs.
//!
//! This crate contains pure helpers with ZERO web dependencies. Each module is
//! independent of the others.
//!
//! # Modules
//!
//! - `currency` - Currency registry and money formatting
//! - `time` - Human-readable time differences
//! - `network` - Client IP detection from request variables
//! - `compare` - Order-independent key/value comparison
//! - `session` - Session bootstrap
//! - `random` - Random alphanumeric strings

pub mod compare;
pub mod currency;
pub mod network;
pub mod random;
pub mod session;
pub mod time;
