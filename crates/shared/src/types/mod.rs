//! Common types used across the application.

pub mod position;

pub use position::Position;
