//! # explorer-core
//!
//! Core crate for the directory explorer. Contains configuration schemas,
//! the tree entry and file content types, absorbed-failure events with their
//! reporter trait, the secure identifier generator, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other explorer crates.

pub mod config;
pub mod error;
pub mod events;
pub mod random;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
