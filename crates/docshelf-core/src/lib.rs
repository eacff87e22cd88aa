//! # docshelf-core
//!
//! Core crate for DocShelf. Contains the repository and blob-store traits,
//! configuration schemas, typed identifiers, pagination/sorting types,
//! formatting helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DocShelf crates.

pub mod config;
pub mod error;
pub mod format;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
