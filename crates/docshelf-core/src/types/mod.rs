//! Core type definitions used across the DocShelf workspace.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::*;
pub use pagination::{Page, PageRequest, Pagination};
pub use sorting::{SortDirection, SortKey, SortSpec};
