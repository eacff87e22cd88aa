//! Document domain entities.

pub mod format;
pub mod model;

pub use format::{FileFormat, FormatCategory};
pub use model::DocumentRecord;
