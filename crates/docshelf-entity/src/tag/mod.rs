//! Tag domain entities.

pub mod color;
pub mod model;

pub use color::TagColor;
pub use model::Tag;
