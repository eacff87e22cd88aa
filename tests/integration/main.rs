//! HTTP integration tests driving the full router in-process.

mod helpers;

mod document_test;
mod tag_test;
mod trash_test;
