//! Blob store trait for opaque file contents.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Storage for uploaded file bytes, keyed by document id.
///
/// DocShelf never inspects the contents; they are written on upload,
/// read on download and dropped on permanent deletion.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the store type name (e.g. "memory").
    fn store_type(&self) -> &str;

    /// Write bytes under `key`, replacing any previous contents.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Read the bytes stored under `key`. Fails with `NotFound` if absent.
    async fn get(&self, key: &str) -> AppResult<Bytes>;

    /// Delete the bytes stored under `key`. Missing keys are not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether `key` holds any bytes.
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
