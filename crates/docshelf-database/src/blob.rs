//! In-memory blob store for uploaded file contents.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::BlobStore;

/// Keeps file bytes in a `HashMap` behind a read/write lock.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    /// Create an empty blob store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.blobs.write().await.insert(key.to_string(), data);
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Bytes> {
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No stored contents for '{key}'")))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.blobs.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.blobs.read().await.contains_key(key))
    }
}
