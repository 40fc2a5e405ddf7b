//! Attribute store trait

use async_trait::async_trait;

use crate::error::Result;

/// Write primitive of the attribute store
///
/// Paths are slash-delimited hierarchical strings; content is an opaque byte
/// payload. Implementations own their transport policy (timeouts, sessions);
/// callers see only success or a transport error.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    /// Write `content` at the attribute `path`
    async fn put(&self, path: &str, content: Vec<u8>) -> Result<()>;
}
