//! Composite attribute payload encoding
//!
//! The attribute store accepts text payloads only, so structured records go
//! through serialize → gzip → base64 before transport.

use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use thiserror::Error;

/// Errors from the record encoding pipeline
#[derive(Error, Debug)]
pub enum EncodeError {
    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Compression stage failed
    #[error("compression failed: {0}")]
    Compress(#[from] std::io::Error),
}

/// Encode a structured record for attribute transport
///
/// Each stage's output is fully materialized before the next begins, and the
/// gzip stream is finished before its bytes are consumed, so callers never
/// see a partial payload: on any error nothing is returned at all.
pub fn encode_record<T: Serialize>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let json = serde_json::to_vec(value)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(STANDARD.encode(compressed).into_bytes())
}
