//! attrcast-store: attribute store transport
//!
//! The attribute store is a key-path to byte-value service. This crate
//! provides the write primitive: `put` a byte payload at a slash-delimited
//! attribute path under a base URL.
//!
//! # Examples
//!
//! ```no_run
//! use attrcast_store::HttpStore;
//! use attrcast_store::traits::AttributeStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = HttpStore::new("http://metadata.internal")?;
//! store.put("/guestInventory/Hostname", b"web-01".to_vec()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

pub use error::{Result, StoreError};
pub use http::HttpStore;
pub use traits::AttributeStore;
