//! attrcast-report: inventory snapshot assembly and attribute publishing
//!
//! One report cycle builds a fresh `InstanceInventory` snapshot from the
//! collectors, then publishes every snapshot field as an individually
//! addressable attribute under a base path: scalars as plain text, package
//! records as gzip-compressed base64 JSON. Failures at any stage accumulate
//! in the snapshot's error log, which is published last; no failure aborts
//! a cycle.

pub mod encode;
pub mod fields;
pub mod publish;
pub mod snapshot;

pub use encode::EncodeError;
pub use publish::{run_report, write_inventory};
pub use snapshot::{InstanceInventory, collect};
