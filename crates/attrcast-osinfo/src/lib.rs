//! attrcast-osinfo: OS distribution and identity facts
//!
//! Resolves the hostname and distribution identity (name, version, kernel,
//! architecture) of the machine being inventoried.

pub mod distro;
pub mod error;
pub mod types;

pub use distro::{detect, hostname};
pub use error::OsInfoError;
pub use types::DistroInfo;
