//! attrcast-pkg: installed-package and update enumeration
//!
//! Provides read-only package inventory across package managers (dpkg/apt,
//! rpm/dnf), aggregated into one `Packages` record per query.

pub mod apt;
pub mod collect;
pub mod error;
pub mod rpm;
pub mod traits;
pub mod types;

pub use collect::{installed_packages, package_updates};
pub use error::PackageError;
pub use types::{Packages, PkgInfo};
