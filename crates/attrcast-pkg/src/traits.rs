//! Package provider trait

use async_trait::async_trait;

use crate::error::PackageError;
use crate::types::{PackageKind, PkgInfo};

/// Read-only view of one package manager family
#[async_trait]
pub trait PackageProvider: Send + Sync {
    /// Check whether this manager family exists on the host
    async fn is_available(&self) -> bool;

    /// List currently installed packages
    async fn installed(&self) -> Result<Vec<PkgInfo>, PackageError>;

    /// List packages with an available update
    async fn updates(&self) -> Result<Vec<PkgInfo>, PackageError>;

    /// Which manager family this provider reads
    fn kind(&self) -> PackageKind;
}
