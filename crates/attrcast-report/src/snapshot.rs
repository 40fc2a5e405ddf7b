//! Inventory snapshot type and builder

use std::sync::Arc;

use attrcast_exec::traits::CommandRunner;
use attrcast_pkg::{Packages, installed_packages, package_updates};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// One report cycle's inventory snapshot
///
/// Built fresh each cycle. Scalar fields are always present; a failed
/// collector leaves its fields empty and records the failure in `errors`.
/// `errors` keeps accumulating through the publish phase as well.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstanceInventory {
    /// Local hostname
    pub hostname: String,
    /// Full distribution name
    pub long_name: String,
    /// Short distribution identifier
    pub short_name: String,
    /// Distribution version
    pub version: String,
    /// Machine architecture
    pub architecture: String,
    /// Kernel release
    pub kernel_version: String,
    /// Installed packages by manager family
    pub installed_packages: Packages,
    /// Packages with available updates
    pub package_updates: Packages,
    /// Every failure seen while building or publishing this snapshot
    pub errors: Vec<String>,
}

/// Build a snapshot from the collectors
///
/// Each collector failure is recorded in the snapshot's error log and leaves
/// the affected fields at their zero values; no failure blocks the other
/// collectors and the snapshot is always returned.
#[instrument(skip(runner))]
pub async fn collect(runner: Arc<dyn CommandRunner>) -> InstanceInventory {
    info!("gathering instance inventory");

    let mut inventory = InstanceInventory::default();

    match attrcast_osinfo::hostname(runner.as_ref()).await {
        Ok(name) => inventory.hostname = name,
        Err(e) => {
            warn!(error = %e, "hostname resolution failed");
            inventory.errors.push(e.to_string());
        }
    }

    match attrcast_osinfo::detect(runner.as_ref()).await {
        Ok(distro) => {
            inventory.long_name = distro.long_name;
            inventory.short_name = distro.short_name;
            inventory.version = distro.version;
            inventory.kernel_version = distro.kernel;
            inventory.architecture = distro.architecture;
        }
        Err(e) => {
            warn!(error = %e, "distribution detection failed");
            inventory.errors.push(e.to_string());
        }
    }

    let (installed, errs) = installed_packages(Arc::clone(&runner)).await;
    inventory.installed_packages = installed;
    inventory.errors.extend(errs);

    let (updates, errs) = package_updates(runner).await;
    inventory.package_updates = updates;
    inventory.errors.extend(errs);

    info!(errors = inventory.errors.len(), "inventory gathered");

    inventory
}
