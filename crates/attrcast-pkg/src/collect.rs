//! Aggregated package queries
//!
//! Each query walks every available provider and returns whatever data it
//! could gather plus the error strings for whatever it could not. Callers
//! decide what to do with partial results; nothing here aborts early.

use std::sync::Arc;

use attrcast_exec::traits::CommandRunner;
use tracing::{info, instrument, warn};

use crate::apt::AptProvider;
use crate::rpm::RpmProvider;
use crate::traits::PackageProvider;
use crate::types::{PackageKind, Packages, PkgInfo};

fn providers(runner: &Arc<dyn CommandRunner>) -> Vec<Box<dyn PackageProvider>> {
    vec![
        Box::new(AptProvider::new(Arc::clone(runner))),
        Box::new(RpmProvider::new(Arc::clone(runner))),
    ]
}

fn record(packages: &mut Packages, kind: PackageKind, list: Vec<PkgInfo>) {
    match kind {
        PackageKind::Deb => packages.deb = list,
        PackageKind::Rpm => packages.rpm = list,
    }
}

/// Enumerate installed packages across all available manager families
///
/// Returns the packages found plus zero or more error strings; a failing
/// provider contributes an error without blocking the others.
#[instrument(skip(runner))]
pub async fn installed_packages(runner: Arc<dyn CommandRunner>) -> (Packages, Vec<String>) {
    query_providers(runner, QueryMode::Installed).await
}

/// Enumerate available package updates across all available manager families
#[instrument(skip(runner))]
pub async fn package_updates(runner: Arc<dyn CommandRunner>) -> (Packages, Vec<String>) {
    query_providers(runner, QueryMode::Updates).await
}

#[derive(Debug, Clone, Copy)]
enum QueryMode {
    Installed,
    Updates,
}

async fn query_providers(
    runner: Arc<dyn CommandRunner>,
    mode: QueryMode,
) -> (Packages, Vec<String>) {
    let mut packages = Packages::default();
    let mut errors = Vec::new();
    let mut any_available = false;

    for provider in providers(&runner) {
        if !provider.is_available().await {
            continue;
        }
        any_available = true;

        let result = match mode {
            QueryMode::Installed => provider.installed().await,
            QueryMode::Updates => provider.updates().await,
        };

        match result {
            Ok(list) => {
                info!(kind = %provider.kind(), count = list.len(), "packages enumerated");
                record(&mut packages, provider.kind(), list);
            }
            Err(e) => {
                warn!(kind = %provider.kind(), error = %e, "package enumeration failed");
                errors.push(e.to_string());
            }
        }
    }

    if !any_available {
        warn!("no supported package manager found");
        errors.push("no supported package manager found".to_string());
    }

    (packages, errors)
}
