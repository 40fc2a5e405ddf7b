//! dpkg/apt package enumeration (Debian/Ubuntu)

use std::sync::Arc;

use async_trait::async_trait;
use attrcast_exec::traits::CommandRunner;
use tracing::{debug, info, instrument};

use crate::error::PackageError;
use crate::traits::PackageProvider;
use crate::types::{PackageKind, PkgInfo};

/// dpkg/apt provider
pub struct AptProvider {
    runner: Arc<dyn CommandRunner>,
}

impl AptProvider {
    /// Create a new apt provider
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Parse `dpkg-query -W` output
    ///
    /// One package per line: `name arch version`.
    fn parse_installed(output: &str) -> Vec<PkgInfo> {
        let mut packages = Vec::new();

        for line in output.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() == 3 {
                packages.push(PkgInfo::new(parts[0], parts[1], parts[2]));
            }
        }

        packages
    }

    /// Parse `apt list --upgradable` output
    fn parse_upgradable(output: &str) -> Vec<PkgInfo> {
        let mut packages = Vec::new();

        for line in output.lines() {
            // Skip header lines and empty lines
            if line.is_empty() || line.starts_with("Listing") || line.starts_with("WARNING") {
                continue;
            }

            // Parse: package/suite version arch [upgradable from: oldversion]
            // Example: vim/now 2:8.2.2434-3+deb11u1 amd64 [upgradable from: 2:8.2.2434-3]
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                let name = parts[0].split('/').next().unwrap_or(parts[0]);
                let version = parts[1];
                let arch = parts[2];

                packages.push(PkgInfo::new(name, arch, version));
            }
        }

        packages
    }
}

#[async_trait]
impl PackageProvider for AptProvider {
    async fn is_available(&self) -> bool {
        match self.runner.run("which dpkg-query").await {
            Ok(result) => result.success(),
            Err(_) => false,
        }
    }

    #[instrument(skip(self))]
    async fn installed(&self) -> Result<Vec<PkgInfo>, PackageError> {
        debug!("listing installed deb packages");

        let cmd = r"dpkg-query -W -f='${Package} ${Architecture} ${Version}\n'";
        let result = self
            .runner
            .run(cmd)
            .await
            .map_err(|e| PackageError::ExecutionError(e.to_string()))?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                status: result.status,
                message: result.stderr,
            });
        }

        let packages = Self::parse_installed(&result.stdout);
        info!(count = packages.len(), "installed deb packages listed");

        Ok(packages)
    }

    #[instrument(skip(self))]
    async fn updates(&self) -> Result<Vec<PkgInfo>, PackageError> {
        debug!("listing upgradable deb packages");

        let result = self
            .runner
            .run("apt list --upgradable 2>/dev/null")
            .await
            .map_err(|e| PackageError::ExecutionError(e.to_string()))?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                status: result.status,
                message: result.stderr,
            });
        }

        let packages = Self::parse_upgradable(&result.stdout);
        info!(count = packages.len(), "upgradable deb packages listed");

        Ok(packages)
    }

    fn kind(&self) -> PackageKind {
        PackageKind::Deb
    }
}
