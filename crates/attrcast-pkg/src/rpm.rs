//! rpm/dnf package enumeration (Fedora/RHEL/CentOS)

use std::sync::Arc;

use async_trait::async_trait;
use attrcast_exec::traits::CommandRunner;
use tracing::{debug, info, instrument};

use crate::error::PackageError;
use crate::traits::PackageProvider;
use crate::types::{PackageKind, PkgInfo};

/// rpm/dnf provider
pub struct RpmProvider {
    runner: Arc<dyn CommandRunner>,
}

impl RpmProvider {
    /// Create a new rpm provider
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Parse `rpm -qa` queryformat output
    ///
    /// One package per line: `name arch version-release`.
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

    /// Parse `dnf check-update` output
    fn parse_updates(output: &str) -> Vec<PkgInfo> {
        let mut packages = Vec::new();

        for line in output.lines() {
            // Skip empty lines and metadata headers
            if line.is_empty() || line.starts_with("Last metadata") {
                continue;
            }

            // Parse: name.arch version repository
            // Example: vim-enhanced.x86_64 2:8.2.2637-20.el9_1 baseos
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                let name_arch = parts[0];
                let version = parts[1];

                let (name, arch) = match name_arch.rfind('.') {
                    Some(idx) => (&name_arch[..idx], &name_arch[idx + 1..]),
                    None => (name_arch, ""),
                };

                packages.push(PkgInfo::new(name, arch, version));
            }
        }

        packages
    }
}

#[async_trait]
impl PackageProvider for RpmProvider {
    async fn is_available(&self) -> bool {
        match self.runner.run("which rpm").await {
            Ok(result) => result.success(),
            Err(_) => false,
        }
    }

    #[instrument(skip(self))]
    async fn installed(&self) -> Result<Vec<PkgInfo>, PackageError> {
        debug!("listing installed rpm packages");

        let cmd = r"rpm -qa --queryformat '%{NAME} %{ARCH} %{VERSION}-%{RELEASE}\n'";
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
        info!(count = packages.len(), "installed rpm packages listed");

        Ok(packages)
    }

    #[instrument(skip(self))]
    async fn updates(&self) -> Result<Vec<PkgInfo>, PackageError> {
        debug!("listing rpm package updates");

        let result = self
            .runner
            .run("dnf check-update -q")
            .await
            .map_err(|e| PackageError::ExecutionError(e.to_string()))?;

        // dnf check-update exits 100 when updates are available, 0 when none
        if result.status != 0 && result.status != 100 {
            return Err(PackageError::CommandFailed {
                status: result.status,
                message: result.stderr,
            });
        }

        let packages = Self::parse_updates(&result.stdout);
        info!(count = packages.len(), "rpm package updates listed");

        Ok(packages)
    }

    fn kind(&self) -> PackageKind {
        PackageKind::Rpm
    }
}
