//! Package record types

use serde::{Deserialize, Serialize};

/// Identity of one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgInfo {
    /// Package name
    pub name: String,
    /// Package architecture
    pub arch: String,
    /// Package version
    pub version: String,
}

impl PkgInfo {
    /// Create a new package identity
    pub fn new(
        name: impl Into<String>,
        arch: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arch: arch.into(),
            version: version.into(),
        }
    }
}

/// Package lists grouped by manager family
///
/// Empty lists are omitted from the serialized form so consumers only see
/// the manager families present on the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packages {
    /// dpkg/apt packages
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub deb: Vec<PkgInfo>,
    /// rpm/dnf packages
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rpm: Vec<PkgInfo>,
}

impl Packages {
    /// Check whether no packages were recorded at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deb.is_empty() && self.rpm.is_empty()
    }

    /// Total package count across manager families
    #[must_use]
    pub fn len(&self) -> usize {
        self.deb.len() + self.rpm.len()
    }
}

/// Package manager family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// Debian/Ubuntu (dpkg/apt)
    Deb,
    /// Fedora/RHEL (rpm/dnf)
    Rpm,
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageKind::Deb => write!(f, "deb"),
            PackageKind::Rpm => write!(f, "rpm"),
        }
    }
}
