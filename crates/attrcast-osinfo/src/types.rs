//! Distribution fact types

use serde::{Deserialize, Serialize};

/// Operating system distribution facts
///
/// All fields default to empty strings so a failed detection still yields a
/// complete record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistroInfo {
    /// Full descriptive name (e.g. "Debian GNU/Linux 12 (bookworm)")
    pub long_name: String,
    /// Short identifier (e.g. "debian", "fedora")
    pub short_name: String,
    /// Version identifier (e.g. "12", "39")
    pub version: String,
    /// Kernel release string
    pub kernel: String,
    /// Machine architecture (`x86_64`, `aarch64`, etc.)
    pub architecture: String,
}
