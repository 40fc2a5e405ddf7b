//! attrcast-exec: local command execution
//!
//! Provides the command-execution seam the collectors run through, so every
//! probe of the host (os-release, uname, package managers) is mockable.

pub mod error;
pub mod local;
pub mod result;
pub mod traits;

pub use error::ExecError;
pub use local::LocalRunner;
pub use result::CommandResult;
pub use traits::CommandRunner;
