//! Bundler executable detection and verification
//!
//! The build pipeline shells out to one external bundler (esbuild by default,
//! configurable). Before the first invocation we verify the executable is
//! actually reachable so a missing install fails with an actionable message
//! instead of a spawn error mid-pipeline.

use crate::infra::{CommandExecutor, RealCommandExecutor};
use thiserror::Error;

/// Errors that can occur during tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error during tool execution
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool execution failed
    #[error("Failed to get version for {0}")]
    VersionFailed(String),
}

/// An external bundler executable with detection capabilities
///
/// # Examples
///
/// ```
/// use bundle_split::tools::BundlerTool;
///
/// let bundler = BundlerTool::new("esbuild");
/// if bundler.is_installed() {
///     println!("bundler found on PATH");
/// }
/// ```
#[derive(Debug)]
pub struct BundlerTool<CE: CommandExecutor = RealCommandExecutor> {
    /// Executable name or path, as configured
    pub binary: String,
    cmd_executor: CE,
}

impl BundlerTool<RealCommandExecutor> {
    /// Create a detector for the given bundler executable
    pub fn new(binary: impl Into<String>) -> Self {
        Self::with_executor(binary, RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> BundlerTool<CE> {
    /// Create a detector with a custom command executor
    pub fn with_executor(binary: impl Into<String>, cmd_executor: CE) -> Self {
        Self {
            binary: binary.into(),
            cmd_executor,
        }
    }

    /// Check if the bundler is installed and resolvable
    ///
    /// Accepts both bare names resolved through PATH and absolute paths,
    /// so configs may point at a project-local bundler script.
    pub fn is_installed(&self) -> bool {
        which::which(&self.binary).is_ok()
    }

    /// Get the version string of the installed bundler
    pub fn version(&self) -> Result<String, ToolError> {
        let output = self
            .cmd_executor
            .execute(|cmd| cmd.arg("--version"), &self.binary)?;

        if !output.status.success() {
            return Err(ToolError::VersionFailed(self.binary.clone()));
        }

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        Ok(version)
    }
}
