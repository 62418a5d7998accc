//! Error types for the build pipeline

use thiserror::Error;

/// Errors that can occur during pipeline execution
#[derive(Error, Debug)]
pub enum PipelineError {
    /// I/O error during build
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool error
    #[error("Tool error: {0}")]
    Tool(#[from] crate::tools::ToolError),

    /// Bundler executable not found
    #[error("Bundler not found: {0}")]
    BundlerMissing(String),

    /// Entry point file does not exist
    #[error("Entry point missing for {target}: {path}")]
    EntryMissing {
        /// Target whose entry is missing
        target: String,
        /// Expected entry path
        path: String,
    },

    /// A bundler invocation reported errors
    #[error("Bundler failed for {target}")]
    BundlerFailed {
        /// Target being built when the bundler failed
        target: String,
        /// Captured bundler stderr
        stderr: String,
    },
}
