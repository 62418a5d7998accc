//! Enhanced error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for scripting and CI

use thiserror::Error;

use crate::pipeline::PipelineError;
use crate::report::ReportError;

/// Enhanced bundle-split errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BundleSplitError {
    /// Configured bundler executable is not installed
    #[error("Bundler not installed: {bundler}")]
    BundlerMissing {
        /// Bundler executable name or path
        bundler: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Pipeline error during build
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Reporter error while scanning build output
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl BundleSplitError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_split::error::BundleSplitError;
    ///
    /// let error = BundleSplitError::BundlerMissing {
    ///     bundler: "esbuild".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// assert!(suggestion.unwrap().contains("esbuild"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::BundlerMissing { bundler } => Some(format!(
                "Install {} (e.g. npm install -g {}) or point `bundler` in \
                 .bundle-split.toml at an existing executable",
                bundler, bundler
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::Pipeline(e) => match e {
                PipelineError::EntryMissing { path, .. } => Some(format!(
                    "Create {} or adjust `source-dir`/`components-dir` in .bundle-split.toml",
                    path
                )),
                PipelineError::BundlerFailed { .. } => {
                    Some("Check the bundler errors above and fix the component source".to_string())
                }
                _ => Some("Check the build errors above".to_string()),
            },
            Self::Report(e) => match e {
                ReportError::OutputMissing(_) => {
                    Some("Run 'bundle-split build' first".to_string())
                }
                ReportError::ArtifactMissing(_) => Some(
                    "The build output is incomplete; rebuild, or mark the artifact kind \
                     optional under [artifacts] in .bundle-split.toml"
                        .to_string(),
                ),
                ReportError::Io(_) => {
                    Some("Check that the output directory is readable".to_string())
                }
            },
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions where one applies; a missing build
    /// output exits 1 so "analyze before build" stays scriptable.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_split::error::BundleSplitError;
    ///
    /// let error = BundleSplitError::BundlerMissing {
    ///     bundler: "esbuild".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 127); // Command not found
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BundlerMissing { .. } => 127, // Command not found (Unix convention)
            Self::Io { .. } => 74,              // EX_IOERR
            Self::Pipeline(_) => 1,             // Build failed
            Self::Report(e) => match e {
                ReportError::OutputMissing(_) => 1,
                ReportError::ArtifactMissing(_) => 66, // EX_NOINPUT
                ReportError::Io(_) => 74,              // EX_IOERR
            },
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to BundleSplitError for suggestions
        if let Some(bs_error) = error.downcast_ref::<BundleSplitError>() {
            if let Some(suggestion) = bs_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(bs_error) = error.downcast_ref::<BundleSplitError>() {
            bs_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
