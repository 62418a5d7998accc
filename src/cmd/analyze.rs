//! Analyze command implementation
//!
//! Handles the `bundle-split analyze` command which reads an existing build
//! output tree and reports bundle sizes for full-import versus on-demand
//! adoption scenarios. It never triggers builds.

use anyhow::Result;
use std::env;

use crate::config::ConfigLoader;
use crate::error::BundleSplitError;
use crate::report::{self, ReportFormatter};

/// Report bundle sizes from the built output
///
/// Fails with a "build first" message and exit code 1 when the output
/// directory does not exist.
///
/// # Examples
///
/// ```no_run
/// use bundle_split::cmd::analyze::cmd_analyze;
///
/// // Human-readable report
/// cmd_analyze(false)?;
///
/// // Machine-readable report for CI
/// cmd_analyze(true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_analyze(json: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let config_file = ConfigLoader::load(&project_root)?;

    let lib_dir = project_root.join(&config_file.lib_dir);
    let report = report::collect(&lib_dir, config_file.artifact_policies())
        .map_err(BundleSplitError::Report)?;

    if json {
        // JSON mode keeps stdout clean for parsers
        println!(
            "{}",
            serde_json::to_string_pretty(&ReportFormatter::to_json(&report))?
        );
    } else {
        ReportFormatter::print(&report);
    }

    Ok(())
}

// The missing-output and JSON contracts are exercised end-to-end in
// tests/analyze_tests.rs, where the working directory can be controlled
// per invocation.
