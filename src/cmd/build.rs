//! Build command implementation
//!
//! Thin presentation layer for the build command. Orchestration lives in
//! `pipeline::BuildOrchestrator`.

use anyhow::Result;
use console::style;
use std::env;

use crate::config::ConfigLoader;
use crate::error::BundleSplitError;
use crate::fmt::{CHECKMARK, ROCKET};
use crate::infra::{RealCommandExecutor, RealFileSystem};
use crate::pipeline::{BuildOrchestrator, BuildReport, PipelineConfig};
use crate::tools::BundlerTool;

/// Main build command handler (presentation layer)
///
/// Loads the config, verifies the bundler is reachable, runs the complete
/// pipeline, and prints a summary. Any bundler error is fatal for the whole
/// run.
///
/// # Examples
///
/// ```no_run
/// use bundle_split::cmd::build::cmd_build;
///
/// cmd_build()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_build() -> Result<()> {
    println!(
        "{} {} Component Library Pipeline",
        ROCKET,
        style("bundle-split").bold()
    );

    let project_root = env::current_dir()?;
    let config_file = ConfigLoader::load(&project_root)?;
    let config = PipelineConfig::from_config(&config_file, &project_root);

    // Verify the bundler before any output directory is touched
    let bundler = BundlerTool::new(config.bundler.clone());
    if !bundler.is_installed() {
        return Err(BundleSplitError::BundlerMissing {
            bundler: config.bundler.clone(),
        }
        .into());
    }
    if let Ok(version) = bundler.version() {
        log::debug!("bundler version: {}", version);
    }

    let orchestrator = BuildOrchestrator::new(config, RealFileSystem, RealCommandExecutor);
    let report = orchestrator.execute().map_err(BundleSplitError::Pipeline)?;

    present_summary(&report);
    Ok(())
}

/// Present the build summary
fn present_summary(report: &BuildReport) {
    println!();
    println!(
        "{} Built {} target(s) ({} component(s)) in {:.2?}",
        CHECKMARK,
        report.results.len(),
        report.components.len(),
        report.total_duration()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{BuildResult, TargetKind};
    use std::path::PathBuf;
    use std::time::Duration;

    fn result_for(kind: TargetKind) -> BuildResult {
        BuildResult {
            target: crate::pipeline::BuildTarget {
                kind,
                entry: PathBuf::from("src/index.js"),
                out_dir: PathBuf::from("lib"),
                format: crate::pipeline::BundleFormat::CommonJs,
            },
            duration: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_present_summary_with_empty_report() {
        present_summary(&BuildReport {
            components: Vec::new(),
            results: Vec::new(),
        });
    }

    #[test]
    fn test_present_summary_with_results() {
        present_summary(&BuildReport {
            components: Vec::new(),
            results: vec![result_for(TargetKind::Main), result_for(TargetKind::EsModule)],
        });
    }
}
