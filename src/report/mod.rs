//! Bundle size reporting
//!
//! Reads the output of a completed build and derives per-file sizes,
//! per-component sizes, and adoption-scenario comparisons. The reporter
//! never triggers builds; the output tree is its only input.

pub mod formatter;
pub mod scenario;
pub mod sizes;

pub use formatter::ReportFormatter;
pub use scenario::{compute_scenario, standard_scenarios, ScenarioComparison, ScenarioOutcome};
pub use sizes::{
    file_size, main_bundle_size, scan_components, walk_tree, BundleSize, ComponentSize,
    FileSizeRecord,
};

use std::path::Path;
use thiserror::Error;

use crate::config::ArtifactPolicies;

/// Errors that can occur while building a size report
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error while scanning the output tree
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The build output directory does not exist
    #[error("Build output not found: {0}")]
    OutputMissing(String),

    /// An artifact the policy marks as required is missing
    #[error("Expected artifact missing: {0}")]
    ArtifactMissing(String),
}

/// A complete size report over one build output tree
#[derive(Debug)]
pub struct SizeReport {
    /// Main bundle sizes (lib root `index.js` + `style.css`)
    pub main: BundleSize,
    /// Per-component bundle sizes, sorted by name
    pub components: Vec<ComponentSize>,
    /// Standard adoption scenarios compared against the main bundle
    pub scenarios: Vec<ScenarioComparison>,
    /// Every file in the output tree with its size
    pub inventory: Vec<FileSizeRecord>,
}

/// Scan a build output tree into a [`SizeReport`]
///
/// The component set is whatever subdirectories exist under `lib_dir`; for
/// the comparisons to be meaningful this must match the set the build
/// produced, which holds whenever the reporter runs after an unmodified
/// `build` output.
pub fn collect(lib_dir: &Path, policies: ArtifactPolicies) -> Result<SizeReport, ReportError> {
    if !lib_dir.is_dir() {
        return Err(ReportError::OutputMissing(lib_dir.display().to_string()));
    }

    let main = main_bundle_size(lib_dir, policies)?;
    let components = scan_components(lib_dir, policies)?;
    let scenarios = standard_scenarios(&components, main.total_bytes());
    let inventory = walk_tree(lib_dir)?;

    Ok(SizeReport {
        main,
        components,
        scenarios,
        inventory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_output_tree(root: &Path) {
        // main: 50 KB script + 10 KB style; button: 8 + 2; dialog: 12 + 3
        fs::write(root.join("index.js"), vec![0u8; 50 * 1024]).unwrap();
        fs::write(root.join("style.css"), vec![0u8; 10 * 1024]).unwrap();
        for (name, js, css) in [("button", 8, 2), ("dialog", 12, 3)] {
            let dir = root.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("index.js"), vec![0u8; js * 1024]).unwrap();
            fs::write(dir.join("style.css"), vec![0u8; css * 1024]).unwrap();
        }
    }

    #[test]
    fn test_collect_of_missing_output_fails() {
        let temp = TempDir::new().unwrap();
        let err = collect(&temp.path().join("lib"), ArtifactPolicies::default()).unwrap_err();
        assert!(matches!(err, ReportError::OutputMissing(_)));
    }

    #[test]
    fn test_collect_builds_full_report() {
        let temp = TempDir::new().unwrap();
        write_output_tree(temp.path());

        let report = collect(temp.path(), ArtifactPolicies::default()).unwrap();

        assert_eq!(report.main.total_bytes(), 60 * 1024);
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.scenarios.len(), 3);
        // 2 main files + 2 per component
        assert_eq!(report.inventory.len(), 6);

        // The button-only scenario matches the known fixture numbers
        let button_only = &report.scenarios[0];
        assert_eq!(button_only.name, "only button");
        assert_eq!(button_only.on_demand_bytes, 10 * 1024);
        assert_eq!(button_only.full_bundle_bytes, 60 * 1024);
    }

    #[test]
    fn test_collect_reporter_set_follows_output_tree() {
        let temp = TempDir::new().unwrap();
        write_output_tree(temp.path());
        // A directory added out-of-band still shows up: the reporter trusts
        // the tree, not the source
        let extra = temp.path().join("toast");
        fs::create_dir_all(&extra).unwrap();
        fs::write(extra.join("index.js"), vec![0u8; 1024]).unwrap();

        let report = collect(temp.path(), ArtifactPolicies::default()).unwrap();
        let names: Vec<_> = report.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["button", "dialog", "toast"]);
    }
}
