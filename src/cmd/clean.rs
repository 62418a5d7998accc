//! Clean command implementation
//!
//! Removes the CommonJS and ES-module output roots. Safe to run on a fresh
//! checkout; already-absent directories are not an error.

use anyhow::Result;
use console::style;
use std::env;

use crate::config::ConfigLoader;
use crate::error::BundleSplitError;
use crate::fmt::BROOM;
use crate::infra::RealFileSystem;
use crate::pipeline::clean_output_dirs;

/// Remove build output directories
///
/// # Examples
///
/// ```no_run
/// use bundle_split::cmd::clean::cmd_clean;
///
/// cmd_clean()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_clean() -> Result<()> {
    let project_root = env::current_dir()?;
    let config_file = ConfigLoader::load(&project_root)?;

    let lib_dir = project_root.join(&config_file.lib_dir);
    let es_dir = project_root.join(&config_file.es_dir);

    clean_output_dirs(&RealFileSystem, &[&lib_dir, &es_dir])
        .map_err(BundleSplitError::Pipeline)?;

    println!(
        "{} Removed {} and {}",
        BROOM,
        style(lib_dir.display()).cyan(),
        style(es_dir.display()).cyan()
    );

    Ok(())
}
