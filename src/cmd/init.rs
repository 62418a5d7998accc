//! Init command implementation
//!
//! Handles the `bundle-split init` command which writes a default
//! `.bundle-split.toml` into the current project.

use anyhow::Result;
use console::style;
use std::env;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::fmt::{CHECKMARK, INFO, ROCKET, WARNING};

/// Initialize bundle-split configuration
///
/// Creates `.bundle-split.toml` with the conventional layout. Refuses to
/// overwrite an existing file.
///
/// # Examples
///
/// ```no_run
/// use bundle_split::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    println!(
        "{} {} Initializing bundle-split",
        ROCKET,
        style("bundle-split init").bold()
    );
    println!();

    let project_root = env::current_dir()?;

    if ConfigLoader::exists(&project_root) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, &project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(CONFIG_FILE_NAME).cyan()
    );
    println!();
    println!("{}  Defaults:", INFO);
    println!("   {} bundler = {}", style("•").dim(), style(&config.bundler).green());
    println!(
        "   {} components-dir = {}",
        style("•").dim(),
        style(&config.components_dir).green()
    );
    println!(
        "   {} lib-dir = {}, es-dir = {}",
        style("•").dim(),
        style(&config.lib_dir).green(),
        style(&config.es_dir).green()
    );

    Ok(())
}
