//! Component discovery
//!
//! Each immediate subdirectory of the components root is exactly one
//! component. Names are sorted so build order, report order, and scenario
//! membership are reproducible across platforms.

use std::io;
use std::path::Path;

use crate::infra::FileSystem;

use super::error::PipelineError;

/// A discovered component, identified by its directory name
///
/// Recomputed on every run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Component name (directory name under the components root)
    pub name: String,
}

/// List the components under `components_dir`, sorted by name
///
/// A missing components directory yields an empty set: an empty library is
/// still buildable (the main bundle just exports nothing).
pub fn discover_components<FS: FileSystem>(
    fs: &FS,
    components_dir: &Path,
) -> Result<Vec<ComponentDescriptor>, PipelineError> {
    let entries = match fs.read_dir(components_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(PipelineError::Io(e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| ComponentDescriptor { name })
        .collect())
}
