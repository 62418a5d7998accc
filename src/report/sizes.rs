//! File sizing and output-tree scanning
//!
//! Everything here is derived fresh from the filesystem on each run; nothing
//! is cached between invocations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ArtifactPolicies, ArtifactPolicy};

use super::ReportError;

/// Script artifact name inside a bundle directory
pub const SCRIPT_FILE: &str = "index.js";

/// Stylesheet artifact name inside a bundle directory
pub const STYLE_FILE: &str = "style.css";

/// Size of one file in the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSizeRecord {
    /// Path relative to the scanned root
    pub relative_path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
}

/// Script + stylesheet sizes of one bundle directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BundleSize {
    /// Size of `index.js` in bytes
    pub script_bytes: u64,
    /// Size of `style.css` in bytes
    pub style_bytes: u64,
}

impl BundleSize {
    /// Combined script + stylesheet size
    pub fn total_bytes(&self) -> u64 {
        self.script_bytes + self.style_bytes
    }
}

/// Sizes of one component's isolated bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSize {
    /// Component name (directory name under the lib root)
    pub name: String,
    /// Size of the component's `index.js` in bytes
    pub script_bytes: u64,
    /// Size of the component's `style.css` in bytes
    pub style_bytes: u64,
}

impl ComponentSize {
    /// Combined script + stylesheet size
    pub fn total_bytes(&self) -> u64 {
        self.script_bytes + self.style_bytes
    }
}

/// Size of a file in bytes; 0 if the file is missing
///
/// Never errors. Whether a missing file is acceptable is decided by the
/// caller that knows which artifact kind it is looking at.
///
/// # Examples
///
/// ```
/// use bundle_split::report::file_size;
/// use std::path::Path;
///
/// assert_eq!(file_size(Path::new("/definitely/not/here.js")), 0);
/// ```
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Depth-first walk of an output tree, entries sorted per directory
///
/// Returns one record per regular file, with paths relative to `root`.
pub fn walk_tree(root: &Path) -> io::Result<Vec<FileSizeRecord>> {
    let mut records = Vec::new();
    walk_inner(root, root, &mut records)?;
    Ok(records)
}

fn walk_inner(root: &Path, dir: &Path, records: &mut Vec<FileSizeRecord>) -> io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_inner(root, &path, records)?;
        } else {
            let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            records.push(FileSizeRecord {
                relative_path,
                size_bytes: entry.metadata()?.len(),
            });
        }
    }
    Ok(())
}

fn artifact_size(dir: &Path, file: &str, policy: ArtifactPolicy) -> Result<u64, ReportError> {
    let path = dir.join(file);
    if path.is_file() {
        Ok(file_size(&path))
    } else {
        match policy {
            ArtifactPolicy::Optional => Ok(0),
            ArtifactPolicy::Required => {
                Err(ReportError::ArtifactMissing(path.display().to_string()))
            }
        }
    }
}

/// Measure the main bundle (`index.js` + `style.css` at the lib root)
pub fn main_bundle_size(
    lib_dir: &Path,
    policies: ArtifactPolicies,
) -> Result<BundleSize, ReportError> {
    Ok(BundleSize {
        script_bytes: artifact_size(lib_dir, SCRIPT_FILE, policies.script)?,
        style_bytes: artifact_size(lib_dir, STYLE_FILE, policies.style)?,
    })
}

/// Measure every per-component bundle under the lib root, sorted by name
pub fn scan_components(
    lib_dir: &Path,
    policies: ArtifactPolicies,
) -> Result<Vec<ComponentSize>, ReportError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(lib_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut components = Vec::with_capacity(names.len());
    for name in names {
        let dir = lib_dir.join(&name);
        components.push(ComponentSize {
            script_bytes: artifact_size(&dir, SCRIPT_FILE, policies.script)?,
            style_bytes: artifact_size(&dir, STYLE_FILE, policies.style)?,
            name,
        });
    }
    Ok(components)
}
