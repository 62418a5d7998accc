//! Configuration file data structures

use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundle-split.toml";

/// bundle-split configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Bundler executable (name on PATH or absolute path)
    #[serde(default = "default_bundler")]
    pub bundler: String,

    /// Extra arguments appended to every bundler invocation
    #[serde(default, rename = "bundler-args")]
    pub bundler_args: Vec<String>,

    /// Source root; the main entry is `<source-dir>/index.js`
    #[serde(default = "default_source_dir", rename = "source-dir")]
    pub source_dir: String,

    /// Directory containing one subdirectory per component
    #[serde(default = "default_components_dir", rename = "components-dir")]
    pub components_dir: String,

    /// CommonJS output root
    #[serde(default = "default_lib_dir", rename = "lib-dir")]
    pub lib_dir: String,

    /// ES-module output tree
    #[serde(default = "default_es_dir", rename = "es-dir")]
    pub es_dir: String,

    /// Per-artifact-kind missing-file policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<ArtifactSettings>,
}

fn default_bundler() -> String {
    "esbuild".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_components_dir() -> String {
    "src/components".to_string()
}

fn default_lib_dir() -> String {
    "lib".to_string()
}

fn default_es_dir() -> String {
    "es".to_string()
}

/// Missing-artifact policy for one artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactPolicy {
    /// A missing file is a hard error (broken build)
    Required,
    /// A missing file counts as zero bytes
    Optional,
}

/// `[artifacts]` table: which missing files are errors and which are fine
///
/// Scripts default to required (a bundle directory without `index.js` means
/// the build is broken); stylesheets default to optional (a component may
/// legitimately ship no CSS).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactSettings {
    /// Policy for `index.js` files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ArtifactPolicy>,

    /// Policy for `style.css` files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ArtifactPolicy>,
}

/// Resolved artifact policies with defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactPolicies {
    /// Policy for `index.js` files
    pub script: ArtifactPolicy,
    /// Policy for `style.css` files
    pub style: ArtifactPolicy,
}

impl Default for ArtifactPolicies {
    fn default() -> Self {
        Self {
            script: ArtifactPolicy::Required,
            style: ArtifactPolicy::Optional,
        }
    }
}

impl ConfigFile {
    /// Resolve the artifact policies, applying defaults for unset kinds
    pub fn artifact_policies(&self) -> ArtifactPolicies {
        let defaults = ArtifactPolicies::default();
        match &self.artifacts {
            Some(settings) => ArtifactPolicies {
                script: settings.script.unwrap_or(defaults.script),
                style: settings.style.unwrap_or(defaults.style),
            },
            None => defaults,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            bundler: default_bundler(),
            bundler_args: Vec::new(),
            source_dir: default_source_dir(),
            components_dir: default_components_dir(),
            lib_dir: default_lib_dir(),
            es_dir: default_es_dir(),
            artifacts: None,
        }
    }
}
