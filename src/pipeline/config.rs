//! Pipeline configuration and build target types

use std::path::{Path, PathBuf};

use crate::config::ConfigFile;

/// Output format of a bundler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleFormat {
    /// CommonJS (`--format=cjs`), the combined and per-component bundles
    #[default]
    CommonJs,
    /// ES modules (`--format=esm`)
    EsModule,
}

impl BundleFormat {
    /// Get the bundler `--format` argument value
    pub fn as_arg(&self) -> &'static str {
        match self {
            Self::CommonJs => "cjs",
            Self::EsModule => "esm",
        }
    }
}

/// What a single build target produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// The combined bundle containing every component
    Main,
    /// An isolated bundle for one component
    Component(String),
    /// The ES-module distribution tree
    EsModule,
}

impl TargetKind {
    /// Human-readable label used in progress output and error messages
    pub fn label(&self) -> String {
        match self {
            Self::Main => "main bundle".to_string(),
            Self::Component(name) => format!("component '{}'", name),
            Self::EsModule => "es-module tree".to_string(),
        }
    }
}

/// One unit of work for the orchestrator: a single bundler invocation
/// (or, for [`TargetKind::EsModule`], a tree copy)
#[derive(Debug, Clone)]
pub struct BuildTarget {
    /// What this target produces
    pub kind: TargetKind,
    /// Entry point handed to the bundler
    pub entry: PathBuf,
    /// Output directory, owned exclusively by this target
    pub out_dir: PathBuf,
    /// Output format
    pub format: BundleFormat,
}

/// Configuration for the build pipeline
///
/// All paths are resolved against the project root before the pipeline runs.
///
/// # Examples
///
/// ```
/// use bundle_split::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.bundler, "esbuild");
/// assert!(config.main_entry().ends_with("index.js"));
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Bundler executable (name on PATH or absolute path)
    pub bundler: String,
    /// Extra arguments appended to every bundler invocation
    pub bundler_args: Vec<String>,
    /// Source root; the main entry lives at `<source_dir>/index.js`
    pub source_dir: PathBuf,
    /// Directory with one subdirectory per component
    pub components_dir: PathBuf,
    /// CommonJS output root
    pub lib_dir: PathBuf,
    /// ES-module output tree
    pub es_dir: PathBuf,
}

impl PipelineConfig {
    /// Resolve a pipeline config from the config file, rooted at `project_root`
    pub fn from_config(file: &ConfigFile, project_root: &Path) -> Self {
        Self {
            bundler: file.bundler.clone(),
            bundler_args: file.bundler_args.clone(),
            source_dir: project_root.join(&file.source_dir),
            components_dir: project_root.join(&file.components_dir),
            lib_dir: project_root.join(&file.lib_dir),
            es_dir: project_root.join(&file.es_dir),
        }
    }

    /// Entry point for the main bundle
    pub fn main_entry(&self) -> PathBuf {
        self.source_dir.join("index.js")
    }

    /// Entry point for a single component's bundle
    pub fn component_entry(&self, name: &str) -> PathBuf {
        self.components_dir.join(name).join("index.js")
    }

    /// The combined-bundle target
    pub fn main_target(&self) -> BuildTarget {
        BuildTarget {
            kind: TargetKind::Main,
            entry: self.main_entry(),
            out_dir: self.lib_dir.clone(),
            format: BundleFormat::CommonJs,
        }
    }

    /// The isolated target for one component
    pub fn component_target(&self, name: &str) -> BuildTarget {
        BuildTarget {
            kind: TargetKind::Component(name.to_string()),
            entry: self.component_entry(name),
            out_dir: self.lib_dir.join(name),
            format: BundleFormat::CommonJs,
        }
    }

    /// The ES-module tree target (materialized by copy, not by the bundler)
    pub fn es_module_target(&self) -> BuildTarget {
        BuildTarget {
            kind: TargetKind::EsModule,
            entry: self.source_dir.clone(),
            out_dir: self.es_dir.clone(),
            format: BundleFormat::EsModule,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_config(&ConfigFile::default(), Path::new("."))
    }
}
