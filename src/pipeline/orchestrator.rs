//! Build orchestration logic
//!
//! Sequences the whole pipeline: clean the output roots, discover the
//! components, build the combined bundle, build one isolated bundle per
//! component strictly one at a time, then materialize the ES-module tree.
//! The first bundler error aborts the run; there is no partial-success
//! reporting and no rollback of already-written output.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::fmt::{format_bytes, BROOM, CHECKMARK, HAMMER, PACKAGE, SPARKLES};
use crate::infra::{CommandExecutor, FileSystem};

use super::bundle_runner::{BuildResult, BundleRunner};
use super::config::PipelineConfig;
use super::discover::{discover_components, ComponentDescriptor};
use super::error::PipelineError;

/// Aggregate outcome of a full pipeline run
///
/// Invariant: `results` holds exactly one main-bundle result, one result per
/// discovered component, and one es-module result.
#[derive(Debug)]
pub struct BuildReport {
    /// Components discovered this run, sorted by name
    pub components: Vec<ComponentDescriptor>,
    /// One result per completed build target
    pub results: Vec<BuildResult>,
}

impl BuildReport {
    /// Total wall-clock time spent across all targets
    pub fn total_duration(&self) -> Duration {
        self.results.iter().map(|r| r.duration).sum()
    }
}

/// Remove each output directory if present
///
/// Idempotent: directories that are already absent are not an error, so the
/// clean step can run on a fresh checkout or twice in a row.
pub fn clean_output_dirs<FS: FileSystem, P: AsRef<Path>>(
    fs: &FS,
    dirs: &[P],
) -> Result<(), PipelineError> {
    for dir in dirs {
        let dir = dir.as_ref();
        match fs.remove_dir_all(dir) {
            Ok(()) => info!("removed {}", dir.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(PipelineError::Io(e)),
        }
    }
    Ok(())
}

/// Orchestrates the complete build workflow
pub struct BuildOrchestrator<FS: FileSystem, CE: CommandExecutor> {
    config: PipelineConfig,
    runner: BundleRunner<FS, CE>,
    fs: FS,
}

impl<FS: FileSystem + Clone, CE: CommandExecutor> BuildOrchestrator<FS, CE> {
    /// Create a new build orchestrator
    pub fn new(config: PipelineConfig, fs: FS, cmd_executor: CE) -> Self {
        let runner = BundleRunner::new(config.clone(), fs.clone(), cmd_executor);
        Self {
            config,
            runner,
            fs,
        }
    }

    /// Execute the complete build pipeline
    pub fn execute(&self) -> Result<BuildReport, PipelineError> {
        println!(
            "\n{} {} Component Library Build",
            HAMMER,
            style("Running").bold()
        );

        // Step 1: Clean old output
        println!("\n{} Step 1: Cleaning old build output...", BROOM);
        clean_output_dirs(
            &self.fs,
            &[&self.config.lib_dir, &self.config.es_dir],
        )?;

        // Step 2: Discover components
        let components = discover_components(&self.fs, &self.config.components_dir)?;
        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        println!(
            "\n{} Found {} component(s): {}",
            PACKAGE,
            components.len(),
            style(names.join(", ")).cyan()
        );

        let mut results = Vec::with_capacity(components.len() + 2);

        // Step 3: Main bundle (CommonJS)
        println!("\n{} Step 2: Building main bundle...", SPARKLES);
        let main_result = self.runner.run(&self.config.main_target())?;
        println!(
            "   {} Main bundle built ({})",
            CHECKMARK,
            style(self.config.lib_dir.display()).cyan()
        );
        results.push(main_result);

        // Step 4: One isolated bundle per component, strictly sequential
        if !components.is_empty() {
            println!("\n{} Step 3: Building per-component bundles...", SPARKLES);
            let pb = ProgressBar::new(components.len() as u64);
            if let Ok(template) = ProgressStyle::with_template("   [{bar:24}] {pos}/{len} {msg}") {
                pb.set_style(template.progress_chars("=> "));
            }
            for component in &components {
                pb.set_message(component.name.clone());
                let result = self
                    .runner
                    .run(&self.config.component_target(&component.name))?;
                pb.println(format!("   {} {} built", CHECKMARK, component.name));
                pb.inc(1);
                results.push(result);
            }
            pb.finish_and_clear();
        }

        // Step 5: ES-module tree (source copy, no transpilation)
        println!("\n{} Step 4: Preparing ES-module tree...", SPARKLES);
        let started = Instant::now();
        let es_target = self.config.es_module_target();
        self.copy_tree(&self.config.source_dir, &self.config.es_dir)?;
        println!(
            "   {} ES modules prepared ({})",
            CHECKMARK,
            style(self.config.es_dir.display()).cyan()
        );
        results.push(BuildResult {
            target: es_target,
            duration: started.elapsed(),
        });

        println!(
            "\n{} {} All bundles built",
            SPARKLES,
            style("Success!").green().bold()
        );

        Ok(BuildReport {
            components,
            results,
        })
    }

    /// Recursively copy a source tree byte-for-byte
    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<(), PipelineError> {
        let mut copied = 0u64;
        self.copy_tree_inner(src, dest, &mut copied)?;
        info!("copied {} into {}", format_bytes(copied), dest.display());
        Ok(())
    }

    fn copy_tree_inner(
        &self,
        src: &Path,
        dest: &Path,
        copied: &mut u64,
    ) -> Result<(), PipelineError> {
        self.fs.create_dir_all(dest)?;
        for entry in self.fs.read_dir(src)? {
            let entry = entry?;
            let src_path = entry.path();
            let dest_path = dest.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                self.copy_tree_inner(&src_path, &dest_path, copied)?;
            } else {
                *copied += self.fs.copy(&src_path, &dest_path)?;
            }
        }
        Ok(())
    }
}
