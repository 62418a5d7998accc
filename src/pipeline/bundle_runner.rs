//! Bundler invocation for a single build target
//!
//! The bundler is an opaque external executable. One invocation gets the
//! entry point, the output directory, the format, and whatever extra
//! arguments the config carries. A non-zero exit status is the only error
//! signal we interpret; stderr is surfaced verbatim.

use std::io;
use std::time::{Duration, Instant};

use log::debug;

use crate::infra::{CommandExecutor, FileSystem};

use super::config::{BuildTarget, PipelineConfig};
use super::error::PipelineError;

/// Outcome of one successful build target
#[derive(Debug)]
pub struct BuildResult {
    /// The target that was built
    pub target: BuildTarget,
    /// Wall-clock time of the invocation
    pub duration: Duration,
}

/// Runs one bundler invocation per build target
pub struct BundleRunner<FS: FileSystem, CE: CommandExecutor> {
    config: PipelineConfig,
    fs: FS,
    cmd_executor: CE,
}

impl<FS: FileSystem, CE: CommandExecutor> BundleRunner<FS, CE> {
    /// Create a new runner with the given configuration
    pub fn new(config: PipelineConfig, fs: FS, cmd_executor: CE) -> Self {
        Self {
            config,
            fs,
            cmd_executor,
        }
    }

    /// Invoke the bundler for one target
    ///
    /// Fails fast: a missing entry point or a non-zero bundler exit aborts
    /// the whole run, matching the pipeline's no-partial-success contract.
    pub fn run(&self, target: &BuildTarget) -> Result<BuildResult, PipelineError> {
        match self.fs.metadata(&target.entry) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PipelineError::EntryMissing {
                    target: target.kind.label(),
                    path: target.entry.display().to_string(),
                });
            }
            Err(e) => return Err(PipelineError::Io(e)),
        }

        // The bundler owns its output directory; make sure it exists so
        // bundlers that refuse to create it still work.
        self.fs.create_dir_all(&target.out_dir)?;

        let entry = target.entry.clone();
        let format_arg = format!("--format={}", target.format.as_arg());
        let outdir_arg = format!("--outdir={}", target.out_dir.display());
        let extra_args = self.config.bundler_args.clone();

        debug!(
            "bundler invocation: {} {} --bundle {} {} {:?}",
            self.config.bundler,
            entry.display(),
            format_arg,
            outdir_arg,
            extra_args
        );

        let started = Instant::now();
        let output = self.cmd_executor.execute(
            |cmd| {
                cmd.arg(&entry)
                    .arg("--bundle")
                    .arg(&format_arg)
                    .arg(&outdir_arg);
                for arg in &extra_args {
                    cmd.arg(arg);
                }
                cmd
            },
            &self.config.bundler,
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            // Surface the bundler's own diagnostics before failing the run
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim_end());
            }
            return Err(PipelineError::BundlerFailed {
                target: target.kind.label(),
                stderr,
            });
        }

        Ok(BuildResult {
            target: target.clone(),
            duration: started.elapsed(),
        })
    }
}
