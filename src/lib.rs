#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-split library
//!
//! This library provides the core functionality for building a component
//! library into multiple distribution formats and analyzing the resulting
//! bundle sizes. It can be used programmatically in addition to the CLI
//! interface.
//!
//! The build side drives one external bundler executable: once for the
//! combined bundle, once per component (strictly sequentially), and finally
//! copies the source tree as the ES-module distribution. The analysis side
//! only reads the build output and compares "import everything" against
//! "import only what you use".
//!
//! # Basic Example
//!
//! Describing the build targets for a project layout:
//!
//! ```
//! use bundle_split::pipeline::{PipelineConfig, TargetKind};
//!
//! let config = PipelineConfig::default();
//!
//! let main = config.main_target();
//! assert_eq!(main.kind, TargetKind::Main);
//!
//! let button = config.component_target("button");
//! assert_eq!(button.kind, TargetKind::Component("button".to_string()));
//! assert!(button.out_dir.ends_with("lib/button"));
//! ```
//!
//! # Advanced Example: Scenario Comparison
//!
//! Comparing an on-demand selection against the full bundle:
//!
//! ```
//! use std::collections::BTreeSet;
//! use bundle_split::report::{compute_scenario, ComponentSize, ScenarioOutcome};
//!
//! let components = vec![ComponentSize {
//!     name: "button".to_string(),
//!     script_bytes: 8 * 1024,
//!     style_bytes: 2 * 1024,
//! }];
//!
//! let selected: BTreeSet<String> = ["button".to_string()].into();
//! let scenario = compute_scenario("only button", &selected, &components, 60 * 1024);
//!
//! match scenario.outcome() {
//!     ScenarioOutcome::Saving { percent } => assert!(percent > 80.0),
//!     _ => unreachable!(),
//! }
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and loading
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Build pipeline orchestration
pub mod pipeline;
/// Bundle size reporting
pub mod report;
/// Bundler executable detection
pub mod tools;
