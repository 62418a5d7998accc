//! Configuration file and loading
//!
//! `.bundle-split.toml` in the project root describes the library layout,
//! the bundler executable, and the missing-artifact policies. A missing
//! config file is not an error; every field has a conventional default.

pub mod file;
pub mod loader;

pub use file::{ArtifactPolicies, ArtifactPolicy, ArtifactSettings, ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
