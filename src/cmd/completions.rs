//! Completions command implementation
//!
//! Handles the `bundle-split completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-split completions bash > /etc/bash_completion.d/bundle-split
///
/// # Zsh
/// bundle-split completions zsh > ~/.zfunc/_bundle-split
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command structure here since Cli lives in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("bundle-split")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Component library build pipeline and bundle size analyzer")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("build").about("Build all bundle formats"))
        .subcommand(Command::new("analyze").about("Report bundle sizes from the built output"))
        .subcommand(Command::new("clean").about("Remove build output directories"))
        .subcommand(Command::new("init").about("Initialize bundle-split configuration"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "bundle-split".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
