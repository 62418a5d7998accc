use bundle_split::cmd;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

/// Component library build pipeline and bundle size analyzer
///
/// bundle-split builds a component library into a combined CommonJS bundle,
/// one isolated bundle per component, and an ES-module tree, then reports
/// how much an on-demand import strategy saves over importing everything.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build all bundle formats
    Build,

    /// Report bundle sizes from the built output
    Analyze {
        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Remove build output directories
    Clean,

    /// Initialize bundle-split configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Build) => cmd::cmd_build(),
        Some(Commands::Analyze { json }) => cmd::cmd_analyze(*json),
        Some(Commands::Clean) => cmd::cmd_clean(),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-split v{}", env!("CARGO_PKG_VERSION"));
            println!("Component library build pipeline and bundle size analyzer\n");
            println!("Usage: bundle-split <COMMAND>\n");
            println!("Commands:");
            println!("  build    Build all bundle formats");
            println!("  analyze  Report bundle sizes from the built output");
            println!("  clean    Remove build output directories");
            println!("  init     Initialize bundle-split configuration");
            println!("\nRun 'bundle-split <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_split::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
