use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use sweep::commands::{branches, cleanup, inactive, merged, run, unmerged};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Branch lifecycle cleanup for hosted repositories", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file (defaults to ./sweep.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every report, then the cleanup pass
    Run {
        /// Report deletion decisions without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List all branches
    Branches,

    /// List branches inactive beyond the configured threshold
    Inactive,

    /// List branches fully merged into the base branch
    Merged,

    /// List branches carrying work not yet in the base branch
    Unmerged,

    /// Delete branches that meet the cleanup policy
    Cleanup {
        /// Report deletion decisions without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Run { dry_run } => run::execute(config, dry_run),
        Commands::Branches => branches::execute(config),
        Commands::Inactive => inactive::execute(config),
        Commands::Merged => merged::execute(config),
        Commands::Unmerged => unmerged::execute(config),
        Commands::Cleanup { dry_run } => cleanup::execute(config, dry_run),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sweep", &mut std::io::stdout());
            Ok(())
        }
    }
}
