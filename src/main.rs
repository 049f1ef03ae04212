//! gobot CLI entry point

use clap::{Parser, Subcommand};
use gobot::cli::commands::{bundle, checkout, heads, pull};
use gobot::cli::{Output, WorkspaceContext};
use gobot::{SystemRunner, Workspace};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gobot")]
#[command(
    version,
    about = "Handle the robot things in every repo under $SPITFIRE_WORKSPACE",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle each directory in the workspace that contains a Gemfile
    #[command(visible_alias = "b")]
    Bundle,
    /// Pull (rebase) the checked-out branch in each directory, skipping repos with modified files
    #[command(visible_alias = "p")]
    Pull,
    /// Show the current head and branch of each repo in the workspace
    #[command(visible_alias = "ch")]
    Heads,
    /// Check out the given reference in each directory
    #[command(visible_alias = "co")]
    Checkout {
        /// Branch, tag or commit to check out
        reference: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean per-directory report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let workspace = Workspace::from_env()?;
    let runner = SystemRunner;
    let ctx = WorkspaceContext::new(workspace, &runner);
    let mut out = Output::stdout();

    let (name, summary) = match cli.command {
        Commands::Bundle => ("bundle", bundle::run_bundle(&ctx, &mut out)?),
        Commands::Pull => ("pull", pull::run_pull(&ctx, &mut out)?),
        Commands::Heads => ("heads", heads::run_heads(&ctx, &mut out)?),
        Commands::Checkout { reference } => (
            "checkout",
            checkout::run_checkout(&ctx, &mut out, &reference)?,
        ),
    };

    debug!(
        command = name,
        root = %ctx.root().display(),
        total = summary.total(),
        done = summary.done_count,
        skipped = summary.skip_count,
        failed = summary.error_count,
        "finished"
    );

    Ok(())
}
