//! Canopy CLI - hierarchical tri-state selection for tree data
//!
//! Usage: canopy <COMMAND>
//!
//! Commands:
//!   render       Print the projected tree
//!   apply        Apply scripted operations, then print the result
//!   validate     Check that a tree file loads and ids are unique
//!   interactive  Pick nodes in a terminal tree view

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use canopy::commands::{self, CommandContext};
use canopy::config::{Config, Verbosity};
use canopy::presentation::{Cli, Commands};
use canopy::CanopyError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if matches!(
                e.downcast_ref::<CanopyError>(),
                Some(CanopyError::SelectionAborted)
            ) =>
        {
            eprintln!("Aborted.");
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::resolve(cli.config.as_deref(), Some(&cwd))?;

    // CLI flags win over env and files
    if cli.ascii {
        config.output.ascii = true;
    }
    config.output.verbosity = match cli.verbose {
        0 => config.output.verbosity,
        1 => Verbosity::Verbose,
        _ => Verbosity::Debug,
    };

    init_tracing(config.output.verbosity);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = CommandContext {
        json: cli.json,
        config,
    };

    match cli.command {
        Commands::Render {
            tree,
            filter,
            expand_all,
        } => commands::cmd_render(&ctx, &tree, filter.as_deref(), expand_all),
        Commands::Apply { tree, ops, filter } => {
            commands::cmd_apply(&ctx, &tree, &ops, filter.as_deref())
        }
        Commands::Validate { tree } => commands::cmd_validate(&ctx, &tree),
        Commands::Interactive { tree } => commands::cmd_interactive(&ctx, &tree),
    }
}

/// `RUST_LOG` wins; otherwise the resolved verbosity sets the level
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("canopy={}", verbosity.filter_directive())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
