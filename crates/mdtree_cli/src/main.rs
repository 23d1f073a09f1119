//! mdtree CLI
//!
//! Renders Markdown documents as outline trees.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{RenderArgs, run_format, run_init, run_parse, run_render};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_failures) => {
            if has_failures {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Render {
            paths,
            format,
            max_depth,
            no_paragraphs,
            no_lists,
            no_headers,
        } => run_render(
            cli.config.as_deref(),
            &RenderArgs {
                paths,
                format,
                max_depth: *max_depth,
                no_paragraphs: *no_paragraphs,
                no_lists: *no_lists,
                no_headers: *no_headers,
            },
        ),
        Commands::Parse { path } => run_parse(cli.config.as_deref(), path).map(|_| false),
        Commands::Format { text } => run_format(text).map(|_| false),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}
