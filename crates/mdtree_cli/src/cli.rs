//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mdtree - Render Markdown documents as outline trees
#[derive(Parser)]
#[command(name = "mdtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the outline tree of Markdown files
    Render {
        /// Files, directories or glob patterns to render
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output format (text, html, page, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Drop elements nested deeper than this level
        #[arg(long, value_name = "N")]
        max_depth: Option<u32>,

        /// Do not emit paragraphs
        #[arg(long)]
        no_paragraphs: bool,

        /// Do not recognise list items
        #[arg(long)]
        no_lists: bool,

        /// Do not recognise headers
        #[arg(long)]
        no_headers: bool,
    },

    /// Print the flat element sequence of a file as JSON
    Parse {
        /// Markdown file to parse
        path: PathBuf,
    },

    /// Format inline Markdown as HTML
    Format {
        /// Inline Markdown text
        text: String,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
