//! # mdtree_core
//!
//! Rendering engine for mdtree.
//!
//! This crate provides:
//! - Configuration loading (`.mdtree.jsonc` / `.mdtree.json`)
//! - Markdown file detection and discovery
//! - HTML, plain-text and full-page tree renderers
//! - Parallel multi-file rendering
//!
//! ## Example
//!
//! ```rust
//! use mdtree_core::{Document, ViewerConfig};
//!
//! let config = ViewerConfig::default();
//! let document = Document::parse("# Guide\n- install\n- run", &config.parse);
//!
//! assert_eq!(
//!     document.to_text(&config),
//!     "└── Guide\n   ├── install\n   └── run\n"
//! );
//! ```

mod config;
pub mod detection;
mod document;
mod error;
pub mod file_finder;
mod parallel;
pub mod render;
mod stats;

pub use config::{Colors, Fonts, HeaderStyling, Styling, TreeSymbols, ViewerConfig};
pub use document::Document;
pub use error::ViewerError;
pub use file_finder::FileFinder;
pub use parallel::{
    OutputKind, RenderFilesResult, RenderedFile, render_file, render_files, render_source,
};
pub use render::{TreeRenderer, render_page};
pub use stats::ElementStats;

pub use mdtree_parser::{ParseOptions, format_inline};
