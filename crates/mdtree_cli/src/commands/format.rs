//! Format command implementation

use miette::Result;
use mdtree_core::format_inline;

pub fn run_format(text: &str) -> Result<()> {
    println!("{}", format_inline(text));
    Ok(())
}
