//! Text output formatter

use mdtree_core::RenderedFile;

pub fn output_text(results: &[RenderedFile]) {
    let show_paths = results.len() > 1;

    for (index, result) in results.iter().enumerate() {
        if show_paths {
            if index > 0 {
                println!();
            }
            println!("{}:", result.path.display());
        }
        print!("{}", result.output);
    }
}
