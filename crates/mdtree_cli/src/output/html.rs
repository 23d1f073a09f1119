//! HTML output formatter

use std::path::PathBuf;

use mdtree_core::{RenderedFile, TreeRenderer, ViewerConfig, ViewerError, render_page};

pub fn output_html(results: &[RenderedFile], failures: &[(PathBuf, ViewerError)]) {
    println!("{}", body(results, failures));
}

pub fn output_page(
    results: &[RenderedFile],
    failures: &[(PathBuf, ViewerError)],
    config: &ViewerConfig,
) {
    print!("{}", render_page(&body(results, failures), config));
}

/// Concatenates the rendered fragments, followed by one error banner per
/// failed file.
fn body(results: &[RenderedFile], failures: &[(PathBuf, ViewerError)]) -> String {
    let mut body: String = results.iter().map(|r| r.output.as_str()).collect();
    for (path, error) in failures {
        body.push_str(&TreeRenderer::render_error(&format!(
            "{}: {}",
            path.display(),
            error
        )));
    }
    body
}
