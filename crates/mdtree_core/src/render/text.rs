//! Plain-text tree lines for terminals.

use mdtree_ast::ElementKind;

use super::TreeLine;

pub(super) fn push_line(out: &mut String, line: &TreeLine<'_>) {
    let element = &line.node.element;

    if element.kind != ElementKind::CodeBlock {
        push(out, line.prefix, &element.text);
        return;
    }

    match element.language() {
        Some(language) if !language.is_empty() => {
            push(out, line.prefix, &format!("[code {}]", language));
        }
        _ => push(out, line.prefix, "[code]"),
    }
    for content in element.text.split('\n') {
        push(out, line.continuation, content);
    }
}

fn push(out: &mut String, prefix: &str, text: &str) {
    let line = format!("{}{}", prefix, text);
    out.push_str(line.trim_end());
    out.push('\n');
}
