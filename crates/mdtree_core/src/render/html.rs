//! HTML tree lines.

use mdtree_ast::{Element, ElementKind};
use mdtree_parser::{escape_html, format_inline};

use super::TreeLine;

pub(super) fn push_line(out: &mut String, line: &TreeLine<'_>) {
    let element = &line.node.element;
    let indent = line.prefix.chars().count();

    out.push_str(&format!(
        "<div class='tree-line' style='text-indent: -{indent}ch; padding-left: {indent}ch;'>{}<span class='tree-content {}'>{}</span></div>",
        escape_html(line.prefix),
        content_classes(element),
        content(element),
    ));
}

fn content_classes(element: &Element) -> String {
    match element.kind {
        ElementKind::Header => format!("header header-{}", element.level),
        kind => kind.as_str().to_string(),
    }
}

fn content(element: &Element) -> String {
    match element.kind {
        ElementKind::CodeBlock => format!(
            r#"<pre><code class="{}">{}</code></pre>"#,
            escape_html(element.language().unwrap_or_default()),
            escape_html(&element.text)
        ),
        ElementKind::NumberedList => match element.numbered_prefix() {
            Some((marker, body)) => format!("{} {}", marker, format_inline(body)),
            None => format_inline(&element.text),
        },
        _ => format_inline(&element.text),
    }
}
