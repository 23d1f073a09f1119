//! Stand-alone HTML page.

use std::fmt::Write;

use crate::ViewerConfig;

const PAGE_TITLE: &str = "Markdown Hierarchy Viewer";

const EMPTY_PAGE: &str = r#"<div class="empty-state">No content to display</div>"#;

/// Wraps rendered tree lines in a complete HTML5 document.
///
/// Empty `content` is replaced by a placeholder banner.
pub fn render_page(content: &str, config: &ViewerConfig) -> String {
    let body = if content.is_empty() { EMPTY_PAGE } else { content };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta http-equiv="Content-Security-Policy" content="default-src 'none'; font-src https://fonts.googleapis.com https://fonts.gstatic.com; style-src 'unsafe-inline' https://fonts.googleapis.com;">
  <title>{PAGE_TITLE}</title>
  <style>{}</style>
</head>
<body>
  {}
</body>
</html>
"#,
        generate_css(config),
        body
    )
}

/// Builds the page stylesheet from the configured fonts, colours and
/// spacing.
pub fn generate_css(config: &ViewerConfig) -> String {
    let fonts = &config.fonts;
    let colors = &config.colors;
    let styling = &config.styling;

    let mut css = format!(
        r#"
@import url('https://fonts.googleapis.com/css2?family=Noto+Sans:ital,wght@0,400;0,700;1,400;1,700&display=swap');

body {{
  font-family: {content_font};
  margin: 0;
  padding: {padding};
  background: {background};
  color: {content_color};
  line-height: {line_height};
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}}

.tree-line {{
  font-family: {symbol_font};
  white-space: pre-wrap;
  word-break: break-word;
  padding: 0.5em 0;
  text-indent: 0;
  color: {symbol_color};
  position: relative;
}}

.tree-content {{
  font-family: {content_font};
  color: {content_color};
}}

.tree-content strong {{
  font-weight: 700;
}}

.tree-content em {{
  font-style: italic;
}}

.tree-content code {{
  font-family: {symbol_font};
  background-color: rgba(175, 184, 193, 0.2);
  color: {content_color};
  padding: 0.2em 0.4em;
  border-radius: 3px;
  font-size: 0.9em;
}}

.tree-content.paragraph {{
  opacity: 0.9;
}}

.tree-content.code-block {{
  display: block;
  margin: 0.5em 0;
}}

.tree-content.code-block pre {{
  font-family: {symbol_font};
  background-color: rgba(175, 184, 193, 0.1);
  border: 1px solid rgba(175, 184, 193, 0.3);
  border-radius: 6px;
  padding: 1em;
  margin: 0;
  overflow-x: auto;
  white-space: pre;
  line-height: 1.4;
  font-size: 0.9em;
  scrollbar-width: thin;
  scrollbar-color: rgba(175, 184, 193, 0.4) rgba(175, 184, 193, 0.1);
}}

.tree-content.code-block code {{
  font-family: {symbol_font};
  background: none;
  padding: 0;
  border-radius: 0;
  color: {content_color};
  font-size: inherit;
}}

a {{
  color: #007acc;
  text-decoration: none;
  border-bottom: 1px solid transparent;
  transition: all 0.2s ease;
}}

a:hover {{
  color: #005a9e;
  border-bottom-color: #007acc;
}}

a:visited {{
  color: #6f42c1;
}}

.error-message {{
  color: #e74c3c;
  font-style: italic;
  text-align: center;
  padding: 2em;
}}

.empty-state {{
  color: #7f8c8d;
  font-style: italic;
  text-align: center;
  padding: 2em;
}}
"#,
        content_font = fonts.content,
        symbol_font = fonts.tree_symbols,
        padding = styling.padding,
        background = colors.background,
        content_color = colors.content,
        symbol_color = colors.tree_symbols,
        line_height = styling.line_height,
    );

    for level in 1..=6 {
        if let Some(weight) = config.font_weight_for_header(level) {
            // Writing to a String cannot fail.
            let _ = write!(
                css,
                "\n.tree-content.header.header-{} {{\n  font-weight: {};\n}}\n",
                level, weight
            );
        }
    }

    css
}
