//! Markdown rendering utilities.

use comrak::{Options, markdown_to_html as render};

/// Convert Markdown source to HTML.
///
/// Supports strikethrough, tables and footnotes. Fenced code blocks come
/// out as `<pre><code class="language-xxx">`, which is the shape the syntax
/// highlighter looks for.
///
/// Raw HTML in the source is escaped, not passed through.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;

    render(markdown, &options)
}
