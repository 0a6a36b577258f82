//! Markdown-to-HTML transform for the live preview.
//!
//! A pure, synchronous function re-run on every content change; the
//! conversion itself is delegated to `pulldown-cmark`.

use pulldown_cmark::{html, Options, Parser};

/// Renders markdown source to an HTML fragment.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let output = to_html("# Title\n\nSome *emphasis* and **bold**.");
        assert!(output.contains("<h1>Title</h1>"));
        assert!(output.contains("<em>emphasis</em>"));
        assert!(output.contains("<strong>bold</strong>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn renders_extension_syntax() {
        let output = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(output.contains("<table>"));
        assert!(output.contains("<del>gone</del>"));
    }
}
