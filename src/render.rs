use pulldown_cmark::{Options, Parser, html};

/// Host-supplied markdown-to-HTML rendering capability.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Default renderer backed by pulldown-cmark.
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        html_output
    }
}

/// Wrap rendered note HTML in the fixed document shell.
pub fn wrap_note_html(title: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{}</title>
<style>
{}
</style>
</head>
<body>
{}
</body>
</html>"#,
        title, MARKDOWN_STYLES, body_html
    )
}

const MARKDOWN_STYLES: &str = "\
body {
	font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif;
	padding: 10px 20px;
	line-height: 22px;
	max-width: 882px;
	margin: 0 auto;
}

body *:last-child {
	margin-bottom: 0;
}

img {
	max-width: 100%;
	max-height: 100%;
}

a {
	text-decoration: none;
}

a:hover {
	text-decoration: underline;
}

hr {
	border: 0;
	height: 2px;
	border-bottom: 2px solid;
}

h1 {
	padding-bottom: 0.3em;
	line-height: 1.2;
	border-bottom: 1px solid rgba(0, 0, 0, 0.18);
}

h1, h2, h3 {
	font-weight: normal;
}

table {
	border-collapse: collapse;
}

table > thead > tr > th {
	text-align: left;
	border-bottom: 1px solid rgba(0, 0, 0, 0.69);
}

table > thead > tr > th,
table > thead > tr > td,
table > tbody > tr > th,
table > tbody > tr > td {
	padding: 5px 10px;
}

table > tbody > tr + tr > td {
	border-top: 1px solid rgba(0, 0, 0, 0.18);
}

blockquote {
	margin: 0 7px 0 5px;
	padding: 0 16px 0 10px;
	border-left: 5px solid rgba(0, 0, 0, 0.18);
}

code {
	font-family: \"SF Mono\", Monaco, Menlo, Consolas, \"Ubuntu Mono\", \"Liberation Mono\", \"DejaVu Sans Mono\", \"Courier New\", monospace;
}

pre code {
	display: block;
	padding: 16px;
	border-radius: 3px;
	overflow: auto;
	background-color: rgba(220, 220, 220, 0.4);
	line-height: 1.5;
}
";
