//! Server-rendered HTML.
//!
//! Every value that came from a user goes through [`escape`] before it is
//! written into markup.

pub mod member;
pub mod pages;

/// Escape text for use in HTML content and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell and navigation.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Family Tree</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }}
nav a {{ margin-right: 1rem; }}
label {{ display: block; margin-top: 0.5rem; }}
.member img {{ max-width: 8rem; }}
.lineage {{ color: #555; font-size: 0.9em; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/view">Tree</a><a href="/add">Add member</a><a href="/edit">Edit member</a><a href="/display">All members</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

/// Escaped value of an optional field, empty when absent.
pub(crate) fn field(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}
