//! Render a frame back into meta declarations.

use crate::types::Frame;

/// Render the frame as `<meta>` lines, one per flattened declaration.
pub fn frame_html(frame: &Frame) -> String {
    frame
        .flatten()
        .iter()
        .map(|(key, content)| {
            format!(
                r#"<meta property="{}" content="{}"/>"#,
                escape_attribute(key),
                escape_attribute(content)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
