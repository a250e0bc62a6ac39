//! Static chat page generator.
//!
//! Every fragment is rendered independently, the results are joined once and
//! placed into a fixed page template. Output depends only on the fragments, so
//! rendering the same transcript twice gives byte-identical pages.

use std::fs;
use std::path::Path;

use crate::{ChatError, ChatResult};
use crate::core::{ChatMessage, Fragment};

/// Escape message text for insertion into element content.
///
/// Only `&`, `<` and `>` are replaced. `&` is handled in the same pass as the
/// others, so entities produced here are never escaped twice.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

fn render_bubble(msg: &ChatMessage) -> String {
    format!(
        r#"<div class="chat">
    <img class="icon" src="{icon}" alt="{sender}">
    <div class="bubble">
        <div class="meta">{sender}・{time}</div>
        <div>{text}</div>
    </div>
</div>
"#,
        icon = msg.icon,
        sender = msg.sender,
        time = msg.time,
        text = escape_text(&msg.text()),
    )
}

/// Render a single fragment to its HTML snippet.
pub fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Separator => "<hr>\n".to_string(),
        Fragment::DateLabel(date) => format!("<div class=\"meta\">{}</div>\n", date),
        Fragment::Bubble(msg) => render_bubble(msg),
    }
}

/// Render the complete HTML document for the given fragments.
pub fn render_page(fragments: &[Fragment]) -> String {
    let body: String = fragments.iter().map(render_fragment).collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>チャットログ</title>
<style>
body {{
  font-family: sans-serif;
  background-color: #778899;
  padding: 20px;
  max-width: 600px;
  margin: auto;
  font-size: 12px;
}}
.chat {{
  display: flex;
  align-items: flex-start;
  margin: 8px 0;
}}
.icon {{
  width: 40px;
  height: 40px;
  border-radius: 50%;
  margin-right: 10px;
  flex-shrink: 0;
}}
.bubble {{
  background-color: white;
  border-radius: 10px;
  padding: 10px;
  position: relative;
  max-width: 80%;
  word-break: break-word;
  font-size: 12px;
}}
.bubble .meta {{
  font-size: 0.7em;
  color: #888;
  margin-bottom: 3px;
}}
.bubble div {{
  white-space: pre-wrap;
}}
.meta {{
  font-size: 0.7em;
  color: #eee;
  margin: 15px 0 5px 0;
}}
hr {{
  border: none;
  border-top: 1px solid #ccc;
  margin: 20px 0;
}}
</style>
</head>
<body>
{body}
</body>
</html>
"##
    )
}

/// Write the rendered page to `path`, replacing any existing file.
pub fn write_page(fragments: &[Fragment], path: &Path) -> ChatResult<()> {
    let html = render_page(fragments);
    fs::write(path, html).map_err(|source| ChatError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
