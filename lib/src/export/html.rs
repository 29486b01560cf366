use super::TreeExporter;
use crate::error::Result;
use crate::tree::{BookmarkTree, Node};
use log::info;

/// Left padding per folder depth, in pixels
const INDENT_PX: [u32; 13] = [8, 32, 56, 80, 104, 128, 152, 176, 200, 224, 248, 272, 296];

const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Bookmarks</title>
  <style>
    body { font-family: 'Segoe UI', Arial, sans-serif; background: #f6f7fb; color: #222; margin: 0; padding: 0; }
    .container { max-width: 100vw; overflow-x: auto; margin: 40px auto; background: #fff; border-radius: 16px; box-shadow: 0 4px 24px #0001; padding: 32px 24px; }
    h1 { text-align: center; color: #3a3a3a; margin-bottom: 32px; }
    ul.bookmarks, .folder > ul { list-style: none; padding-left: 0; margin: 0; }
    .folder { margin: 6px 0 6px 0; }
    .folder-title { cursor: pointer; display: flex; align-items: center; font-weight: 600; color: #2a4cff; border-radius: 8px; padding: 4px 8px; transition: background 0.2s; }
    .folder-title:hover { background: #f0f4ff; }
    .folder-arrow { display: inline-block; width: 18px; transition: transform 0.2s; margin-right: 4px; }
    .collapsed > .folder-title .folder-arrow { transform: rotate(-90deg); }
    .collapsed > ul { display: none; }
    .bookmark-link { display: block; color: #222; text-decoration: none; border-radius: 8px; margin: 2px 0; transition: background 0.2s, color 0.2s; font-weight: 500; }
    .bookmark-link:hover { background: #e6eaff; color: #2a4cff; }
    ul.bookmarks > li > .folder-title { font-size: 1.18em; }
    ul.bookmarks a.bookmark-link { margin-bottom: 6px; }
"##;

const PAGE_BODY_OPEN: &str = r##"  </style>
</head>
<body>
  <div class="container">
    <h1>Bookmarks</h1>
    <ul class="bookmarks">
"##;

const PAGE_FOOT: &str = r##"    </ul>
  </div>
  <script>
    function toggleFolder(folderElem) {
      folderElem.classList.toggle('collapsed');
    }
    // Collapse every subfolder on load, top level folders stay open
    document.addEventListener('DOMContentLoaded', function() {
      document.querySelectorAll('.folder ul').forEach(function(ul) {
        if(ul.parentNode.parentNode.classList.contains('bookmarks')) return;
        ul.parentNode.classList.add('collapsed');
      });
    });
  </script>
</body>
</html>
"##;

/// Collapsible HTML page exporter
pub struct HtmlExporter;

impl TreeExporter for HtmlExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        info!("Converting bookmarks to HTML...");

        let mut html = String::new();
        html.push_str(PAGE_HEAD);
        for (depth, padding) in INDENT_PX.iter().enumerate() {
            let nested = "ul ".repeat(depth);
            html.push_str(&format!(
                "  ul.bookmarks {nested}> li > .folder-title, ul.bookmarks {nested}> li > a.bookmark-link {{ padding-left: {padding}px; }}\n"
            ));
        }
        html.push_str(PAGE_BODY_OPEN);
        render_nodes(&mut html, &tree.bookmarks);
        html.push_str(PAGE_FOOT);

        Ok(html)
    }
}

fn render_nodes(html: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Folder { title, children } => {
                html.push_str("<li class=\"folder\">\n");
                html.push_str(
                    "  <div class=\"folder-title\" onclick=\"toggleFolder(this.parentNode)\">\n",
                );
                html.push_str("    <span class=\"folder-arrow\">\u{25b6}</span>\n");
                html.push_str(&format!("    <span>{}</span>\n", escape_html(title)));
                html.push_str("  </div>\n");
                html.push_str("  <ul>");
                render_nodes(html, children);
                html.push_str("</ul>\n</li>\n");
            }
            Node::Bookmark { title, url } => {
                html.push_str(&format!(
                    "<li><a class=\"bookmark-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
                    escape_html(url),
                    escape_html(title)
                ));
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
