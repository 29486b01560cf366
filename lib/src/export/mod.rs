pub mod browsers;
pub mod html;

use crate::error::Result;
use crate::tree::BookmarkTree;

pub use browsers::{ChromeExporter, EdgeExporter, FirefoxExporter, SafariExporter};
pub use html::HtmlExporter;

/// Trait for rendering a bookmark tree into one output document
pub trait TreeExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String>;
}

/// Generic JSON exporter: the tree serialized as-is
pub struct JsonExporter;

impl TreeExporter for JsonExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        Ok(serde_json::to_string_pretty(tree)?)
    }
}
