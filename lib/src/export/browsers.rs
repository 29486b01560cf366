use super::TreeExporter;
use crate::error::Result;
use crate::tree::{BookmarkTree, Node};
use serde::Serialize;

/// Firefox bookmark structure (JSON)
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum FirefoxNode {
    Folder {
        title: String,
        children: Vec<FirefoxNode>,
    },
    Bookmark {
        title: String,
        url: String,
    },
}

#[derive(Debug, Serialize)]
struct FirefoxFile {
    children: Vec<FirefoxNode>,
}

/// Chrome bookmark structure (JSON), also read by Edge
#[derive(Debug, Serialize)]
struct ChromeNode {
    id: String,
    #[serde(rename = "parentId")]
    parent_id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "dateAdded")]
    date_added: String,
    #[serde(rename = "type")]
    node_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<ChromeNode>>,
}

#[derive(Debug, Serialize)]
struct ChromeFile {
    roots: ChromeRoots,
    version: u32,
}

#[derive(Debug, Serialize)]
struct ChromeRoots {
    bookmark_bar: ChromeChildren,
    other: ChromeChildren,
    synced: ChromeChildren,
}

#[derive(Debug, Serialize)]
struct ChromeChildren {
    children: Vec<ChromeNode>,
}

/// Safari bookmark structure (JSON flavour of its plist)
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SafariNode {
    List {
        #[serde(rename = "Title")]
        title: String,
        #[serde(rename = "Children")]
        children: Vec<SafariNode>,
        #[serde(rename = "WebBookmarkType")]
        node_type: &'static str,
    },
    Leaf {
        #[serde(rename = "URIDictionary")]
        uri_dictionary: SafariUri,
        #[serde(rename = "URLString")]
        url_string: String,
        #[serde(rename = "WebBookmarkType")]
        node_type: &'static str,
    },
}

#[derive(Debug, Serialize)]
struct SafariUri {
    title: String,
}

#[derive(Debug, Serialize)]
struct SafariFile {
    #[serde(rename = "Title")]
    title: &'static str,
    #[serde(rename = "Children")]
    children: Vec<SafariNode>,
    #[serde(rename = "WebBookmarkFileVersion")]
    version: u32,
}

fn firefox_nodes(nodes: &[Node]) -> Vec<FirefoxNode> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Folder { title, children } => FirefoxNode::Folder {
                title: title.clone(),
                children: firefox_nodes(children),
            },
            Node::Bookmark { title, url } => FirefoxNode::Bookmark {
                title: title.clone(),
                url: url.clone(),
            },
        })
        .collect()
}

fn chrome_nodes(nodes: &[Node]) -> Vec<ChromeNode> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Folder { title, children } => ChromeNode {
                id: String::new(),
                parent_id: String::new(),
                title: title.clone(),
                url: None,
                date_added: String::new(),
                node_type: "folder",
                children: Some(chrome_nodes(children)),
            },
            Node::Bookmark { title, url } => ChromeNode {
                id: String::new(),
                parent_id: String::new(),
                title: title.clone(),
                url: Some(url.clone()),
                date_added: String::new(),
                node_type: "url",
                children: None,
            },
        })
        .collect()
}

fn safari_nodes(nodes: &[Node]) -> Vec<SafariNode> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Folder { title, children } => SafariNode::List {
                title: title.clone(),
                children: safari_nodes(children),
                node_type: "WebBookmarkTypeList",
            },
            Node::Bookmark { title, url } => SafariNode::Leaf {
                uri_dictionary: SafariUri {
                    title: title.clone(),
                },
                url_string: url.clone(),
                node_type: "WebBookmarkTypeLeaf",
            },
        })
        .collect()
}

/// Firefox JSON exporter
pub struct FirefoxExporter;

impl TreeExporter for FirefoxExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        let document = FirefoxFile {
            children: firefox_nodes(&tree.bookmarks),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Chrome JSON exporter
pub struct ChromeExporter;

impl TreeExporter for ChromeExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        let document = ChromeFile {
            roots: ChromeRoots {
                bookmark_bar: ChromeChildren {
                    children: chrome_nodes(&tree.bookmarks),
                },
                other: ChromeChildren { children: vec![] },
                synced: ChromeChildren { children: vec![] },
            },
            version: 1,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Edge JSON exporter. Edge reads the Chrome format unchanged.
pub struct EdgeExporter;

impl TreeExporter for EdgeExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        ChromeExporter.render(tree)
    }
}

/// Safari JSON exporter
pub struct SafariExporter;

impl TreeExporter for SafariExporter {
    fn render(&self, tree: &BookmarkTree) -> Result<String> {
        let document = SafariFile {
            title: "Bookmarks",
            children: safari_nodes(&tree.bookmarks),
            version: 1,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
