use indexmap::IndexMap;
use log::info;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// One node of the exported tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder { title: String, children: Vec<Node> },
    Bookmark { title: String, url: String },
}

// Output keeps `title` ahead of the `type` tag
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Folder { title, children } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("title", title)?;
                map.serialize_entry("type", "folder")?;
                map.serialize_entry("children", children)?;
                map.end()
            }
            Node::Bookmark { title, url } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("title", title)?;
                map.serialize_entry("type", "bookmark")?;
                map.serialize_entry("url", url)?;
                map.end()
            }
        }
    }
}

/// Root of the exported tree: one folder per pinned space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkTree {
    pub bookmarks: Vec<Node>,
}

/// Sidebar items indexed by id, with a child list per parent id.
/// Items without a string `id` are not indexed and can never be reached.
struct ItemForest<'a> {
    index: IndexMap<&'a str, &'a Value>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ItemForest<'a> {
    fn new(items: &'a [Value]) -> Self {
        let mut index: IndexMap<&str, &Value> = IndexMap::new();
        for item in items {
            if let Some(id) = item.get("id").and_then(Value::as_str) {
                index.insert(id, item);
            }
        }

        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for (&id, item) in &index {
            if let Some(parent) = item.get("parentID").and_then(Value::as_str) {
                children.entry(parent).or_default().push(id);
            }
        }

        ItemForest { index, children }
    }

    /// Children of `parent_id` as tree nodes, depth first. An item with
    /// tab data becomes a bookmark, an item with a non-empty title becomes
    /// a folder, anything else is dropped together with its subtree.
    fn expand(&self, parent_id: &str) -> Vec<Node> {
        let Some(child_ids) = self.children.get(parent_id) else {
            return Vec::new();
        };

        let mut nodes = Vec::new();
        for &id in child_ids {
            let item = self.index[id];

            if let Some(tab) = item.pointer("/data/tab").filter(|tab| tab.is_object()) {
                let title = item
                    .get("title")
                    .and_then(Value::as_str)
                    .filter(|title| !title.is_empty())
                    .or_else(|| tab.get("savedTitle").and_then(Value::as_str))
                    .unwrap_or("")
                    .to_string();
                let url = tab
                    .get("savedURL")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                nodes.push(Node::Bookmark { title, url });
            } else if let Some(title) = item
                .get("title")
                .and_then(Value::as_str)
                .filter(|title| !title.is_empty())
            {
                nodes.push(Node::Folder {
                    title: title.to_string(),
                    children: self.expand(id),
                });
            }
        }

        nodes
    }
}

/// Build the bookmark tree for all pinned spaces, one root folder per
/// space in map order. Assumes `parentID` links are acyclic, which holds
/// for sidebar files Arc writes.
pub fn build_tree(pinned: &IndexMap<String, String>, items: &[Value]) -> BookmarkTree {
    info!("Converting to bookmarks...");

    let forest = ItemForest::new(items);
    let bookmarks = pinned
        .iter()
        .map(|(container_id, title)| Node::Folder {
            title: title.clone(),
            children: forest.expand(container_id),
        })
        .collect();

    BookmarkTree { bookmarks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn pinned(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(id, title)| (id.to_string(), title.to_string()))
            .collect()
    }

    fn folder(title: &str, children: Vec<Node>) -> Node {
        Node::Folder {
            title: title.to_string(),
            children,
        }
    }

    fn bookmark(title: &str, url: &str) -> Node {
        Node::Bookmark {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_nested_folder_and_bookmark() {
        let items = vec![
            json!({"id": "a", "parentID": "7", "title": "Docs"}),
            json!({
                "id": "b",
                "parentID": "a",
                "data": {"tab": {"savedTitle": "Site", "savedURL": "https://example.com"}}
            }),
        ];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder(
                "Work",
                vec![folder("Docs", vec![bookmark("Site", "https://example.com")])],
            )],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_space_without_items_is_an_empty_folder() {
        let tree = build_tree(&pinned(&[("7", "Work")]), &[]);

        assert_eq!(
            tree,
            BookmarkTree {
                bookmarks: vec![folder("Work", vec![])]
            }
        );
    }

    #[test]
    fn test_roots_follow_pinned_map_order() {
        let items = vec![json!({
            "id": "x",
            "parentID": "s2",
            "data": {"tab": {"savedTitle": "T", "savedURL": "u"}}
        })];

        let tree = build_tree(&pinned(&[("s1", "One"), ("s2", "Two")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder("One", vec![]), folder("Two", vec![bookmark("T", "u")])],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_items_without_id_never_appear() {
        let items = vec![
            json!({"parentID": "7", "title": "NoId"}),
            json!({"id": 42, "parentID": "7", "title": "NumericId"}),
        ];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        assert_eq!(
            tree,
            BookmarkTree {
                bookmarks: vec![folder("Work", vec![])]
            }
        );
    }

    #[test]
    fn test_duplicate_id_last_item_wins_at_first_position() {
        let items = vec![
            json!({"id": "a", "parentID": "7", "title": "First"}),
            json!({"id": "z", "parentID": "7", "title": "Middle"}),
            json!({"id": "a", "parentID": "7", "title": "Second"}),
        ];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder(
                "Work",
                vec![folder("Second", vec![]), folder("Middle", vec![])],
            )],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_siblings_keep_item_order() {
        let items = vec![
            json!({"id": "b", "parentID": "7", "title": "B"}),
            json!({"id": "a", "parentID": "7", "title": "A"}),
        ];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder(
                "Work",
                vec![folder("B", vec![]), folder("A", vec![])],
            )],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_untitled_untabbed_item_drops_its_subtree() {
        let items = vec![
            json!({"id": "a", "parentID": "7"}),
            json!({
                "id": "b",
                "parentID": "a",
                "data": {"tab": {"savedTitle": "Lost", "savedURL": "u"}}
            }),
        ];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        assert_eq!(
            tree,
            BookmarkTree {
                bookmarks: vec![folder("Work", vec![])]
            }
        );
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(false))]
    #[case(json!(0))]
    #[case(json!(""))]
    #[case(json!("stale"))]
    fn test_non_object_tab_is_not_tab_data(#[case] tab: Value) {
        let items = vec![json!({
            "id": "a",
            "parentID": "7",
            "title": "Folder",
            "data": {"tab": tab}
        })];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder("Work", vec![folder("Folder", vec![])])],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_item_tab_data_beats_folder_title() {
        let items = vec![json!({
            "id": "a",
            "parentID": "7",
            "title": "Kept",
            "data": {"tab": {"savedTitle": "Ignored", "savedURL": "u"}}
        })];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        let expected = BookmarkTree {
            bookmarks: vec![folder("Work", vec![bookmark("Kept", "u")])],
        };
        assert_eq!(tree, expected);
    }

    #[rstest]
    #[case(
        json!({"id": "t", "parentID": "7", "title": "Own",
               "data": {"tab": {"savedTitle": "Saved", "savedURL": "u"}}}),
        "Own",
        "u"
    )]
    #[case(
        json!({"id": "t", "parentID": "7",
               "data": {"tab": {"savedTitle": "Saved", "savedURL": "u"}}}),
        "Saved",
        "u"
    )]
    #[case(
        json!({"id": "t", "parentID": "7", "title": "",
               "data": {"tab": {"savedTitle": "Saved", "savedURL": "u"}}}),
        "Saved",
        "u"
    )]
    #[case(json!({"id": "t", "parentID": "7", "data": {"tab": {}}}), "", "")]
    fn test_bookmark_title_and_url_fallbacks(
        #[case] item: Value,
        #[case] title: &str,
        #[case] url: &str,
    ) {
        let tree = build_tree(&pinned(&[("7", "W")]), &[item]);

        let expected = BookmarkTree {
            bookmarks: vec![folder("W", vec![bookmark(title, url)])],
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_items_parented_outside_pinned_spaces_are_ignored() {
        let items = vec![json!({"id": "a", "parentID": "elsewhere", "title": "Hidden"})];

        let tree = build_tree(&pinned(&[("7", "Work")]), &items);

        assert_eq!(
            tree,
            BookmarkTree {
                bookmarks: vec![folder("Work", vec![])]
            }
        );
    }
}
