use indexmap::IndexMap;
use log::info;
use serde_json::Value;

/// Space titles keyed by pinned/unpinned container id
///
/// Keys keep their first-seen position; redefining a key replaces the
/// title without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceNames {
    pub pinned: IndexMap<String, String>,
    pub unpinned: IndexMap<String, String>,
}

/// Walk the space list and map container ids to space titles.
///
/// Each space carries a `newContainerIDs` array where an object holding a
/// `pinned` or `unpinned` key marks the NEXT element as that space's
/// container id. A marker at the end of the array marks nothing. Spaces
/// without a usable title are numbered `Space 1`, `Space 2`, ... in order
/// of appearance, counting even spaces that contribute no container ids.
pub fn resolve_spaces(spaces: &[Value]) -> SpaceNames {
    info!("Getting spaces...");

    let mut names = SpaceNames::default();
    let mut untitled = 1usize;

    for space in spaces {
        let title = match space
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
        {
            Some(title) => title.to_string(),
            None => {
                let fallback = format!("Space {}", untitled);
                untitled += 1;
                fallback
            }
        };

        let Some(ids) = space.get("newContainerIDs").and_then(Value::as_array) else {
            continue;
        };

        let mut entries = ids.iter().peekable();
        while let Some(entry) = entries.next() {
            let Some(marker) = entry.as_object() else {
                continue;
            };

            let next = entries.peek().copied();
            if marker.contains_key("pinned") {
                if let Some(id) = next {
                    names.pinned.insert(container_key(id), title.clone());
                }
            }
            if marker.contains_key("unpinned") {
                if let Some(id) = next {
                    names.unpinned.insert(container_key(id), title.clone());
                }
            }
        }
    }

    names
}

/// Map key for whatever follows a marker: string content for strings,
/// compact JSON text for anything else
fn container_key(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}
