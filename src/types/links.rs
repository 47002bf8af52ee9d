//! Explicit hypermedia links attached to single-resource responses.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// A single link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    pub href: String,
}

/// Relation name to link map, serialized as `{"rel": {"href": "..."}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the link for `rel`
    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.0.insert(rel.into(), Link { href: href.into() });
        self
    }
}

/// Resource body with its related links under `_links`
#[derive(Debug, Clone, Serialize)]
pub struct Resource<T: Serialize> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T: Serialize> Resource<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: i32,
    }

    #[test]
    fn test_resource_flattens_content() {
        let resource = Resource::new(
            Item { id: 4 },
            Links::new()
                .with("self", "/items/4")
                .with("all-items", "/items"),
        );

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["_links"]["self"]["href"], "/items/4");
        assert_eq!(json["_links"]["all-items"]["href"], "/items");
    }

    #[test]
    fn test_with_replaces_existing_rel() {
        let links = Links::new().with("self", "/a").with("self", "/b");

        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json, serde_json::json!({ "self": { "href": "/b" } }));
    }
}
