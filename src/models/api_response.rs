use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope around a single panel entity.
///
/// ```json
/// { "object": "server", "attributes": { "id": 42, ... } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource<A> {
    /// Entity kind reported by the panel (`server`, `user`, `allocation`).
    pub object: String,

    /// The entity's fields.
    pub attributes: A,
}

/// Envelope around a collection of panel entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct ListResponse<A> {
    /// Always `list` for collections.
    pub object: String,

    /// The wrapped entities on this page.
    pub data: Vec<Resource<A>>,

    /// Pagination metadata. Zero-valued when the panel omits it, as it does
    /// for included relationships.
    pub meta: Meta,
}

impl<A> ListResponse<A> {
    /// Number of entities on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page holds no entities.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the unwrapped entity attributes.
    pub fn attributes(&self) -> impl Iterator<Item = &A> {
        self.data.iter().map(|r| &r.attributes)
    }

    /// Consumes the envelope, returning the unwrapped entity attributes.
    pub fn into_attributes(self) -> Vec<A> {
        self.data.into_iter().map(|r| r.attributes).collect()
    }
}

/// Metadata attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub pagination: Pagination,
}

impl Meta {
    /// The page after this one, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        let p = &self.pagination;
        (p.current_page < p.total_pages).then_some(p.current_page + 1)
    }
}

/// Pagination state of a list response.
///
/// The client keeps no cursor: request another page explicitly with the
/// list builder's `page()` setter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total entities across all pages.
    pub total: u64,

    /// Entities on the current page.
    pub count: u64,

    pub per_page: u64,

    /// 1-based index of the current page.
    pub current_page: u32,

    pub total_pages: u32,

    /// Relation name (`next`, `previous`) to absolute URL.
    #[serde(deserialize_with = "deserialize_links")]
    pub links: HashMap<String, String>,
}

/// The panel renders an empty link set as `[]` rather than `{}`.
fn deserialize_links<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Links {
        Map(HashMap<String, String>),
        List(Vec<serde_json::Value>),
        Null(()),
    }

    Ok(match Links::deserialize(deserializer)? {
        Links::Map(map) => map,
        Links::List(_) | Links::Null(()) => HashMap::new(),
    })
}
