use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One source file belonging to a registry item. The directory segments of
/// `path` and the `registry:<kind>` tag in `file_type` both feed into
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    pub path: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Registries attach arbitrary extra keys to files; keep them intact.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: None,
            extra: Map::new(),
        }
    }

    pub fn with_type(path: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_type: Some(file_type.into()),
            extra: Map::new(),
        }
    }
}

/// One installable unit from a registry. Only `name` is required; real-world
/// registries are heterogeneous, so unknown keys are preserved via `extra`
/// and the declared `type` tag is treated as a hint, not a fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<RegistryFile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            item_type: None,
            files: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// A registry document: an optional display name plus the item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<RegistryItem>,
}

/// Semantic category assigned to a registry item by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Component,
    Block,
    Lib,
    Hook,
    File,
    Style,
    Theme,
    Item,
    Unknown,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Registry parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Item {item} has no files to derive a date from")]
    MissingFile { item: String },

    #[error("Publication date lookup for {item} timed out")]
    DateLookupTimeout { item: String },
}

pub type Result<T> = std::result::Result<T, FeedError>;
