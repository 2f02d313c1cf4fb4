//! Ghost export records and loading

use crate::domain::date::ExportDate;
use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Tables that must all be present in a `data` block for it to be imported.
const REQUIRED_TABLES: [&str; 3] = ["posts", "tags", "posts_tags"];

/// Row identifier. Ghost 0.x exports number rows, later versions use
/// string object ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A row of the export's `tags` table
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A row of the export's `posts_tags` join table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostTagLink {
    pub post_id: RecordId,
    pub tag_id: RecordId,
}

/// A row of the export's `posts` table
#[derive(Debug, Clone, Deserialize)]
pub struct SourcePost {
    pub id: RecordId,

    /// `page: 0`/`page: false` marks a post
    #[serde(default, deserialize_with = "deserialize_page")]
    pub page: bool,

    /// Newer exports use `type: "page"` instead of the page flag
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub markdown: Option<String>,

    #[serde(default)]
    pub published_at: Option<ExportDate>,

    #[serde(default)]
    pub created_at: Option<ExportDate>,
}

impl SourcePost {
    /// Whether this record is a static page rather than a post
    pub fn is_page(&self) -> bool {
        self.page || self.kind.as_deref() == Some("page")
    }

    /// Status text, empty when absent
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    /// Slug used to identify the post in messages
    pub fn display_name(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageFlag {
    Flag(bool),
    Number(i64),
}

fn deserialize_page<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = Option::<PageFlag>::deserialize(deserializer)?;
    Ok(match flag {
        None => false,
        Some(PageFlag::Flag(page)) => page,
        Some(PageFlag::Number(page)) => page != 0,
    })
}

/// The three tables an import works from
#[derive(Debug, Clone, Deserialize)]
pub struct ExportData {
    pub posts: Vec<SourcePost>,
    pub tags: Vec<Tag>,
    pub posts_tags: Vec<PostTagLink>,
}

impl ExportData {
    /// Parse export JSON and pick the first `db[*].data` block holding all
    /// of `posts`, `tags` and `posts_tags`.
    ///
    /// Returns `Ok(None)` when no such block exists.
    pub fn from_json(text: &str) -> Result<Option<Self>> {
        let root: Value = serde_json::from_str(text)?;

        let Some(entries) = root.get("db").and_then(Value::as_array) else {
            return Ok(None);
        };

        for entry in entries {
            let Some(data) = entry.get("data") else {
                continue;
            };
            if REQUIRED_TABLES.iter().all(|table| data.get(table).is_some()) {
                return Ok(Some(ExportData::deserialize(data)?));
            }
        }

        Ok(None)
    }
}

/// Read an export file from disk
pub fn load_export(path: &Path) -> Result<Option<ExportData>> {
    let text = fs::read_to_string(path)?;
    ExportData::from_json(&text)
}
