//! Mapping export posts to output records

use crate::domain::date::{parse_export_date, ExportDate};
use crate::domain::export::{PostTagLink, SourcePost};
use crate::domain::tags::{linked_tag_ids, TagIndex};
use crate::error::{ImportError, Result};
use chrono::{DateTime, Datelike, FixedOffset};
use std::path::PathBuf;

/// Tag appended to every imported draft
pub const DRAFT_TAG: &str = "draft";

/// Publication status of an export post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostStatus {
    Published,
    Draft,
    Other(String),
}

impl PostStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "published" => PostStatus::Published,
            "draft" => PostStatus::Draft,
            other => PostStatus::Other(other.to_string()),
        }
    }
}

/// A post ready to be rendered and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPost {
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub author: String,
    /// Comma-joined tag names
    pub tags: String,
    pub published: DateTime<FixedOffset>,
}

impl OutputPost {
    /// Path of the post below the posts directory: `year/month/day/slug.md`.
    /// Month and day are not zero-padded.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.published.year().to_string())
            .join(self.published.month().to_string())
            .join(self.published.day().to_string())
            .join(format!("{}.md", self.slug))
    }
}

/// Whether a slug names a single file inside the day directory
pub fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != ".." && !slug.contains(['/', '\\'])
}

/// Build the output record for a source post.
///
/// Pages and posts that are neither published nor drafts yield `None`.
/// Published posts are dated by `published_at`, drafts by `created_at`.
pub fn to_output_post(
    source: &SourcePost,
    tag_index: &TagIndex,
    links: &[PostTagLink],
    author: &str,
) -> Result<Option<OutputPost>> {
    if source.is_page() {
        return Ok(None);
    }

    let status = PostStatus::parse(source.status());
    let date = match &status {
        PostStatus::Published => &source.published_at,
        PostStatus::Draft => &source.created_at,
        PostStatus::Other(_) => return Ok(None),
    };
    let published = require_date(source, date.as_ref())?;

    let tag_ids = linked_tag_ids(&source.id, links);
    let mut tags = tag_index.names_for(&tag_ids).join(",");
    if status == PostStatus::Draft {
        if !tags.is_empty() {
            tags.push(',');
        }
        tags.push_str(DRAFT_TAG);
    }

    let slug = source.slug.clone().unwrap_or_default();
    if !is_plain_slug(&slug) {
        crate::log!("warn"; "post {} has slug '{}', written outside its day directory", source.id, slug);
    }

    Ok(Some(OutputPost {
        title: source.title.clone().unwrap_or_default(),
        slug,
        markdown: source.markdown.clone().unwrap_or_default(),
        author: author.to_string(),
        tags,
        published,
    }))
}

fn require_date(
    source: &SourcePost,
    date: Option<&ExportDate>,
) -> Result<DateTime<FixedOffset>> {
    let invalid = |value: String| ImportError::InvalidDate {
        post: source.display_name(),
        value,
    };

    let date = date.ok_or_else(|| invalid("null".to_string()))?;
    parse_export_date(date).ok_or_else(|| invalid(date.to_string()))
}
