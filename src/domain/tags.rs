//! Tag lookup and post-tag joins

use crate::domain::export::{PostTagLink, RecordId, Tag};
use std::collections::HashMap;

/// Attributes kept for each tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: Option<String>,
    pub slug: String,
}

/// Tag attributes keyed by tag id
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags: HashMap<RecordId, TagInfo>,
}

impl TagIndex {
    pub fn get(&self, id: &RecordId) -> Option<&TagInfo> {
        self.tags.get(id)
    }

    /// Names for the given tag ids, in order.
    ///
    /// Ids missing from the index and tags without a name are skipped
    /// with a warning.
    pub fn names_for(&self, ids: &[RecordId]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| match self.get(id) {
                Some(TagInfo {
                    name: Some(name), ..
                }) => Some(name.clone()),
                Some(tag) => {
                    crate::log!("warn"; "skipping tag {} ('{}') without a name", id, tag.slug);
                    None
                }
                None => {
                    crate::log!("warn"; "skipping link to unknown tag {}", id);
                    None
                }
            })
            .collect()
    }
}

/// Build the tag index. A repeated id keeps the last row seen.
pub fn build_tag_index(tags: &[Tag]) -> TagIndex {
    let mut index = TagIndex::default();
    for tag in tags {
        index.tags.insert(
            tag.id.clone(),
            TagInfo {
                name: tag.name.clone(),
                slug: tag.slug.clone().unwrap_or_default(),
            },
        );
    }
    index
}

/// Tag ids linked to a post, in first-seen order without duplicates
pub fn linked_tag_ids(post_id: &RecordId, links: &[PostTagLink]) -> Vec<RecordId> {
    let mut tag_ids: Vec<RecordId> = Vec::new();
    for link in links.iter().filter(|link| &link.post_id == post_id) {
        if !tag_ids.contains(&link.tag_id) {
            tag_ids.push(link.tag_id.clone());
        }
    }
    tag_ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id: RecordId::Int(id),
            name: Some(name.to_string()),
            slug: Some(name.to_lowercase()),
        }
    }

    fn link(post_id: i64, tag_id: i64) -> PostTagLink {
        PostTagLink {
            post_id: RecordId::Int(post_id),
            tag_id: RecordId::Int(tag_id),
        }
    }

    #[test]
    fn test_build_tag_index() {
        let index = build_tag_index(&[tag(1, "Rust"), tag(2, "News")]);
        assert_eq!(
            index.get(&RecordId::Int(2)),
            Some(&TagInfo {
                name: Some("News".to_string()),
                slug: "news".to_string()
            })
        );
        assert!(index.get(&RecordId::Int(1)).is_some());
        assert!(index.get(&RecordId::Int(3)).is_none());
    }

    #[test]
    fn test_build_tag_index_last_duplicate_wins() {
        let index = build_tag_index(&[tag(1, "Old"), tag(1, "New")]);
        assert_eq!(
            index.get(&RecordId::Int(1)).unwrap().name.as_deref(),
            Some("New")
        );
    }

    #[test]
    fn test_build_tag_index_missing_slug() {
        let index = build_tag_index(&[Tag {
            id: RecordId::Text("abc".to_string()),
            name: Some("Misc".to_string()),
            slug: None,
        }]);
        assert_eq!(index.get(&RecordId::Text("abc".to_string())).unwrap().slug, "");
    }

    #[test]
    fn test_linked_tag_ids_first_seen_order_deduplicated() {
        let links = vec![link(1, 3), link(2, 9), link(1, 1), link(1, 3), link(1, 2)];
        let ids = linked_tag_ids(&RecordId::Int(1), &links);
        assert_eq!(
            ids,
            vec![RecordId::Int(3), RecordId::Int(1), RecordId::Int(2)]
        );
    }

    #[test]
    fn test_linked_tag_ids_none_linked() {
        assert!(linked_tag_ids(&RecordId::Int(5), &[link(1, 1)]).is_empty());
    }

    #[test]
    fn test_int_and_text_ids_do_not_match() {
        let links = vec![PostTagLink {
            post_id: RecordId::Text("1".to_string()),
            tag_id: RecordId::Int(1),
        }];
        assert!(linked_tag_ids(&RecordId::Int(1), &links).is_empty());
    }

    #[test]
    fn test_names_for_skips_unknown_ids() {
        let index = build_tag_index(&[tag(1, "Rust"), tag(2, "News")]);
        let names = index.names_for(&[RecordId::Int(2), RecordId::Int(42), RecordId::Int(1)]);
        assert_eq!(names, vec!["News".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_names_for_skips_tags_without_name() {
        let index = build_tag_index(&[
            tag(1, "Rust"),
            Tag {
                id: RecordId::Int(9),
                name: None,
                slug: Some("orphan".to_string()),
            },
        ]);
        let names = index.names_for(&[RecordId::Int(9), RecordId::Int(1)]);
        assert_eq!(names, vec!["Rust".to_string()]);
    }
}
