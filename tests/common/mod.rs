#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn ghost_import_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ghost-import").unwrap();
    cmd.env_remove("GHOST_IMPORT_ROOT");
    cmd
}

/// Create a site with the default site.toml
pub fn init_site(temp: &TempDir) {
    ghost_import_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
}

/// Write an export file into the site and return its path
pub fn write_export(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("ghost.json");
    fs::write(&path, contents).unwrap();
    path
}

/// Relative paths of every file below `dir`, sorted
pub fn files_under(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

pub const SAMPLE_EXPORT: &str = r#"{
  "db": [
    {
      "meta": {"exported_on": 1500000000000, "version": "003"},
      "data": {
        "posts": [
          {"id": 1, "page": 0, "status": "published", "title": "Hi", "slug": "hi",
           "markdown": "**hi**", "published_at": "2020-01-02T00:00:00Z",
           "created_at": "2019-12-31T00:00:00Z"},
          {"id": 2, "page": 0, "status": "draft", "title": "Work in progress",
           "slug": "wip", "markdown": "Not yet.", "published_at": null,
           "created_at": "2021-05-05T09:15:00Z"},
          {"id": 3, "page": 1, "status": "published", "title": "About",
           "slug": "about", "markdown": "About me", "published_at": "2020-03-01T00:00:00Z",
           "created_at": "2020-03-01T00:00:00Z"},
          {"id": 4, "page": 0, "status": "scheduled", "title": "Later",
           "slug": "later", "markdown": "", "published_at": "2030-01-01T00:00:00Z",
           "created_at": "2020-01-01T00:00:00Z"},
          {"id": 5, "page": 0, "status": "published", "title": "Tagged",
           "slug": "tagged", "markdown": "Tags!", "published_at": "2020-11-23T18:00:00Z",
           "created_at": "2020-11-20T00:00:00Z"}
        ],
        "tags": [
          {"id": 1, "name": "News", "slug": "news"},
          {"id": 2, "name": "Rust", "slug": "rust"}
        ],
        "posts_tags": [
          {"id": 1, "post_id": 2, "tag_id": 1},
          {"id": 2, "post_id": 5, "tag_id": 2},
          {"id": 3, "post_id": 5, "tag_id": 1},
          {"id": 4, "post_id": 5, "tag_id": 2}
        ]
      }
    }
  ]
}"#;
