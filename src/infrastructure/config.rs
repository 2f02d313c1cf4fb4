//! Site configuration

use crate::domain::DEFAULT_TEMPLATE;
use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the site configuration
pub const CONFIG_FILE: &str = "site.toml";

const DEFAULT_AUTHOR: &str = "admin";

/// One `(pattern, destination, template)` content entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub pattern: String,
    pub destination: String,
    pub template: String,
}

impl ContentEntry {
    pub fn new(pattern: &str, destination: &str, template: &str) -> Self {
        ContentEntry {
            pattern: pattern.to_string(),
            destination: destination.to_string(),
            template: template.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Author written into every imported post
    #[serde(default = "default_author")]
    pub author: String,

    /// Template imported posts are rendered with
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub posts: Vec<ContentEntry>,

    #[serde(default)]
    pub pages: Vec<ContentEntry>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            author: default_author(),
            template: default_template(),
            posts: vec![
                ContentEntry::new("posts/*.rst", "posts", "post.tmpl"),
                ContentEntry::new("posts/*.md", "posts", "post.tmpl"),
            ],
            pages: vec![
                ContentEntry::new("pages/*.rst", "pages", "page.tmpl"),
                ContentEntry::new("pages/*.md", "pages", "page.tmpl"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load config from site.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportError::NotSiteDirectory(path.to_path_buf())
            } else {
                ImportError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ImportError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to site.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}

/// Resolves where imported content is written
pub trait DirectoryResolver {
    fn posts_directory(&self) -> Option<PathBuf>;
    fn pages_directory(&self) -> Option<PathBuf>;
}

/// Directory holding the markdown files of a content list.
///
/// The last entry whose pattern references `*.md` wins.
pub fn markdown_directory(entries: &[ContentEntry]) -> Option<PathBuf> {
    entries
        .iter()
        .filter(|entry| entry.pattern.contains("*.md"))
        .map(|entry| pattern_directory(&entry.pattern))
        .last()
}

fn pattern_directory(pattern: &str) -> PathBuf {
    let dir = pattern.replace("/*.md", "");
    if dir == "*.md" {
        PathBuf::from(".")
    } else {
        PathBuf::from(dir)
    }
}

/// Markdown directories of a site, resolved against its root
#[derive(Debug, Clone)]
pub struct SiteDirectories {
    posts: Option<PathBuf>,
    pages: Option<PathBuf>,
}

impl SiteDirectories {
    pub fn new(root: &Path, config: &SiteConfig) -> Self {
        SiteDirectories {
            posts: markdown_directory(&config.posts).map(|dir| root.join(dir)),
            pages: markdown_directory(&config.pages).map(|dir| root.join(dir)),
        }
    }
}

impl DirectoryResolver for SiteDirectories {
    fn posts_directory(&self) -> Option<PathBuf> {
        self.posts.clone()
    }

    fn pages_directory(&self) -> Option<PathBuf> {
        self.pages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.author, "admin");
        assert_eq!(config.template, DEFAULT_TEMPLATE);
        assert_eq!(markdown_directory(&config.posts), Some(PathBuf::from("posts")));
        assert_eq!(markdown_directory(&config.pages), Some(PathBuf::from("pages")));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.author = "sruegamer".to_string();

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = SiteConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_applies_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[[posts]]\npattern = \"blog/*.md\"\ndestination = \"blog\"\ntemplate = \"post.tmpl\"\n",
        )
        .unwrap();

        let config = SiteConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.author, "admin");
        assert_eq!(config.template, DEFAULT_TEMPLATE);
        assert_eq!(config.posts.len(), 1);
        assert!(config.pages.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        match SiteConfig::load_from_dir(temp.path()).unwrap_err() {
            ImportError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "posts = 3").unwrap();
        let err = SiteConfig::load_from_dir(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse site.toml"));
    }

    #[test]
    fn test_markdown_directory_requires_md_pattern() {
        let entries = vec![
            ContentEntry::new("posts/*.rst", "posts", "post.tmpl"),
            ContentEntry::new("posts/*.txt", "posts", "post.tmpl"),
        ];
        assert_eq!(markdown_directory(&entries), None);
        assert_eq!(markdown_directory(&[]), None);
    }

    #[test]
    fn test_markdown_directory_last_match_wins() {
        let entries = vec![
            ContentEntry::new("posts/*.md", "posts", "post.tmpl"),
            ContentEntry::new("posts/*.rst", "posts", "post.tmpl"),
            ContentEntry::new("blog/2020/*.md", "blog", "post.tmpl"),
        ];
        assert_eq!(
            markdown_directory(&entries),
            Some(PathBuf::from("blog/2020"))
        );
    }

    #[test]
    fn test_markdown_directory_bare_pattern() {
        let entries = vec![ContentEntry::new("*.md", "", "post.tmpl")];
        assert_eq!(markdown_directory(&entries), Some(PathBuf::from(".")));
    }

    #[test]
    fn test_site_directories_resolve_against_root() {
        let dirs = SiteDirectories::new(Path::new("/site"), &SiteConfig::default());
        assert_eq!(dirs.posts_directory(), Some(PathBuf::from("/site/posts")));
        assert_eq!(dirs.pages_directory(), Some(PathBuf::from("/site/pages")));
    }

    #[test]
    fn test_site_directories_missing_pages() {
        let mut config = SiteConfig::default();
        config.pages.clear();
        let dirs = SiteDirectories::new(Path::new("/site"), &config);
        assert!(dirs.posts_directory().is_some());
        assert!(dirs.pages_directory().is_none());
    }
}
