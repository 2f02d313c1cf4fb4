//! Import use case
//!
//! Turns a Ghost export into dated markdown documents below the posts
//! directory.

use crate::domain::{
    build_tag_index, load_export, to_output_post, ExportData, OutputPost, TemplateRenderer,
    DEFAULT_TEMPLATE,
};
use crate::error::{ImportError, Result};
use crate::infrastructure::{write_post, DirectoryResolver, SiteConfig};
use crate::log;
use std::path::{Path, PathBuf};

/// Per-run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Author written into every post
    pub author: String,

    /// Template posts are rendered with
    pub template: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            author: "admin".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl From<&SiteConfig> for ImportOptions {
    fn from(config: &SiteConfig) -> Self {
        ImportOptions {
            author: config.author.clone(),
            template: config.template.clone(),
        }
    }
}

/// Files written by an import, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub written: Vec<PathBuf>,
}

impl ImportSummary {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Service for importing a Ghost export
pub struct ImportService<D, R> {
    directories: D,
    renderer: R,
    options: ImportOptions,
}

impl<D: DirectoryResolver, R: TemplateRenderer> ImportService<D, R> {
    pub fn new(directories: D, renderer: R, options: ImportOptions) -> Self {
        ImportService {
            directories,
            renderer,
            options,
        }
    }

    /// Import the export at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No markdown directory is configured for posts or pages
    /// - The export file does not exist
    /// - The export is not valid JSON, or a post date cannot be parsed
    /// - A template cannot be loaded or a file cannot be written
    ///
    /// An export without a complete `data` block imports nothing.
    pub fn run(&self, path: &Path) -> Result<ImportSummary> {
        let (Some(posts_dir), Some(_pages_dir)) = (
            self.directories.posts_directory(),
            self.directories.pages_directory(),
        ) else {
            return Err(ImportError::MissingMarkdownDirectory);
        };

        if !path.exists() {
            return Err(ImportError::MissingInput(path.to_path_buf()));
        }

        let Some(export) = load_export(path)? else {
            log!("import"; "no posts, tags and posts_tags tables in {}", path.display());
            return Ok(ImportSummary::default());
        };

        let posts = self.collect_posts(&export)?;

        let mut summary = ImportSummary::default();
        for post in &posts {
            let rendered = self.renderer.render(&self.options.template, post)?;
            let written = write_post(post, &rendered, &posts_dir)?;
            log!("import"; "{}", written.display());
            summary.written.push(written);
        }

        Ok(summary)
    }

    /// Build output records for every published or draft post.
    pub fn collect_posts(&self, export: &ExportData) -> Result<Vec<OutputPost>> {
        let tag_index = build_tag_index(&export.tags);

        let mut posts = Vec::new();
        for source in &export.posts {
            match to_output_post(source, &tag_index, &export.posts_tags, &self.options.author)? {
                Some(post) => posts.push(post),
                None if source.is_page() => {
                    log!("import"; "skipping page '{}'", source.display_name());
                }
                None => {
                    log!("warn"; "skipping '{}' with status '{}'", source.display_name(), source.status());
                }
            }
        }

        Ok(posts)
    }
}
