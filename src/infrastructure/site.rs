//! File system site: discovery, templates and post output

use crate::domain::{load_template, OutputPost, TemplateRenderer};
use crate::error::{ImportError, Result};
use crate::infrastructure::config::{SiteConfig, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the site root
pub const ROOT_ENV: &str = "GHOST_IMPORT_ROOT";

/// Abstract site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from site.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to site.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if site.toml exists
    fn is_initialized(&self) -> bool;

    /// Create the site directory and a default site.toml
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemSite {
    pub root: PathBuf,
}

impl FileSystemSite {
    pub fn new(root: PathBuf) -> Self {
        FileSystemSite { root }
    }

    /// Discover the site root.
    /// First checks GHOST_IMPORT_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemSite::new(path));
            } else {
                return Err(ImportError::Config(format!(
                    "{} is set to '{}' but no {} found there. \
                    Run 'ghost-import init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    CONFIG_FILE,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemSite::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ImportError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl SiteRepository for FileSystemSite {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(ImportError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        self.save_config(&SiteConfig::default())
    }
}

/// Renders posts with templates from `<root>/templates`, falling back to
/// the built-in ones
#[derive(Debug, Clone)]
pub struct SiteTemplates {
    root: PathBuf,
}

impl SiteTemplates {
    pub fn new(root: PathBuf) -> Self {
        SiteTemplates { root }
    }
}

impl TemplateRenderer for SiteTemplates {
    fn render(&self, template_name: &str, post: &OutputPost) -> Result<String> {
        let template = load_template(&self.root, template_name)?;
        Ok(template.render(post))
    }
}

/// Write a rendered post to `posts_dir/year/month/day/slug.md`.
///
/// Creates missing directories and overwrites an existing file.
pub fn write_post(post: &OutputPost, rendered: &str, posts_dir: &Path) -> Result<PathBuf> {
    let path = posts_dir.join(post.relative_path());

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, rendered.as_bytes())?;
    Ok(path)
}
