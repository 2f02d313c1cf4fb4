//! Error types for ghost-import

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ghost-import
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{0} does not exist!")]
    MissingInput(PathBuf),

    #[error("You need to configure a markdown directory for your pages and posts")]
    MissingMarkdownDirectory,

    #[error("No site.toml found in {0} or any parent directory")]
    NotSiteDirectory(PathBuf),

    #[error("Invalid date in post '{post}': {value}")]
    InvalidDate { post: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ImportError {
    /// Get the exit code for this error.
    ///
    /// A missing input file and an unconfigured markdown directory are
    /// reported to the user and the run ends normally.
    pub fn exit_code(&self) -> i32 {
        match self {
            ImportError::MissingInput(_) | ImportError::MissingMarkdownDirectory => 0,
            ImportError::NotSiteDirectory(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ImportError::MissingMarkdownDirectory => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Add a [[posts]] entry with a pattern like \"posts/*.md\" to site.toml\n\
                    • Add a [[pages]] entry with a pattern like \"pages/*.md\" to site.toml",
                    self
                )
            }
            ImportError::NotSiteDirectory(path) => {
                format!(
                    "No site.toml found in {} or any parent directory\n\n\
                    Suggestions:\n\
                    • Run 'ghost-import init' to create a default site.toml\n\
                    • Navigate to an existing site directory\n\
                    • Set GHOST_IMPORT_ROOT environment variable to your site path",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ImportError
pub type Result<T> = std::result::Result<T, ImportError>;
