//! Infrastructure layer - Site configuration and file output

pub mod config;
pub mod site;

pub use config::{markdown_directory, ContentEntry, DirectoryResolver, SiteConfig, SiteDirectories};
pub use site::{write_post, FileSystemSite, SiteRepository, SiteTemplates};
