//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{FileSystemSite, SiteRepository};
use crate::log;
use std::path::Path;

/// Write a default site.toml at the specified path.
pub fn init(path: &Path) -> Result<()> {
    let site = FileSystemSite::new(path.to_path_buf());
    site.initialize()?;

    log!("init"; "created site.toml in {}", path.display());

    Ok(())
}
