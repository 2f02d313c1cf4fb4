//! Application layer - Use cases and orchestration

pub mod import;
pub mod init;

pub use import::{ImportOptions, ImportService, ImportSummary};
