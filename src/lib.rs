//! ghost-import - Ghost blog export converter
//!
//! Converts a Ghost JSON export into templated markdown documents laid out
//! by publish date.

pub mod logger;

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ImportError;
