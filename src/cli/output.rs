//! Output formatting utilities

use crate::application::ImportSummary;

/// Final line of an import run
pub fn format_import_summary(summary: &ImportSummary) -> String {
    format!("Imported {} posts", summary.count())
}
