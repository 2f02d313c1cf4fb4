//! Colored terminal logging.
//!
//! ```ignore
//! log!("import"; "wrote {}", path.display());
//! ```
//!
//! Lines go to stderr so stdout only carries command results.

use colored::{ColoredString, Colorize};
use std::io::{stderr, Write};

/// Log a message with a colored module prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write one prefixed line to stderr.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let mut err = stderr().lock();
    writeln!(err, "{prefix} {message}").ok();
}

fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.bright_yellow().bold(),
        "init" => prefix.bright_blue().bold(),
        _ => prefix.bright_green().bold(),
    }
}
