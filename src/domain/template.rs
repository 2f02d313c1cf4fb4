//! Template system for imported documents

use crate::domain::post::OutputPost;
use crate::error::{ImportError, Result};
use chrono::{DateTime, FixedOffset, Timelike};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Name of the built-in document template
pub const DEFAULT_TEMPLATE: &str = "nikola_document.tmpl";

const NIKOLA_DOCUMENT_TEMPLATE: &str = "<!--\n\
.. title: {{ post.title }}\n\
.. slug: {{ post.slug }}\n\
.. date: {{ post.published }}\n\
.. tags: {{ post.tags }}\n\
.. author: {{ post.author }}\n\
.. link:\n\
.. description:\n\
.. type: text\n\
-->\n\
\n\
{{ post.markdown }}\n";

/// Renders an output post through a named template
pub trait TemplateRenderer {
    fn render(&self, template_name: &str, post: &OutputPost) -> Result<String>;
}

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{\s*post\.([a-z_]+)\s*\}\}").unwrap())
}

/// Document template with `{{ post.<field> }}` placeholders
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create template from built-in template name
    pub fn from_builtin(template_name: &str) -> Result<Self> {
        let content = match template_name {
            DEFAULT_TEMPLATE => NIKOLA_DOCUMENT_TEMPLATE,
            _ => {
                return Err(ImportError::Template(format!(
                    "Unknown template: {}",
                    template_name
                )))
            }
        };

        Ok(Template {
            content: content.to_string(),
        })
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ImportError::Template(format!("Failed to read template file: {}", e)))?;

        Ok(Template { content })
    }

    /// Substitute post fields. Unknown placeholders are left unchanged.
    pub fn render(&self, post: &OutputPost) -> String {
        placeholder_regex()
            .replace_all(&self.content, |caps: &Captures| {
                field_value(post, &caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

fn field_value(post: &OutputPost, field: &str) -> Option<String> {
    let value = match field {
        "title" => post.title.clone(),
        "slug" => post.slug.clone(),
        "markdown" => post.markdown.clone(),
        "author" => post.author.clone(),
        "tags" => post.tags.clone(),
        "published" => format_published(&post.published),
        _ => return None,
    };
    Some(value)
}

/// `YYYY-MM-DD HH:MM:SS[.ffffff]+HH:MM`; microseconds only when non-zero
fn format_published(published: &DateTime<FixedOffset>) -> String {
    let format = if published.nanosecond() == 0 {
        "%Y-%m-%d %H:%M:%S%:z"
    } else {
        "%Y-%m-%d %H:%M:%S%.6f%:z"
    };
    published.format(format).to_string()
}

/// Load template from `<site_root>/templates` or fall back to built-in
pub fn load_template(site_root: &Path, template_name: &str) -> Result<Template> {
    let custom_path = site_root.join("templates").join(template_name);

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Template::from_builtin(template_name)
    }
}
