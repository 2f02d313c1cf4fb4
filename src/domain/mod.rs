//! Domain layer - Export records, tag joins and document rendering

pub mod date;
pub mod export;
pub mod post;
pub mod tags;
pub mod template;

pub use date::{parse_export_date, ExportDate};
pub use export::{load_export, ExportData, PostTagLink, RecordId, SourcePost, Tag};
pub use post::{to_output_post, OutputPost, PostStatus};
pub use tags::{build_tag_index, linked_tag_ids, TagIndex, TagInfo};
pub use template::{load_template, Template, TemplateRenderer, DEFAULT_TEMPLATE};
