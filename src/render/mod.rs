//! Report renderers: JSON, YAML and Markdown documents.

pub mod json;
pub mod markdown;
pub mod yaml;

pub use crate::profile::group_thousands;
pub use json::{profile_to_json, report_to_json};
pub use markdown::report_to_markdown;
pub use yaml::report_to_yaml;
