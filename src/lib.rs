//! CSV Profiling Library
//!
//! This library computes per-column statistical profiles of tabular text data
//! and renders them as JSON, YAML or Markdown reports.
//!
//! # Overview
//!
//! The library is organized into modules:
//!
//! - **data**: The in-memory [`Table`](data::Table) and CSV loading
//! - **profile**: Missing-value classification, type inference, column
//!   statistics and report assembly
//! - **render**: JSON, YAML and Markdown renderers for reports
//! - **config**: Profiling settings loaded from YAML
//!
//! Profiling is a pure function of the table: [`build_report`](profile::build_report)
//! never fails and never modifies its input.
//!
//! # Example
//!
//! ```
//! use csv_profiler::prelude::*;
//!
//! let table = Table::from_csv_str("name,score\nAda,3.5\nBob,NA\nAda,4\n", b',').unwrap();
//! let report = build_report(&table);
//!
//! assert_eq!(report.row_count, 3);
//! let score = report.column("score").unwrap();
//! assert_eq!(score.column_type(), ColumnType::Number);
//! assert_eq!(score.missing(), 1);
//!
//! let markdown = report_to_markdown(&report, ColumnOrder::Missing);
//! assert!(markdown.contains("| score | number | 1 (33.3%) | 2 |"));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod profile;
pub mod render;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ColumnOrder, ProfileConfig};
    pub use crate::data::{Cell, Table};
    pub use crate::error::{ProfilerError, Result};
    pub use crate::profile::{
        build_report, build_report_with, column_stats, infer_type, infer_type_or, is_missing,
        numeric_stats, text_stats, to_profile, try_parse_number, ColumnProfile, ColumnReport,
        ColumnStats, ColumnType, NumericStats, Profile, Report, TextStats, TopValue,
        DEFAULT_TOP_K, MISSING_TOKENS,
    };
    pub use crate::render::{
        profile_to_json, report_to_json, report_to_markdown, report_to_yaml,
    };
}
