//! Column profiling: missing-value classification, type inference and
//! aggregate statistics.

mod classify;
mod format;
mod infer;
mod report;
mod stats;

pub use classify::{is_missing, try_parse_number, MISSING_TOKENS};
pub use format::group_thousands;
pub use infer::{infer_type, infer_type_or, ColumnType};
pub use report::{
    build_report, build_report_with, to_profile, ColumnProfile, ColumnReport, Profile, Report,
};
pub use stats::{
    column_stats, numeric_stats, text_stats, ColumnStats, NumericStats, TextStats, TopValue,
    DEFAULT_TOP_K,
};
