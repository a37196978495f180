//! Report assembly: per-column statistics for a whole table.

use super::format::group_thousands;
use super::infer::{infer_type_or, ColumnType};
use super::stats::{column_stats, ColumnStats};
use crate::config::ProfileConfig;
use crate::data::Table;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Statistics for a single named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Column name from the header.
    pub name: String,
    /// Type-specific statistics, serialized inline with a `type` tag.
    #[serde(flatten)]
    pub stats: ColumnStats,
}

impl ColumnReport {
    /// The inferred column type.
    pub fn column_type(&self) -> ColumnType {
        self.stats.column_type()
    }

    /// Number of missing values.
    pub fn missing(&self) -> usize {
        self.stats.missing()
    }

    /// Number of distinct present values.
    pub fn unique(&self) -> usize {
        self.stats.unique()
    }
}

/// Full profiling result for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Number of data rows profiled.
    pub row_count: usize,
    /// Number of profiled columns.
    pub column_count: usize,
    /// Column statistics in header order.
    pub columns: Vec<ColumnReport>,
}

impl Report {
    /// Report for a table without rows.
    pub fn empty() -> Self {
        Self {
            row_count: 0,
            column_count: 0,
            columns: Vec::new(),
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Project into the lighter summary shape.
    pub fn to_profile(&self) -> Profile {
        to_profile(self)
    }
}

/// Profile a table with the default configuration.
pub fn build_report(table: &Table) -> Report {
    build_report_with(table, &ProfileConfig::default())
}

/// Profile a table.
///
/// A table without rows yields an empty report: with no rows there is nothing
/// to derive columns from. Absent cells count as missing values.
pub fn build_report_with(table: &Table, config: &ProfileConfig) -> Report {
    if table.is_empty() {
        debug!("table has no rows, returning empty report");
        return Report::empty();
    }

    let columns: Vec<ColumnReport> = table
        .column_names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values = table.column_at(idx);
            let column_type = infer_type_or(&values, config.empty_column_type);
            let stats = column_stats(&values, column_type, config.top_k);
            debug!(
                column = %name,
                column_type = %column_type,
                missing = stats.missing(),
                unique = stats.unique(),
                "profiled column"
            );
            ColumnReport {
                name: name.clone(),
                stats,
            }
        })
        .collect();

    info!(
        rows = table.row_count(),
        columns = columns.len(),
        "built report"
    );

    Report {
        row_count: table.row_count(),
        column_count: columns.len(),
        columns,
    }
}

/// Summary of one column for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Number of values in the column (the table's row count).
    pub total: usize,
    pub missing: usize,
    /// Missing values as a percentage of `total`; 0 for an empty column.
    pub missing_pct: f64,
    pub unique: usize,
}

impl ColumnProfile {
    /// Create a column summary, deriving the missing percentage.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        total: usize,
        missing: usize,
        unique: usize,
    ) -> Self {
        let missing_pct = if total == 0 {
            0.0
        } else {
            missing as f64 / total as f64 * 100.0
        };
        Self {
            name: name.into(),
            column_type,
            total,
            missing,
            missing_pct,
            unique,
        }
    }
}

/// Lossy summary of a [`Report`]: type, missing and unique counts only.
///
/// This is a view for display. Renderers that need numeric or frequency
/// details read the [`Report`] directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnProfile>,
}

/// Project a report into a [`Profile`], keeping column order.
pub fn to_profile(report: &Report) -> Profile {
    let columns: Vec<ColumnProfile> = report
        .columns
        .iter()
        .map(|c| {
            ColumnProfile::new(
                c.name.clone(),
                c.column_type(),
                report.row_count,
                c.missing(),
                c.unique(),
            )
        })
        .collect();

    Profile {
        n_rows: report.row_count,
        n_cols: columns.len(),
        columns,
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "PROFILE SUMMARY")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Rows: {}", group_thousands(self.n_rows))?;
        writeln!(f, "Columns: {}", self.n_cols)?;
        writeln!(f)?;
        writeln!(f, "COLUMN DETAILS")?;
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "{:<15} {:<10} {:<15} {:<10}", "Column", "Type", "Missing", "Unique")?;
        writeln!(f, "{}", "-".repeat(60))?;
        for col in &self.columns {
            let missing = format!("{} ({:.1}%)", col.missing, col.missing_pct);
            writeln!(
                f,
                "{:<15} {:<10} {:<15} {}",
                col.name,
                col.column_type.name(),
                missing,
                col.unique
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_csv_str(
            "id,city,score,notes\n\
             1,Paris,3.5,\n\
             2,Lyon,NA,n/a\n\
             3,Paris,4,null\n\
             4,,5,None\n",
            b',',
        )
        .unwrap()
    }

    #[test]
    fn test_build_report_shape() {
        let report = build_report(&sample_table());
        assert_eq!(report.row_count, 4);
        assert_eq!(report.column_count, 4);
        let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "city", "score", "notes"]);
    }

    #[test]
    fn test_build_report_types() {
        let report = build_report(&sample_table());
        assert_eq!(report.column("id").unwrap().column_type(), ColumnType::Number);
        assert_eq!(report.column("city").unwrap().column_type(), ColumnType::Text);
        assert_eq!(report.column("score").unwrap().column_type(), ColumnType::Number);
        assert_eq!(report.column("notes").unwrap().column_type(), ColumnType::Text);
    }

    #[test]
    fn test_all_missing_column() {
        let report = build_report(&sample_table());
        let notes = report.column("notes").unwrap();
        assert_eq!(notes.missing(), 4);
        assert_eq!(notes.unique(), 0);
        assert!(notes.stats.as_text().unwrap().top.is_empty());
    }

    #[test]
    fn test_empty_column_type_configurable() {
        let config = ProfileConfig::default().with_empty_column_type(ColumnType::Number);
        let report = build_report_with(&sample_table(), &config);
        let notes = report.column("notes").unwrap();
        assert_eq!(notes.column_type(), ColumnType::Number);
        assert_eq!(notes.stats.as_numeric().unwrap().mean, None);
    }

    #[test]
    fn test_top_k_from_config() {
        let config = ProfileConfig::default().with_top_k(1);
        let report = build_report_with(&sample_table(), &config);
        let top = &report.column("city").unwrap().stats.as_text().unwrap().top;
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].value, "Paris");
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_zero_rows() {
        let table = Table::from_csv_str("a,b\n", b',').unwrap();
        let report = build_report(&table);
        assert_eq!(report, Report::empty());
    }

    #[test]
    fn test_to_profile() {
        let report = build_report(&sample_table());
        let profile = to_profile(&report);

        assert_eq!(profile.n_rows, 4);
        assert_eq!(profile.n_cols, 4);
        let score = &profile.columns[2];
        assert_eq!(score.name, "score");
        assert_eq!(score.column_type, ColumnType::Number);
        assert_eq!(score.total, 4);
        assert_eq!(score.missing, 1);
        assert!((score.missing_pct - 25.0).abs() < 1e-10);
        assert_eq!(score.unique, 3);
    }

    #[test]
    fn test_missing_pct_zero_total() {
        let column = ColumnProfile::new("x", ColumnType::Text, 0, 0, 0);
        assert_eq!(column.missing_pct, 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&sample_table());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["row_count"], 4);
        let score = &json["columns"][2];
        assert_eq!(score["name"], "score");
        assert_eq!(score["type"], "number");
        assert_eq!(score["count"], 3);
        assert_eq!(score["max"], 5.0);

        let city = &json["columns"][1];
        assert_eq!(city["type"], "text");
        assert_eq!(city["top"][0]["value"], "Paris");
    }

    #[test]
    fn test_profile_display() {
        let profile = build_report(&sample_table()).to_profile();
        let text = profile.to_string();
        assert!(text.contains("PROFILE SUMMARY"));
        assert!(text.contains("Rows: 4"));
        assert!(text.contains("25.0%"));
    }
}
