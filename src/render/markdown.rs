//! Markdown rendering of reports.

use super::group_thousands;
use crate::config::ColumnOrder;
use crate::profile::{ColumnReport, ColumnStats, Report};

/// Render a report as a Markdown document.
///
/// The summary table lists every column with its missing count and
/// percentage; detail tables follow for numeric and text columns.
pub fn report_to_markdown(report: &Report, order: ColumnOrder) -> String {
    let mut md = String::new();

    md.push_str("# CSV Profiling Report\n\n");
    md.push_str(&format!("- **Rows:** {}\n", group_thousands(report.row_count)));
    md.push_str(&format!("- **Columns:** {}\n\n", report.column_count));

    md.push_str("## Column Summary\n\n");
    if report.columns.is_empty() {
        md.push_str("_No data rows to profile._\n");
        return md;
    }

    let columns = ordered_columns(report, order);

    md.push_str("| Column | Type | Missing | Unique |\n");
    md.push_str("|--------|------|--------:|-------:|\n");
    for col in &columns {
        let missing_pct = if report.row_count == 0 {
            0.0
        } else {
            col.missing() as f64 / report.row_count as f64 * 100.0
        };
        md.push_str(&format!(
            "| {} | {} | {} ({:.1}%) | {} |\n",
            escape_cell(&col.name),
            col.column_type(),
            col.missing(),
            missing_pct,
            col.unique()
        ));
    }

    let numeric: Vec<&ColumnReport> = columns
        .iter()
        .copied()
        .filter(|c| matches!(c.stats, ColumnStats::Number(_)))
        .collect();
    if !numeric.is_empty() {
        md.push_str("\n## Numeric Columns\n\n");
        md.push_str("| Column | Count | Min | Max | Mean |\n");
        md.push_str("|--------|------:|----:|----:|-----:|\n");
        for col in numeric {
            if let ColumnStats::Number(stats) = &col.stats {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    escape_cell(&col.name),
                    stats.count,
                    format_opt(stats.min, |v| format!("{v}")),
                    format_opt(stats.max, |v| format!("{v}")),
                    format_opt(stats.mean, |v| format!("{v:.2}")),
                ));
            }
        }
    }

    let text: Vec<&ColumnReport> = columns
        .iter()
        .copied()
        .filter(|c| matches!(c.stats, ColumnStats::Text(_)))
        .collect();
    if !text.is_empty() {
        md.push_str("\n## Text Columns\n\n");
        md.push_str("| Column | Count | Top Values |\n");
        md.push_str("|--------|------:|------------|\n");
        for col in text {
            if let ColumnStats::Text(stats) = &col.stats {
                let top = if stats.top.is_empty() {
                    "-".to_string()
                } else {
                    stats
                        .top
                        .iter()
                        .map(|t| format!("{} ({})", escape_cell(&t.value), t.count))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    escape_cell(&col.name),
                    stats.count,
                    top
                ));
            }
        }
    }

    md
}

/// Columns in the requested display order.
fn ordered_columns(report: &Report, order: ColumnOrder) -> Vec<&ColumnReport> {
    let mut columns: Vec<&ColumnReport> = report.columns.iter().collect();
    if order == ColumnOrder::Missing {
        columns.sort_by(|a, b| {
            b.missing()
                .cmp(&a.missing())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
    columns
}

fn format_opt(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "-".to_string())
}

/// Keep cell text from breaking the table layout.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
