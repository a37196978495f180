//! YAML serialization of reports.

use crate::error::Result;
use crate::profile::Report;

/// Render a full report as YAML.
pub fn report_to_yaml(report: &Report) -> Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Table;
    use crate::profile::build_report;

    #[test]
    fn test_report_to_yaml() {
        let table = Table::from_csv_str("city\nOslo\nOslo\nRome\n", b',').unwrap();
        let yaml = report_to_yaml(&build_report(&table)).unwrap();
        assert!(yaml.contains("row_count: 3"));
        assert!(yaml.contains("type: text"));
        assert!(yaml.contains("value: Oslo"));
    }
}
