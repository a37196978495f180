//! JSON serialization of reports.

use crate::error::Result;
use crate::profile::{Profile, Report};

/// Render a full report as pretty-printed JSON.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render a column summary as pretty-printed JSON.
pub fn profile_to_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Table;
    use crate::profile::build_report;

    #[test]
    fn test_report_to_json() {
        let table = Table::from_csv_str("n,s\n1,x\n2,é\n", b',').unwrap();
        let json = report_to_json(&build_report(&table)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["row_count"], 2);
        assert_eq!(value["columns"][0]["mean"], 1.5);
        // Non-ASCII text is written as-is, not escaped.
        assert!(json.contains("é"));
    }

    #[test]
    fn test_report_json_parses_back() {
        let table = Table::from_csv_str("n,s\n1,x\n,y\n", b',').unwrap();
        let report = build_report(&table);
        let json = report_to_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_report_json_keeps_infinity() {
        let table = Table::from_csv_str("x,y\n1,NA\ninf,\n", b',').unwrap();
        let report = build_report(&table);
        let json = report_to_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["columns"][0]["max"], "inf");
        assert_eq!(value["columns"][0]["min"], 1.0);
        assert!(value["columns"][1].get("max").is_none());

        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_profile_to_json() {
        let table = Table::from_csv_str("n\n1\nNA\n", b',').unwrap();
        let profile = build_report(&table).to_profile();
        let value: serde_json::Value =
            serde_json::from_str(&profile_to_json(&profile).unwrap()).unwrap();
        assert_eq!(value["n_rows"], 2);
        assert_eq!(value["columns"][0]["type"], "number");
        assert_eq!(value["columns"][0]["missing_pct"], 50.0);
    }
}
