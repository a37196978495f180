//! Column type inference.

use super::classify::{is_missing, try_parse_number};
use serde::{Deserialize, Serialize};

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every present value parses as a float.
    Number,
    /// At least one present value is not numeric.
    #[default]
    Text,
}

impl ColumnType {
    /// Get the descriptive name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the type of a column, treating all-missing columns as text.
pub fn infer_type(values: &[Option<&str>]) -> ColumnType {
    infer_type_or(values, ColumnType::Text)
}

/// Infer the type of a column.
///
/// Missing values are ignored. A column with no present values gets
/// `empty_default`; otherwise it is [`ColumnType::Number`] only if every
/// present value parses as a number.
pub fn infer_type_or(values: &[Option<&str>], empty_default: ColumnType) -> ColumnType {
    let mut present = values.iter().filter(|v| !is_missing(**v)).flatten().peekable();

    if present.peek().is_none() {
        return empty_default;
    }

    if present.all(|v| try_parse_number(v).is_some()) {
        ColumnType::Number
    } else {
        ColumnType::Text
    }
}
