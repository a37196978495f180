//! Profiling configuration, loadable from YAML.

use crate::error::{ProfilerError, Result};
use crate::profile::{ColumnType, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order of columns in the Markdown summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnOrder {
    /// Most missing values first, ties by column name.
    #[default]
    Missing,
    /// Header order.
    Original,
}

/// Settings for a profiling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Number of most frequent values reported for text columns.
    pub top_k: usize,
    /// Type given to columns with no present values.
    pub empty_column_type: ColumnType,
    /// Field delimiter of the input file.
    pub delimiter: char,
    /// Column order used by the Markdown renderer.
    pub column_order: ColumnOrder,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            empty_column_type: ColumnType::Text,
            delimiter: ',',
            column_order: ColumnOrder::Missing,
        }
    }
}

impl ProfileConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ProfilerError::from)
    }

    /// Check that the settings can be used.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte().map(|_| ())
    }

    /// The delimiter as the single byte the CSV reader expects.
    ///
    /// The quote character and line terminators are reserved by the reader.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter {
            '"' | '\n' | '\r' => Err(ProfilerError::InvalidParameter(format!(
                "delimiter {:?} is reserved by the CSV format",
                self.delimiter
            ))),
            d if d.is_ascii() => Ok(d as u8),
            d => Err(ProfilerError::InvalidParameter(format!(
                "delimiter must be a single ASCII character, got '{}'",
                d
            ))),
        }
    }

    /// Set the number of top values kept for text columns.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the type given to columns with no present values.
    pub fn with_empty_column_type(mut self, column_type: ColumnType) -> Self {
        self.empty_column_type = column_type;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the Markdown column order.
    pub fn with_column_order(mut self, order: ColumnOrder) -> Self {
        self.column_order = order;
        self
    }
}
