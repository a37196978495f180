//! Aggregate statistics for numeric and text columns.

use super::classify::{is_missing, try_parse_number};
use super::infer::ColumnType;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Default number of most frequent values kept for text columns.
pub const DEFAULT_TOP_K: usize = 3;

/// Statistics for a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    /// Number of present values that parsed as numbers.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Number of distinct parsed values.
    pub unique: usize,
    /// Smallest parsed value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "non_finite")]
    pub min: Option<f64>,
    /// Largest parsed value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "non_finite")]
    pub max: Option<f64>,
    /// Arithmetic mean of parsed values, if any.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "non_finite")]
    pub mean: Option<f64>,
}

/// A frequent value of a text column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: String,
    pub count: usize,
}

/// Statistics for a text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of present values.
    pub count: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Number of distinct present values (exact string equality).
    pub unique: usize,
    /// Most frequent present values, most common first.
    pub top: Vec<TopValue>,
}

/// Statistics of one column, by inferred type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnStats {
    Number(NumericStats),
    Text(TextStats),
}

impl ColumnStats {
    /// The inferred column type.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Number(_) => ColumnType::Number,
            Self::Text(_) => ColumnType::Text,
        }
    }

    /// Number of missing values.
    pub fn missing(&self) -> usize {
        match self {
            Self::Number(s) => s.missing,
            Self::Text(s) => s.missing,
        }
    }

    /// Number of distinct present values.
    pub fn unique(&self) -> usize {
        match self {
            Self::Number(s) => s.unique,
            Self::Text(s) => s.unique,
        }
    }

    /// Number of values that contributed to the aggregates.
    pub fn count(&self) -> usize {
        match self {
            Self::Number(s) => s.count,
            Self::Text(s) => s.count,
        }
    }

    /// Numeric statistics, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&NumericStats> {
        match self {
            Self::Number(s) => Some(s),
            Self::Text(_) => None,
        }
    }

    /// Text statistics, if this is a text column.
    pub fn as_text(&self) -> Option<&TextStats> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

/// Serde adapter writing `inf`, `-inf` and `NaN` as strings.
///
/// JSON has no literal for non-finite numbers and `serde_json` would write
/// them as `null`, which reads back as "no value".
mod non_finite {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Label(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.is_finite() => serializer.serialize_some(v),
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Number(v)) => Ok(Some(v)),
            Some(Repr::Label(label)) => label
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid number '{label}'"))),
            None => Ok(None),
        }
    }
}

/// Compute statistics for a column along the path of its inferred type.
pub fn column_stats(values: &[Option<&str>], column_type: ColumnType, top_k: usize) -> ColumnStats {
    match column_type {
        ColumnType::Number => ColumnStats::Number(numeric_stats(values)),
        ColumnType::Text => ColumnStats::Text(text_stats(values, top_k)),
    }
}

/// Compute numeric statistics for a column.
///
/// Present values that fail to parse are left out of every aggregate
/// without being counted as missing.
pub fn numeric_stats(values: &[Option<&str>]) -> NumericStats {
    let mut nums = Vec::with_capacity(values.len());
    let mut missing = 0;

    for value in values {
        match *value {
            Some(raw) if !is_missing(Some(raw)) => {
                if let Some(n) = try_parse_number(raw) {
                    nums.push(n);
                }
            }
            _ => missing += 1,
        }
    }

    let count = nums.len();
    let unique = nums
        .iter()
        .map(|&n| canonical_bits(n))
        .collect::<HashSet<_>>()
        .len();

    let (min, max, mean) = if count == 0 {
        (None, None, None)
    } else {
        // NaN is skipped unless every value is NaN.
        let min = nums.iter().copied().reduce(f64::min);
        let max = nums.iter().copied().reduce(f64::max);
        let mean = nums.iter().sum::<f64>() / count as f64;
        (min, max, Some(mean))
    };

    NumericStats {
        count,
        missing,
        unique,
        min,
        max,
        mean,
    }
}

/// Bit pattern used to compare floats for distinctness.
///
/// `0.0` and `-0.0` compare equal, and every NaN counts as one value.
fn canonical_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

/// Compute text statistics for a column.
///
/// Present values are counted in their original form, untrimmed. Ties in
/// `top` keep the order in which values first appeared.
pub fn text_stats(values: &[Option<&str>], top_k: usize) -> TextStats {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut count = 0;

    for &raw in values.iter().filter(|v| !is_missing(**v)).flatten() {
        count += 1;
        match index.get(raw) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(raw, counts.len());
                counts.push((raw, 1));
            }
        }
    }

    let unique = counts.len();
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let top = counts
        .into_iter()
        .take(top_k)
        .map(|(value, count)| TopValue {
            value: value.to_string(),
            count,
        })
        .collect();

    TextStats {
        count,
        missing: values.len() - count,
        unique,
        top,
    }
}
