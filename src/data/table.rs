//! In-memory table of raw CSV cells.

use crate::error::{ProfilerError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// A raw cell value. `None` marks a cell the source never provided.
pub type Cell = Option<String>;

/// An immutable table of raw string cells.
///
/// The column list is fixed once (from the CSV header, or from the keys of the
/// first record) and every row is an array of cells aligned to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names in header order.
    columns: Vec<String>,
    /// Rows of cells, each exactly `columns.len()` long.
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from a column list and rows of cells.
    ///
    /// Rows shorter than the column list are padded with absent cells.
    /// Rows longer than the column list are rejected.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = columns.len();
        let mut aligned = Vec::with_capacity(rows.len());
        for (row_idx, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(ProfilerError::DimensionMismatch {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            row.resize(width, None);
            aligned.push(row);
        }
        Ok(Self {
            columns,
            rows: aligned,
        })
    }

    /// Build a table from mapping-shaped records.
    ///
    /// Columns are the keys of the first record, in that record's order.
    /// Later records are aligned by key: a key they lack becomes an absent
    /// cell, and keys the first record did not have are ignored.
    pub fn from_records<I, R, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut records = records.into_iter();
        let Some(first) = records.next() else {
            return Self::default();
        };

        let mut columns = Vec::new();
        let mut first_row = Vec::new();
        for (key, value) in first {
            columns.push(key.into());
            first_row.push(value.map(Into::into));
        }

        let mut rows = vec![first_row];
        for record in records {
            let mut row: Vec<Cell> = vec![None; columns.len()];
            for (key, value) in record {
                let key = key.into();
                if let Some(idx) = columns.iter().position(|c| *c == key) {
                    row[idx] = value.map(Into::into);
                }
            }
            rows.push(row);
        }

        Self { columns, rows }
    }

    /// Load a table from a delimited text file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_csv_reader(BufReader::new(file), delimiter)?;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse a table from delimited text held in memory.
    pub fn from_csv_str(text: &str, delimiter: u8) -> Result<Self> {
        Self::from_csv_reader(text.as_bytes(), delimiter)
    }

    /// Parse a table from any reader of UTF-8 delimited text.
    ///
    /// The first record is the header. Records may be ragged: missing
    /// trailing fields become absent cells and surplus fields are dropped.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() > width {
                warn!(
                    row = row_idx,
                    extra = record.len() - width,
                    "dropping fields beyond the header"
                );
            }
            let mut row: Vec<Cell> = record
                .iter()
                .take(width)
                .map(|field| Some(field.to_string()))
                .collect();
            row.resize(width, None);
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Number of data rows (the header is not counted).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in header order.
    #[inline]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Check if the table has no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Raw values of one column by index, in row order.
    pub fn column_at(&self, idx: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(idx).and_then(|cell| cell.as_deref()))
            .collect()
    }

    /// Raw values of one column by name, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        self.column_index(name).map(|idx| self.column_at(idx))
    }
}
