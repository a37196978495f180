//! Tabular input data.

mod table;

pub use table::{Cell, Table};
