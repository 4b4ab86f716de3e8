use std::{fmt, io};

use thiserror::Error;

/// Errors that can occur while building or rendering a table
#[derive(Debug, Error)]
pub enum TableError {
    /// Region end lies before its start
    #[error(
        "invalid region: rows {start_row}..={end_row}, columns {start_col}..={end_col}"
    )]
    InvalidRegion {
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    },
    /// Column outline requested on a table without rows
    #[error("table has no rows to outline")]
    NoRows,
    /// Row outline requested on a table without columns
    #[error("table has no columns to outline")]
    NoColumns,
    /// Custom glyph theme could not be parsed
    #[error("invalid border theme: {0}")]
    InvalidTheme(String),
    /// Character sink rejected a write
    #[error("failed to write table output")]
    Fmt(#[from] fmt::Error),
    /// Byte sink rejected a write
    #[error(transparent)]
    Io(#[from] io::Error),
}
