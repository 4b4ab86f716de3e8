//! Sparse, auto-growing table storage and region outlining

use std::collections::HashMap;

use log::debug;

use crate::error::TableError;
use crate::types::{Cell, CellBorder, CellConfig, ColConfig, OutlineMode, RowConfig};

static EMPTY_CELL: Cell = Cell {
    value: String::new(),
    config: CellConfig::DEFAULT,
};

/// Sparse grid of cells with per-row and per-column sizing.
///
/// `row_count`/`col_count` track the known extent and only ever grow: any
/// `*_mut` accessor at a larger index extends them. Read accessors never
/// grow the table and yield defaults for positions that were never written.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cells: HashMap<(usize, usize), Cell>,
    row_configs: HashMap<usize, RowConfig>,
    col_configs: HashMap<usize, ColConfig>,
    row_count: usize,
    col_count: usize,
}

impl Table {
    /// Create a table with an initial known extent
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            row_count,
            col_count,
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Cell at the coordinate, created on first access
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        self.row_count = self.row_count.max(row.saturating_add(1));
        self.col_count = self.col_count.max(col.saturating_add(1));
        self.cells.entry((row, col)).or_default()
    }

    /// Stored cell at the coordinate, if it was ever written
    pub fn try_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Cell at the coordinate, or an empty default one
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.try_cell(row, col).unwrap_or(&EMPTY_CELL)
    }

    /// Row sizing, created on first access
    pub fn row_config_mut(&mut self, row: usize) -> &mut RowConfig {
        self.row_count = self.row_count.max(row.saturating_add(1));
        self.row_configs.entry(row).or_default()
    }

    pub fn try_row_config(&self, row: usize) -> Option<&RowConfig> {
        self.row_configs.get(&row)
    }

    /// Row sizing, or the default when never written
    pub fn row_config(&self, row: usize) -> &RowConfig {
        self.try_row_config(row).unwrap_or(&RowConfig::DEFAULT)
    }

    /// Column sizing, created on first access
    pub fn col_config_mut(&mut self, col: usize) -> &mut ColConfig {
        self.col_count = self.col_count.max(col.saturating_add(1));
        self.col_configs.entry(col).or_default()
    }

    pub fn try_col_config(&self, col: usize) -> Option<&ColConfig> {
        self.col_configs.get(&col)
    }

    /// Column sizing, or the default when never written
    pub fn col_config(&self, col: usize) -> &ColConfig {
        self.try_col_config(col).unwrap_or(&ColConfig::DEFAULT)
    }

    /// Write `values` into consecutive cells of `row`, starting at column 0
    pub fn set_row<I>(&mut self, row: usize, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for (col, value) in values.into_iter().enumerate() {
            self.cell_mut(row, col).set_value(value);
        }
    }

    /// Write `values` into consecutive cells of `col`, starting at row 0
    pub fn set_column<I>(&mut self, col: usize, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for (row, value) in values.into_iter().enumerate() {
            self.cell_mut(row, col).set_value(value);
        }
    }

    /// Draw a rectangular outline around the closed region
    /// `[start_row..=end_row] x [start_col..=end_col]`.
    ///
    /// Each cell gets the sides of the rectangle it lies on. `mode` decides
    /// whether those replace or join the cell's existing border flags.
    pub fn outline_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        mode: OutlineMode,
    ) -> Result<(), TableError> {
        if end_row < start_row || end_col < start_col {
            return Err(TableError::InvalidRegion {
                start_row,
                start_col,
                end_row,
                end_col,
            });
        }

        debug!(
            "outline rows {}..={} cols {}..={} ({:?})",
            start_row, end_row, start_col, end_col, mode
        );

        for row in start_row..=end_row {
            for col in start_col..=end_col {
                let mut border = CellBorder::NONE;
                if row == start_row {
                    border |= CellBorder::TOP;
                }
                if col == start_col {
                    border |= CellBorder::LEFT;
                }
                if row == end_row {
                    border |= CellBorder::BOTTOM;
                }
                if col == end_col {
                    border |= CellBorder::RIGHT;
                }
                self.cell_mut(row, col).config.apply_border(border, mode);
            }
        }
        Ok(())
    }

    /// Outline rows `start..=end` across every known column
    pub fn outline_rows(
        &mut self,
        start: usize,
        end: usize,
        mode: OutlineMode,
    ) -> Result<(), TableError> {
        let last_col = self.col_count.checked_sub(1).ok_or(TableError::NoColumns)?;
        self.outline_region(start, 0, end, last_col, mode)
    }

    /// Outline columns `start..=end` across every known row
    pub fn outline_cols(
        &mut self,
        start: usize,
        end: usize,
        mode: OutlineMode,
    ) -> Result<(), TableError> {
        let last_row = self.row_count.checked_sub(1).ok_or(TableError::NoRows)?;
        self.outline_region(0, start, last_row, end, mode)
    }

    pub fn outline_row(&mut self, row: usize, mode: OutlineMode) -> Result<(), TableError> {
        self.outline_rows(row, row, mode)
    }

    pub fn outline_col(&mut self, col: usize, mode: OutlineMode) -> Result<(), TableError> {
        self.outline_cols(col, col, mode)
    }
}
