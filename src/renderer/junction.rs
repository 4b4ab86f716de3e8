//! Junction glyph selection at grid intersections
//!
//! Intersection `(row, col)` sits between cell rows `row - 1`/`row` and cell
//! columns `col - 1`/`col`. Each line meeting there is declared by one of
//! the up to four surrounding cells; cells outside the table count as
//! borderless.

use crate::grid::Table;
use crate::types::CellBorder;

use super::charset::BorderChars;

/// Glyph used where no line passes
pub const BLANK: char = ' ';

/// Line directions present at an intersection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl LineFlags {
    /// Collect the lines meeting at intersection `(row, col)` of `table`
    pub fn at(table: &Table, row: usize, col: usize) -> Self {
        let none = CellBorder::NONE;
        let bottom_right = table.cell(row, col).config.border;
        let bottom_left = match col {
            0 => none,
            _ => table.cell(row, col - 1).config.border,
        };
        let top_right = match row {
            0 => none,
            _ => table.cell(row - 1, col).config.border,
        };
        let top_left = match (row, col) {
            (0, _) | (_, 0) => none,
            _ => table.cell(row - 1, col - 1).config.border,
        };

        Self {
            left: bottom_left.contains(CellBorder::TOP) || top_left.contains(CellBorder::BOTTOM),
            right: bottom_right.contains(CellBorder::TOP)
                || top_right.contains(CellBorder::BOTTOM),
            up: top_right.contains(CellBorder::LEFT) || top_left.contains(CellBorder::RIGHT),
            down: bottom_right.contains(CellBorder::LEFT)
                || bottom_left.contains(CellBorder::RIGHT),
        }
    }

    /// `right` in bit 0, `left` in bit 1
    fn horizontal(self) -> usize {
        usize::from(self.right) | (usize::from(self.left) << 1)
    }

    /// `down` in bit 0, `up` in bit 1
    fn vertical(self) -> usize {
        usize::from(self.down) | (usize::from(self.up) << 1)
    }
}

/// Glyph lookup indexed `[vertical][horizontal]`
#[derive(Debug, Clone, Copy)]
pub struct JunctionMap([[char; 4]; 4]);

impl JunctionMap {
    pub fn new(b: &BorderChars) -> Self {
        let (h, v) = (b.horizontal, b.vertical);
        Self([
            [BLANK, h, h, h],
            [v, b.top_left, b.top_right, b.top_junction],
            [v, b.bottom_left, b.bottom_right, b.bottom_junction],
            [v, b.left_junction, b.right_junction, b.cross],
        ])
    }

    /// Glyph drawn where `flags` meet
    pub fn glyph(&self, flags: LineFlags) -> char {
        self.0[flags.vertical()][flags.horizontal()]
    }

    /// Fill for the run right of an intersection
    pub fn run(&self, flags: LineFlags) -> char {
        self.0[0][usize::from(flags.right)]
    }

    /// Edge drawn left of a content line
    pub fn edge(&self, down: bool) -> char {
        self.0[usize::from(down)][0]
    }
}
