//! Renderer module for converting tables to text output

mod backend;
pub mod charset;
pub mod junction;

use std::fmt;
use std::io;

use log::{debug, trace};

use crate::error::TableError;
use crate::grid::Table;
use crate::text::{center_pad, left_pad, right_pad};
use crate::types::{Cell, CellBorder, CellPadding, RenderOptions};

use backend::IoSink;
use charset::BorderChars;
use junction::{JunctionMap, LineFlags};

/// Streams a table as lines of text using one glyph theme.
///
/// Rendering only reads the table, so the same table renders identically
/// any number of times and with any number of renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    chars: BorderChars,
}

impl TextRenderer {
    pub fn new(chars: BorderChars) -> Self {
        Self { chars }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.border_chars())
    }

    pub fn chars(&self) -> &BorderChars {
        &self.chars
    }

    /// Render the table to a string
    pub fn render(&self, table: &Table) -> Result<String, TableError> {
        let mut output = String::new();
        self.render_fmt(table, &mut output)?;
        Ok(output)
    }

    /// Render the table into a character sink
    pub fn render_fmt<W: fmt::Write + ?Sized>(
        &self,
        table: &Table,
        out: &mut W,
    ) -> Result<(), TableError> {
        Ok(self.write_table(table, out)?)
    }

    /// Render the table into a byte sink as UTF-8.
    ///
    /// A failing sink aborts the render; lines already written stay written.
    pub fn render_io<W: io::Write + ?Sized>(
        &self,
        table: &Table,
        out: &mut W,
    ) -> Result<(), TableError> {
        let mut sink = IoSink::new(out);
        match self.write_table(table, &mut sink) {
            Ok(()) => Ok(()),
            Err(err) => Err(sink.into_error(err)),
        }
    }

    fn write_table<W: fmt::Write + ?Sized>(&self, table: &Table, out: &mut W) -> fmt::Result {
        let rows = table.row_count();
        let cols = table.col_count();
        debug!("Rendering {}x{} table", rows, cols);

        let map = JunctionMap::new(&self.chars);
        let widths: Vec<usize> = (0..cols).map(|col| table.col_config(col).width).collect();

        for row in 0..=rows {
            write_border_line(table, &map, &widths, row, out)?;
            if row < rows {
                write_content_lines(table, &map, &widths, row, out)?;
            }
        }
        Ok(())
    }
}

/// Intersection glyphs of border line `row`, joined by horizontal runs
fn write_border_line<W: fmt::Write + ?Sized>(
    table: &Table,
    map: &JunctionMap,
    widths: &[usize],
    row: usize,
    out: &mut W,
) -> fmt::Result {
    for col in 0..=widths.len() {
        let flags = LineFlags::at(table, row, col);
        out.write_char(map.glyph(flags))?;
        if let Some(&width) = widths.get(col) {
            write_repeated(out, map.run(flags), width)?;
        }
    }
    out.write_char('\n')
}

/// Text lines of cell row `row`; each cell's value lands on the single line
/// its alignment selects, the rest stay blank.
fn write_content_lines<W: fmt::Write + ?Sized>(
    table: &Table,
    map: &JunctionMap,
    widths: &[usize],
    row: usize,
    out: &mut W,
) -> fmt::Result {
    let height = table.row_config(row).height;
    trace!("Row {}: {} line(s)", row, height);

    for line in 0..height {
        for col in 0..=widths.len() {
            let cell = table.cell(row, col);
            let edge = cell.config.border.contains(CellBorder::LEFT)
                || (col > 0 && table.cell(row, col - 1).config.border.contains(CellBorder::RIGHT));
            out.write_char(map.edge(edge))?;

            let Some(&width) = widths.get(col) else {
                continue;
            };
            if line == cell.config.alignment.line_index(height) {
                out.write_str(&pad_value(cell, width))?;
            } else {
                write_repeated(out, ' ', width)?;
            }
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Cell text justified to exactly `width` columns
fn pad_value(cell: &Cell, width: usize) -> String {
    match cell.config.padding {
        CellPadding::Left => right_pad(&cell.value, width, ' '),
        CellPadding::Center => center_pad(&cell.value, width, ' '),
        CellPadding::Right => left_pad(&cell.value, width, ' '),
    }
}

fn write_repeated<W: fmt::Write + ?Sized>(out: &mut W, c: char, count: usize) -> fmt::Result {
    for _ in 0..count {
        out.write_char(c)?;
    }
    Ok(())
}

/// Renders with the single-line box theme
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TextRenderer::default().write_table(self, f)
    }
}
