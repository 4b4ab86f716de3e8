//! tables-tui - Terminal renderer for bordered text tables
//!
//! A [`Table`] is a sparse grid of cells. Every cell carries its own border
//! sides, horizontal padding and vertical alignment; rows and columns carry
//! their height and width. Rendering picks the right box-drawing junction at
//! every grid intersection from the borders of the surrounding cells, so
//! independently outlined regions join into one continuous frame.
//!
//! # Outlined Table Example
//! ```
//! use tables_tui::{render_table, OutlineMode, RenderOptions, Table};
//!
//! let mut table = Table::default();
//! table.set_row(0, ["Name", "Qty"]);
//! table.set_row(1, ["apple", "3"]);
//! table.col_config_mut(0).width = 6;
//! table.col_config_mut(1).width = 4;
//! table.outline_row(0, OutlineMode::Override).unwrap();
//! table.outline_row(1, OutlineMode::Override).unwrap();
//!
//! let output = render_table(&table, RenderOptions::default()).unwrap();
//! println!("{}", output);
//! ```
//!
//! # Custom Theme Example
//! ```
//! use tables_tui::{render_table, BorderChars, BorderStyle, OutlineMode, RenderOptions, Table};
//!
//! let mut table = Table::new(1, 1);
//! table.outline_region(0, 0, 0, 0, OutlineMode::Override).unwrap();
//!
//! let chars: BorderChars = "=:####TBLRX".parse().unwrap();
//! let options = RenderOptions {
//!     style: BorderStyle::Custom(chars),
//!     ..Default::default()
//! };
//! let output = render_table(&table, options).unwrap();
//! assert!(output.starts_with("#="));
//! ```

mod error;
mod grid;
mod renderer;
mod text;
mod types;

pub use error::TableError;
pub use grid::Table;
pub use renderer::charset::BorderChars;
pub use renderer::junction::{JunctionMap, LineFlags};
pub use renderer::TextRenderer;
pub use text::{center_pad, display_width, left_pad, right_pad};
pub use types::{
    BorderStyle, Cell, CellAlignment, CellBorder, CellConfig, CellPadding, ColConfig, OutlineMode,
    RenderOptions, RowConfig,
};

/// Render a table to terminal-displayable text
///
/// # Arguments
/// * `table` - Populated table
/// * `options` - Rendering options (ASCII mode, border style)
///
/// # Returns
/// * `Ok(String)` - Rendered table, every line terminated by `\n`
/// * `Err(TableError)` - Output error
pub fn render_table(table: &Table, options: RenderOptions) -> Result<String, TableError> {
    TextRenderer::from_options(&options).render(table)
}
