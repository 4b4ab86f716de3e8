use std::io;

use insta::assert_snapshot;
use tables_tui::{
    render_table, BorderStyle, CellAlignment, CellBorder, CellPadding, OutlineMode,
    RenderOptions, Table, TableError, TextRenderer,
};

fn boxed_grid(values: &[&[&str]], width: usize) -> Table {
    let mut table = Table::default();
    for (row, line) in values.iter().enumerate() {
        table.set_row(row, line.iter());
    }
    for col in 0..table.col_count() {
        table.col_config_mut(col).width = width;
    }
    for row in 0..table.row_count() {
        for col in 0..table.col_count() {
            table
                .outline_region(row, col, row, col, OutlineMode::Override)
                .unwrap();
        }
    }
    table
}

#[test]
fn test_single_bordered_cell() {
    let mut table = Table::new(1, 1);
    table.col_config_mut(0).width = 3;
    table
        .outline_region(0, 0, 0, 0, OutlineMode::Override)
        .unwrap();
    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_eq!(output, "┌───┐\n│   │\n└───┘\n");
}

#[test]
fn test_adjacent_outlines_merge() {
    let mut table = Table::new(1, 2);
    table.col_config_mut(0).width = 3;
    table.col_config_mut(1).width = 3;
    table
        .outline_region(0, 0, 0, 0, OutlineMode::Override)
        .unwrap();
    table
        .outline_region(0, 1, 0, 1, OutlineMode::Override)
        .unwrap();
    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_snapshot!(output.trim_end(), @r"
┌───┬───┐
│   │   │
└───┴───┘
");
}

#[test]
fn test_full_grid() {
    let table = boxed_grid(&[&["a", "b"], &["c", "d"]], 1);
    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_snapshot!(output.trim_end(), @r"
┌─┬─┐
│a│b│
├─┼─┤
│c│d│
└─┴─┘
");
}

#[test]
fn test_full_grid_ascii() {
    let table = boxed_grid(&[&["a", "b"], &["c", "d"]], 1);
    let output = render_table(
        &table,
        RenderOptions {
            ascii: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(output, "+-+-+\n|a|b|\n+-+-+\n|c|d|\n+-+-+\n");
    assert!(!output.contains('┌'));
}

#[test]
fn test_double_box_style() {
    let table = boxed_grid(&[&["", ""]], 1);
    let output = render_table(
        &table,
        RenderOptions {
            style: BorderStyle::Double,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(output, "╔═╦═╗\n║ ║ ║\n╚═╩═╝\n");
}

#[test]
fn test_row_outlines() {
    let mut table = Table::default();
    table.set_row(0, ["Name", "Qty"]);
    table.set_row(1, ["apple", "3"]);
    table.col_config_mut(0).width = 6;
    table.col_config_mut(1).width = 4;
    table.outline_row(0, OutlineMode::Override).unwrap();
    table.outline_row(1, OutlineMode::Override).unwrap();

    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_snapshot!(output.trim_end(), @r"
┌───────────┐
│  Name  Qty│
├───────────┤
│ apple    3│
└───────────┘
");
}

#[test]
fn test_header_separator_overlap() {
    let mut table = Table::default();
    table.set_row(0, ["A", "B"]);
    table.set_row(1, ["1", "2"]);
    table.col_config_mut(0).width = 2;
    table.col_config_mut(1).width = 2;
    table
        .outline_region(0, 0, 1, 1, OutlineMode::Override)
        .unwrap();
    table.outline_row(0, OutlineMode::Overlap).unwrap();

    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_snapshot!(output.trim_end(), @r"
┌─────┐
│ A  B│
├─────┤
│ 1  2│
└─────┘
");
}

#[test]
fn test_middle_alignment() {
    let mut table = Table::default();
    table
        .cell_mut(0, 0)
        .set_value("mid")
        .set_alignment(CellAlignment::Middle)
        .set_padding(CellPadding::Left)
        .set_border(CellBorder::ALL);
    table.row_config_mut(0).height = 3;
    table.col_config_mut(0).width = 5;

    let output = render_table(&table, RenderOptions::default()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "│     │");
    assert_eq!(lines[2], "│mid  │");
    assert_eq!(lines[3], "│     │");
}

#[test]
fn test_line_count() {
    let mut table = boxed_grid(&[&["a"], &["b"], &["c"]], 2);
    table.row_config_mut(0).height = 2;
    table.row_config_mut(2).height = 0;
    let output = render_table(&table, RenderOptions::default()).unwrap();
    // 4 border lines + 2 + 1 + 0 content lines
    assert_eq!(output.lines().count(), 7);
    assert!(output.ends_with('\n'));
}

#[test]
fn test_default_column_width() {
    let mut table = Table::default();
    table.cell_mut(0, 0).set_border(CellBorder::ALL);
    let output = render_table(&table, RenderOptions::default()).unwrap();
    let first = output.lines().next().unwrap();
    assert_eq!(first.chars().count(), 18);
}

#[test]
fn test_wide_glyphs_fill_column() {
    let table = boxed_grid(&[&["日本"]], 4);
    let output = render_table(&table, RenderOptions::default()).unwrap();
    assert_eq!(output.lines().nth(1), Some("│日本│"));
}

#[test]
fn test_render_is_idempotent() {
    let table = boxed_grid(&[&["x", "y"], &["z", ""]], 3);
    let renderer = TextRenderer::default();
    let first = renderer.render(&table).unwrap();
    let second = renderer.render(&table).unwrap();
    assert_eq!(first, second);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.col_count(), 2);
}

#[test]
fn test_invalid_region_is_rejected() {
    let mut table = Table::new(2, 2);
    let result = table.outline_region(0, 1, 1, 0, OutlineMode::Overlap);
    assert!(matches!(result, Err(TableError::InvalidRegion { .. })));
    assert!(table.try_cell(0, 1).is_none());
}

/// Accepts `limit` bytes, then fails
struct FailAfter {
    written: Vec<u8>,
    limit: usize,
}

impl io::Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_propagates() {
    let table = boxed_grid(&[&["a"]], 1);
    let mut sink = FailAfter {
        written: Vec::new(),
        limit: 4,
    };
    let result = TextRenderer::default().render_io(&table, &mut sink);
    match result {
        Err(TableError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
        other => panic!("expected io error, got {other:?}"),
    }
    // Partial output stays written
    assert!(!sink.written.is_empty());
    assert!(sink.written.len() <= 4);
}
