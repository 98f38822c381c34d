//! Terminal rendering of statistics grids with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::format::NULL_MARKER;
use crate::grid::StatisticsGrid;

pub const DEFAULT_TABLE_WIDTH: u16 = 120;

/// Build a styled terminal table for `grid`.
pub fn grid_table(grid: &StatisticsGrid, width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(grid.header().iter().map(|name| header_cell(name)));
    apply_table_style(&mut table, width);
    for index in 1..grid.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in grid.rows() {
        let mut cells = Vec::with_capacity(row.len());
        if let Some((label, values)) = row.split_first() {
            cells.push(label_cell(label));
            cells.extend(values.iter().map(|value| value_cell(value)));
        }
        table.add_row(cells);
    }
    table
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn value_cell(value: &str) -> Cell {
    if value == NULL_MARKER {
        Cell::new(value).fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
