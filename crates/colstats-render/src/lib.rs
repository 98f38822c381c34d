//! Rendering of statistics reports.
//!
//! [`render_grid`] projects a report into a [`StatisticsGrid`] of formatted
//! strings. Grids are shown through a [`TableSurface`]; text output (raw JSON,
//! status, errors) goes through a [`TextSurface`]. [`grid_table`] turns a grid
//! into a styled terminal table.

pub mod format;
pub mod grid;
pub mod surface;
pub mod terminal;

pub use format::{NULL_MARKER, format_cell, format_date_millis, format_fixed2};
pub use grid::{StatisticsGrid, render_grid};
pub use surface::{TableSurface, TableView, TextSurface, TextView};
pub use terminal::{DEFAULT_TABLE_WIDTH, grid_table};
