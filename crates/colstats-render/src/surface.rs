//! Display surfaces.
//!
//! The controller writes to a table surface and a text surface it is handed at
//! construction. [`TableView`] and [`TextView`] keep the latest content in
//! memory so callers (and tests) can read it back.

use crate::grid::StatisticsGrid;

/// Receives rendered statistics grids.
pub trait TableSurface {
    /// Remove every row and cell.
    fn clear(&mut self);

    /// Replace the whole table with `grid` in one step.
    fn replace(&mut self, grid: StatisticsGrid);
}

/// Receives status text, raw JSON, or error messages.
pub trait TextSurface {
    fn set_text(&mut self, text: String);
}

impl<T: TableSurface + ?Sized> TableSurface for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn replace(&mut self, grid: StatisticsGrid) {
        (**self).replace(grid);
    }
}

impl<T: TextSurface + ?Sized> TextSurface for &mut T {
    fn set_text(&mut self, text: String) {
        (**self).set_text(text);
    }
}

/// In-memory table surface.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    grid: Option<StatisticsGrid>,
}

impl TableView {
    pub fn grid(&self) -> Option<&StatisticsGrid> {
        self.grid.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_none()
    }
}

impl TableSurface for TableView {
    fn clear(&mut self) {
        self.grid = None;
    }

    fn replace(&mut self, grid: StatisticsGrid) {
        self.grid = Some(grid);
    }
}

/// In-memory text surface.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    text: String,
}

impl TextView {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSurface for TextView {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
