//! Printing the display surfaces to a terminal.

use std::io::{self, Write};
use std::path::Path;

use colstats_render::{TableView, TextView, grid_table};

use crate::controller::LoadState;
use crate::settings::ViewMode;

#[derive(Debug, Clone, Copy)]
pub struct PresentOptions {
    pub view: ViewMode,
    pub table_width: u16,
}

/// Write the current table and text surfaces for `source` to `out`.
///
/// Failure text is always written, whatever the view mode, since it is the
/// only output of a failed load.
pub fn write_display<W: Write>(
    out: &mut W,
    source: &Path,
    state: &LoadState,
    table: &TableView,
    text: &TextView,
    options: PresentOptions,
) -> io::Result<()> {
    writeln!(out, "File: {}", source.display())?;
    if options.view.shows_table()
        && let Some(grid) = table.grid()
    {
        writeln!(out, "{}", grid_table(grid, options.table_width))?;
    }
    let failed = matches!(state, LoadState::Failed { .. });
    if options.view.shows_raw() || failed {
        writeln!(out, "{}", text.text())?;
    }
    Ok(())
}
