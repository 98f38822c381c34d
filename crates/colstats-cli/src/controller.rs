//! Load-cycle controller.
//!
//! State machine over [`LoadState`]:
//!
//! - `select` (any state → `Loading`): clears the table, shows
//!   [`LOADING_TEXT`], and issues a new [`LoadTicket`].
//! - `complete` with the latest ticket: `Loading → Rendered` when the read,
//!   engine, and decode stages all succeed, otherwise `Loading → Failed` with
//!   `Error reading csv: <cause>` and an empty table.
//! - `complete` with an older ticket changes nothing.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use colstats_engine::StatisticsEngine;
use colstats_model::{DateHints, decode_report, raw_text};
use colstats_render::{StatisticsGrid, TableSurface, TextSurface, render_grid};

use crate::error::PipelineError;
use crate::loader::{FileLoader, ReadError};

/// Text shown while a load is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Prefix of every user-visible failure message.
pub const ERROR_PREFIX: &str = "Error reading csv: ";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed {
        message: String,
    },
}

/// Sequence number identifying one file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn first() -> Self {
        LoadTicket(1)
    }
}

/// What a completion did to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Rendered { columns: usize },
    Failed { message: String },
    /// A newer selection superseded this load; nothing changed.
    Stale,
}

pub struct Controller<E, T, X> {
    engine: E,
    hints: DateHints,
    table: T,
    text: X,
    state: LoadState,
    sequence: u64,
}

impl<E, T, X> Controller<E, T, X>
where
    E: StatisticsEngine,
    T: TableSurface,
    X: TextSurface,
{
    pub fn new(engine: E, hints: DateHints, table: T, text: X) -> Self {
        Self {
            engine,
            hints,
            table,
            text,
            state: LoadState::Idle,
            sequence: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn hints(&self) -> &DateHints {
        &self.hints
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn text(&self) -> &X {
        &self.text
    }

    /// Start a new load, superseding any load still in flight.
    pub fn select(&mut self) -> LoadTicket {
        self.sequence += 1;
        self.table.clear();
        self.text.set_text(LOADING_TEXT.to_string());
        self.state = LoadState::Loading;
        debug!(sequence = self.sequence, "load started");
        LoadTicket(self.sequence)
    }

    /// Finish the load identified by `ticket` with the file read result.
    pub fn complete(&mut self, ticket: LoadTicket, read: Result<String, ReadError>) -> Completion {
        if ticket.0 != self.sequence || self.state != LoadState::Loading {
            debug!(
                sequence = ticket.0,
                latest = self.sequence,
                "discarding stale load"
            );
            return Completion::Stale;
        }
        let span = info_span!("load", sequence = ticket.0);
        let _guard = span.enter();

        match self.run_stages(read) {
            Ok((grid, raw)) => {
                let columns = grid.column_count().saturating_sub(1);
                self.text.set_text(raw);
                self.table.replace(grid);
                self.state = LoadState::Rendered;
                info!(columns, "load rendered");
                Completion::Rendered { columns }
            }
            Err(error) => {
                warn!(%error, "load failed");
                let message = format!("{ERROR_PREFIX}{error}");
                self.table.clear();
                self.text.set_text(message.clone());
                self.state = LoadState::Failed {
                    message: message.clone(),
                };
                Completion::Failed { message }
            }
        }
    }

    /// Select, read, and complete in one call.
    pub fn load<L: FileLoader + ?Sized>(&mut self, loader: &L, path: &Path) -> Completion {
        let ticket = self.select();
        let read = loader.read_text(path);
        self.complete(ticket, read)
    }

    fn run_stages(
        &self,
        read: Result<String, ReadError>,
    ) -> Result<(StatisticsGrid, String), PipelineError> {
        let text = read?;
        let record = self.engine.describe(&text, &self.hints)?;
        let report = decode_report(&record)?;
        let grid = render_grid(&report, Some(&self.hints));
        Ok((grid, raw_text(&report)))
    }
}
