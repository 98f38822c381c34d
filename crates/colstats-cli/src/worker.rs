//! Background file reads and the selection event loop.
//!
//! Each selection reads its file on a worker thread. Selections and read
//! completions arrive on one channel and are handled in arrival order by the
//! thread that owns the [`Controller`]; completions of superseded selections
//! are dropped by the controller.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tracing::{debug, info};

use colstats_engine::StatisticsEngine;
use colstats_render::{TableSurface, TextSurface};

use crate::controller::{Completion, Controller, LoadTicket};
use crate::loader::{FileLoader, ReadError};

#[derive(Debug)]
pub enum LoadEvent {
    /// The user picked a file.
    Selected(PathBuf),
    /// A worker finished reading the file for `ticket`.
    Read {
        ticket: LoadTicket,
        result: Result<String, ReadError>,
    },
    /// No more selections will arrive.
    InputClosed,
}

/// Outcome counts of an event loop run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub rendered: usize,
    pub failed: usize,
    pub stale: usize,
}

impl LoopSummary {
    pub fn record(&mut self, completion: &Completion) {
        match completion {
            Completion::Rendered { .. } => self.rendered += 1,
            Completion::Failed { .. } => self.failed += 1,
            Completion::Stale => self.stale += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Read `path` on a worker thread and post the result to `sender`.
pub fn spawn_read<L>(
    loader: Arc<L>,
    path: PathBuf,
    ticket: LoadTicket,
    sender: Sender<LoadEvent>,
) -> JoinHandle<()>
where
    L: FileLoader + ?Sized + 'static,
{
    std::thread::spawn(move || {
        let result = loader.read_text(&path);
        // The receiver is gone only when the event loop has exited.
        let _ = sender.send(LoadEvent::Read { ticket, result });
    })
}

/// Forward each non-empty line of `input` as a selection, then `InputClosed`.
pub fn spawn_line_selections<R>(input: R, sender: Sender<LoadEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if sender
                .send(LoadEvent::Selected(PathBuf::from(trimmed)))
                .is_err()
            {
                return;
            }
        }
        let _ = sender.send(LoadEvent::InputClosed);
    })
}

/// Drive `controller` from `events` until input is closed and every
/// outstanding read has completed.
///
/// `on_change` runs after each completion that changed the display, with the
/// path of the selection that produced it.
pub fn run_event_loop<E, T, X, L, F>(
    controller: &mut Controller<E, T, X>,
    loader: &Arc<L>,
    events: &Receiver<LoadEvent>,
    sender: &Sender<LoadEvent>,
    mut on_change: F,
) -> LoopSummary
where
    E: StatisticsEngine,
    T: TableSurface,
    X: TextSurface,
    L: FileLoader + ?Sized + 'static,
    F: FnMut(&Controller<E, T, X>, &Path, &Completion),
{
    let mut summary = LoopSummary::default();
    let mut pending = 0usize;
    let mut input_closed = false;
    // Only the latest selection can change the display.
    let mut latest = PathBuf::new();

    while !(input_closed && pending == 0) {
        let Ok(event) = events.recv() else {
            break;
        };
        match event {
            LoadEvent::Selected(path) => {
                let ticket = controller.select();
                info!(path = %path.display(), sequence = ticket.sequence(), "file selected");
                pending += 1;
                latest.clone_from(&path);
                spawn_read(Arc::clone(loader), path, ticket, sender.clone());
            }
            LoadEvent::Read { ticket, result } => {
                pending = pending.saturating_sub(1);
                let completion = controller.complete(ticket, result);
                summary.record(&completion);
                if completion != Completion::Stale {
                    on_change(controller, &latest, &completion);
                }
            }
            LoadEvent::InputClosed => {
                debug!(pending, "selection input closed");
                input_closed = true;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    struct NameLoader;

    impl FileLoader for NameLoader {
        fn read_text(&self, path: &Path) -> Result<String, ReadError> {
            Ok(path.display().to_string())
        }
    }

    #[test]
    fn line_selections_skip_blanks() {
        let (sender, receiver) = mpsc::channel();
        spawn_line_selections(Cursor::new("a.csv\n\n  b.csv  \n"), sender)
            .join()
            .unwrap();
        let events: Vec<LoadEvent> = receiver.iter().collect();
        assert!(matches!(&events[0], LoadEvent::Selected(p) if p == Path::new("a.csv")));
        assert!(matches!(&events[1], LoadEvent::Selected(p) if p == Path::new("b.csv")));
        assert!(matches!(events[2], LoadEvent::InputClosed));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn spawn_read_posts_result() {
        let (sender, receiver) = mpsc::channel();
        let loader = Arc::new(NameLoader);
        spawn_read(loader, PathBuf::from("x.csv"), LoadTicket::first(), sender)
            .join()
            .unwrap();
        match receiver.recv().unwrap() {
            LoadEvent::Read { ticket, result } => {
                assert_eq!(ticket, LoadTicket::first());
                assert_eq!(result.unwrap(), "x.csv");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn summary_counts() {
        let mut summary = LoopSummary::default();
        summary.record(&Completion::Rendered { columns: 1 });
        summary.record(&Completion::Stale);
        summary.record(&Completion::Failed {
            message: "x".to_string(),
        });
        assert_eq!(
            summary,
            LoopSummary {
                rendered: 1,
                failed: 1,
                stale: 1
            }
        );
        assert!(summary.has_failures());
    }
}
