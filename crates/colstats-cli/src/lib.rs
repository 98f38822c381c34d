//! Library components of the `colstats` command.
//!
//! The [`controller::Controller`] sequences one load cycle:
//! file loader → statistics engine → record decoder → table and raw view.

pub mod controller;
pub mod error;
pub mod loader;
pub mod logging;
pub mod present;
pub mod settings;
pub mod worker;

pub use controller::{Completion, Controller, LoadState, LoadTicket};
pub use error::PipelineError;
pub use loader::{FileLoader, FsLoader, ReadError};
pub use settings::{Settings, ViewMode};
