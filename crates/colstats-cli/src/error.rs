use thiserror::Error;

use colstats_engine::EngineError;
use colstats_model::DecodeError;

use crate::loader::ReadError;

/// Any failure of a load cycle. Display is the underlying stage message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
