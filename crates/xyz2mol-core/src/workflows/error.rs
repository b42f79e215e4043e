use crate::core::io::mol::MolError;
use crate::engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Bond perception failed: {0}")]
    Perception(#[from] EngineError),

    #[error("MOL export failed: {0}")]
    Export(#[from] MolError),
}
