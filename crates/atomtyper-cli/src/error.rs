use atomtyper::core::forcefield::document::DocumentError;
use atomtyper::core::io::assignment::AssignmentWriteError;
use atomtyper::core::io::molecule::MoleculeLoadError;
use atomtyper::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    MoleculeLoad(#[from] MoleculeLoadError),

    #[error(transparent)]
    AssignmentWrite(#[from] AssignmentWriteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
