use super::assignment::UnresolvedAtom;
use crate::core::forcefield::document::DocumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Forcefield document error: {source}")]
    Document {
        #[from]
        source: DocumentError,
    },

    #[error("Typing incomplete: {} atom(s) could not be resolved", failures.len())]
    TypingIncomplete { failures: Vec<UnresolvedAtom> },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
