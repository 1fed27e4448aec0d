//! Builder-independent machinery: identifiers, documents, emission.

pub mod document;
pub mod emitter;
pub mod identifier;

use thiserror::Error;

use crate::core::identifier::IdentifierError;

/// Input errors that abort a builder's `build` before any file is written.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("identifier error: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
    #[error("no identifier set; call identifier() before build()")]
    MissingIdentifier,
    #[error("no recipe payload set; call shaped(), shapeless(), furnace(), or custom() before build()")]
    MissingRecipe,
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
