//! Graph query errors.
//!
//! # Invariants
//! - `NotFound` is raised only for ids never observed as a note or a link
//!   target. Placeholder ids are answered with `Ok(None)` / empty results.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GraphResult<T> = Result<T, GraphError>;

/// Error returned by id-keyed graph queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The id is neither stored nor referenced by any stored note.
    NotFound(NoteId),
}

impl GraphError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: `{id}`"),
        }
    }
}

impl Error for GraphError {}
