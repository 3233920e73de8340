//! Parse-and-index use-case service.
//!
//! # Responsibility
//! - Define the contract upstream parsers implement (`NoteParser`).
//! - Feed parsed notes into an owned `NoteGraph`.
//!
//! # Invariants
//! - A parser failure leaves the graph untouched.
//! - The service never reads files; callers hand over source text.

use crate::error::GraphError;
use crate::graph::note_graph::{NoteChange, NoteGraph};
use crate::model::note::{Note, NoteId};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IndexResult<T> = Result<T, IndexError>;

/// Turns raw document text into a fully populated `Note`.
pub trait NoteParser {
    /// Parses `text` read from `source` (path or URI).
    fn parse(&self, source: &str, text: &str) -> Result<Note, ParseError>;
}

/// Parser failure for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Path or URI of the rejected document.
    pub origin: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse `{}`: {}", self.origin, self.reason)
    }
}

impl Error for ParseError {}

/// Service error for index use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    Parse(ParseError),
    Graph(GraphError),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Graph(err) => Some(err),
        }
    }
}

impl From<ParseError> for IndexError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<GraphError> for IndexError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

/// Result of indexing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub id: NoteId,
    pub change: NoteChange,
}

/// Index service facade over a parser implementation.
pub struct IndexService<P: NoteParser> {
    parser: P,
    graph: NoteGraph,
}

impl<P: NoteParser> IndexService<P> {
    /// Creates a service with an empty default graph.
    pub fn new(parser: P) -> Self {
        Self::with_graph(parser, NoteGraph::new())
    }

    /// Creates a service around an existing (possibly configured) graph.
    pub fn with_graph(parser: P, graph: NoteGraph) -> Self {
        Self { parser, graph }
    }

    /// Parses one document and stores it, replacing any note with the same id.
    pub fn ingest(&mut self, source: &str, text: &str) -> IndexResult<IngestOutcome> {
        let note = self.parser.parse(source, text).map_err(|err| {
            warn!("event=ingest module=service status=error stage=parse");
            err
        })?;
        let id = note.id.clone();
        let change = self.graph.set_note(note);
        Ok(IngestOutcome { id, change })
    }

    /// Removes one note; see `NoteGraph::delete_note`.
    pub fn remove(&mut self, id: &str) -> IndexResult<Option<Note>> {
        Ok(self.graph.delete_note(id)?)
    }

    pub fn graph(&self) -> &NoteGraph {
        &self.graph
    }

    pub fn into_graph(self) -> NoteGraph {
        self.graph
    }
}
