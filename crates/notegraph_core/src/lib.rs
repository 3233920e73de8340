//! Core graph engine for notegraph.
//! Keeps an in-memory index of notes, their forward links and backlinks.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, CoreConfig, GraphConfig, LoggingConfig, PlaceholderRetention};
pub use error::{GraphError, GraphResult};
pub use graph::note_graph::{Backlink, GraphStats, NodeState, NoteChange, NoteGraph};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Link, Note, NoteId, Point, Position};
pub use service::index_service::{
    IndexError, IndexResult, IndexService, IngestOutcome, NoteParser, ParseError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
