//! In-memory note graph engine.
//!
//! # Responsibility
//! - Keep note payloads and link/tag indices reconciled on every write.
//! - Distinguish never-seen ids from ids known only as link targets.
//!
//! # Invariants
//! - Single writer: mutation requires `&mut NoteGraph`.
//! - No operation blocks or performs I/O.

mod link_index;
pub mod note_graph;
mod store;
mod tag_index;
