//! Note graph domain model.
//!
//! # Responsibility
//! - Define the records exchanged with upstream parsers and downstream
//!   consumers.
//!
//! # Invariants
//! - Every note is identified by a caller-assigned, stable `NoteId`.
//! - Links are owned by their note and carry no identity of their own.

pub mod note;
