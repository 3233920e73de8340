//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parser and graph calls into use-case level APIs.
//! - Keep embedder layers decoupled from graph internals.

pub mod index_service;
