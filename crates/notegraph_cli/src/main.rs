//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notegraph_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notegraph_core::{Link, Note, NoteGraph, Position};

fn main() {
    println!("notegraph_core ping={}", notegraph_core::ping());
    println!("notegraph_core version={}", notegraph_core::core_version());

    let mut graph = NoteGraph::new();
    graph.set_note(Note::new("index", "/index.md").with_link(Link::new(
        "guide",
        "guide",
        Position::default(),
    )));
    graph.set_note(Note::new("guide", "/guide.md").with_link(Link::new(
        "draft",
        "draft",
        Position::default(),
    )));
    graph.set_note(Note::new("about", "/about.md"));

    let stats = graph.stats();
    println!(
        "notegraph_core demo notes={} placeholders={} edges={} tags={}",
        stats.notes, stats.placeholders, stats.edges, stats.tags
    );
}
