//! Note domain model.
//!
//! # Responsibility
//! - Define the parsed document record handed to the graph by upstream parsers.
//! - Define the link descriptor that materializes graph edges.
//!
//! # Invariants
//! - `id` is caller-assigned, case-sensitive and stable across re-parses.
//! - `links` keeps source order; duplicates are meaningful (one edge each).
//! - A `Link` has no identity of its own and is owned by its `Note`.
//! - Notes are replaced wholesale, never patched in place by the graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable note identifier.
///
/// Matched verbatim against link targets. The empty string is a valid id.
pub type NoteId = String;

/// Line ending used when the parser does not report one.
pub const DEFAULT_EOL: &str = "\n";

/// One location inside a source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub line: u32,
    pub column: u32,
}

impl Point {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Span inside a source document.
///
/// Not validated: parsers are allowed to report `end` before `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Directed reference from the owning note to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Target note id. No normalization is applied.
    pub to: NoteId,
    /// Display / anchor text as written in the source.
    pub text: String,
    /// Where the link token appears inside the owning note.
    pub position: Position,
}

impl Link {
    pub fn new(to: impl Into<NoteId>, text: impl Into<String>, position: Position) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            position,
        }
    }
}

/// Parsed document record stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable unique key.
    pub id: NoteId,
    /// Document title, when the parser found one.
    pub title: Option<String>,
    /// Outgoing links in source order.
    pub links: Vec<Link>,
    /// Tag set. Order is irrelevant.
    pub tags: BTreeSet<String>,
    /// Document start marker.
    pub start: Point,
    /// Document end marker.
    pub end: Point,
    /// Line ending used by the source.
    pub eol: String,
    /// Path or URI the note was parsed from.
    pub source: String,
    /// Original text or excerpt.
    pub raw: String,
}

impl Note {
    /// Creates an empty note for `id` parsed from `source`.
    ///
    /// Links, tags and raw text start empty; `eol` defaults to `\n`.
    pub fn new(id: impl Into<NoteId>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            links: Vec::new(),
            tags: BTreeSet::new(),
            start: Point::default(),
            end: Point::default(),
            eol: DEFAULT_EOL.to_string(),
            source: source.into(),
            raw: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends one outgoing link, keeping source order.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links.extend(links);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_span(mut self, start: Point, end: Point) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Iterates link targets in source order, duplicates included.
    pub fn link_targets(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.to.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, Note, Point, Position, DEFAULT_EOL};

    #[test]
    fn new_note_starts_without_links_or_tags() {
        let note = Note::new("page-a", "/page-a.md");
        assert_eq!(note.id, "page-a");
        assert_eq!(note.source, "/page-a.md");
        assert!(note.title.is_none());
        assert!(note.links.is_empty());
        assert!(note.tags.is_empty());
        assert_eq!(note.eol, DEFAULT_EOL);
    }

    #[test]
    fn link_targets_keep_source_order_and_duplicates() {
        let position = Position::new(Point::new(1, 1), Point::new(1, 9));
        let note = Note::new("hub", "/hub.md")
            .with_link(Link::new("b", "b", position))
            .with_link(Link::new("a", "a", position))
            .with_link(Link::new("b", "again", position));

        let targets: Vec<&str> = note.link_targets().collect();
        assert_eq!(targets, vec!["b", "a", "b"]);
    }

    #[test]
    fn tags_are_a_set() {
        let note = Note::new("a", "/a.md")
            .with_tag("rust")
            .with_tag("graph")
            .with_tag("rust");
        assert_eq!(note.tags.len(), 2);
    }
}
