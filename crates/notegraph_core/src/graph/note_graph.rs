//! Note graph facade.
//!
//! # Responsibility
//! - Own the note store, link index and tag index of one graph instance.
//! - Run reconciliation on every write so indices never lag behind payloads.
//! - Answer note, forward-link and backlink queries without I/O.
//!
//! # Invariants
//! - Every id is `Unknown`, `Placeholder` or `Resolved`, derived from the
//!   store and the reverse index only.
//! - `get_note` / `get_forward_links` / `delete_note` fail only on `Unknown`.
//! - `get_backlinks` never fails.
//! - A write touches other ids only through its own old and new link lists.

use crate::config::{GraphConfig, PlaceholderRetention};
use crate::error::{GraphError, GraphResult};
use crate::graph::link_index::LinkIndex;
use crate::graph::store::NoteStore;
use crate::graph::tag_index::TagIndex;
use crate::model::note::{Link, Note, NoteId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Existence state of one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Never stored and not targeted by any stored note.
    Unknown,
    /// Targeted by links but without a stored payload.
    Placeholder,
    /// A note with this id is stored.
    Resolved,
}

/// Outcome of `NoteGraph::set_note`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteChange {
    /// No note was stored under the id before.
    Created,
    /// An existing payload was replaced wholesale.
    Replaced,
}

impl NoteChange {
    fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Replaced => "replaced",
        }
    }
}

/// Incoming edge descriptor returned by `NoteGraph::get_backlinks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backlink {
    /// Id of the note owning the link.
    pub from: NoteId,
    /// The link as stored in the source note.
    pub link: Link,
}

/// Point-in-time graph counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub notes: usize,
    pub placeholders: usize,
    pub edges: usize,
    pub tags: usize,
}

/// In-memory note graph with forward and backward link indices.
///
/// Writes take `&mut self` and reconcile all indices before returning, so no
/// reader can observe a half-applied update.
#[derive(Debug, Default)]
pub struct NoteGraph {
    config: GraphConfig,
    store: NoteStore,
    links: LinkIndex,
    tags: TagIndex,
}

impl NoteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Inserts or replaces the note stored under `note.id`.
    ///
    /// Edges and tags of the previous payload are retracted before the new
    /// ones are inserted. Targets that were unknown become placeholders.
    pub fn set_note(&mut self, note: Note) -> NoteChange {
        let id = note.id.clone();
        let retention = self.retention();
        let collected = self.links.retract(&id, retention);
        if let Some(previous) = self.store.get(&id) {
            self.tags.retract(&id, &previous.tags);
        }

        self.links.insert(&id, &note.links);
        self.tags.insert(&id, &note.tags);
        let link_count = note.links.len();
        let tag_count = note.tags.len();

        let change = match self.store.insert(note) {
            Some(_) => NoteChange::Replaced,
            None => NoteChange::Created,
        };

        debug!(
            "event=note_set module=graph status=ok change={} links={} tags={} collected={}",
            change.as_str(),
            link_count,
            tag_count,
            collected
        );
        change
    }

    /// Returns the stored note.
    ///
    /// `Ok(None)` for placeholders, `Err(NotFound)` for unknown ids.
    pub fn get_note(&self, id: &str) -> GraphResult<Option<&Note>> {
        match self.node_state(id) {
            NodeState::Resolved => Ok(self.store.get(id)),
            NodeState::Placeholder => Ok(None),
            NodeState::Unknown => Err(not_found(id)),
        }
    }

    /// Returns every stored note in unspecified order.
    pub fn get_notes(&self) -> Vec<&Note> {
        self.store.values().collect()
    }

    /// Returns the links owned by the note at `id`, in source order.
    ///
    /// Empty for placeholders, `Err(NotFound)` for unknown ids.
    pub fn get_forward_links(&self, id: &str) -> GraphResult<&[Link]> {
        match self.store.get(id) {
            Some(note) => Ok(note.links.as_slice()),
            None if self.links.knows_target(id) => Ok(&[]),
            None => Err(not_found(id)),
        }
    }

    /// Returns one entry per stored link whose target is `id`.
    ///
    /// Ordered by source id, then by link position inside the source.
    /// Never fails: unknown ids simply have no backlinks.
    pub fn get_backlinks(&self, id: &str) -> Vec<Backlink> {
        let Some(incoming) = self.links.incoming(id) else {
            return Vec::new();
        };

        let mut backlinks = Vec::new();
        for (from, slots) in incoming {
            let Some(source) = self.store.get(from) else {
                continue;
            };
            for slot in slots {
                if let Some(link) = source.links.get(*slot) {
                    backlinks.push(Backlink {
                        from: from.clone(),
                        link: link.clone(),
                    });
                }
            }
        }
        backlinks
    }

    /// Removes the note at `id` and retracts its outgoing edges.
    ///
    /// The id stays a placeholder while other notes still link to it.
    /// `Ok(None)` for placeholders, `Err(NotFound)` for unknown ids.
    pub fn delete_note(&mut self, id: &str) -> GraphResult<Option<Note>> {
        match self.node_state(id) {
            NodeState::Unknown => return Err(not_found(id)),
            NodeState::Placeholder => return Ok(None),
            NodeState::Resolved => {}
        }

        let retention = self.retention();
        let collected = self.links.retract(id, retention);
        let removed = self.store.remove(id);
        if let Some(note) = removed.as_ref() {
            self.tags.retract(id, &note.tags);
        }

        debug!(
            "event=note_deleted module=graph status=ok demoted_to={:?} collected={}",
            self.node_state(id),
            collected
        );
        Ok(removed)
    }

    pub fn node_state(&self, id: &str) -> NodeState {
        if self.store.contains(id) {
            NodeState::Resolved
        } else if self.links.knows_target(id) {
            NodeState::Placeholder
        } else {
            NodeState::Unknown
        }
    }

    pub fn contains_note(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Returns placeholder ids, sorted.
    pub fn placeholders(&self) -> Vec<NoteId> {
        let mut ids: Vec<NoteId> = self
            .links
            .target_ids()
            .filter(|id| !self.store.contains(id))
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Returns ids of stored notes carrying `tag`, sorted.
    pub fn notes_with_tag(&self, tag: &str) -> Vec<NoteId> {
        self.tags.notes_with(tag)
    }

    /// Returns every tag carried by at least one stored note, sorted.
    pub fn tags(&self) -> Vec<String> {
        self.tags.tags()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            notes: self.store.len(),
            placeholders: self
                .links
                .target_ids()
                .filter(|id| !self.store.contains(id))
                .count(),
            edges: self.links.edge_count(),
            tags: self.tags.len(),
        }
    }

    fn retention(&self) -> PlaceholderRetention {
        self.config.placeholder_retention
    }
}

fn not_found(id: &str) -> GraphError {
    GraphError::NotFound(id.to_string())
}
