//! Authoritative note payload storage.

use crate::model::note::{Note, NoteId};
use std::collections::HashMap;

/// Id-keyed note payloads. Holds only resolved notes.
#[derive(Debug, Default)]
pub(crate) struct NoteStore {
    notes: HashMap<NoteId, Note>,
}

impl NoteStore {
    /// Inserts or wholesale-replaces the note, returning the previous payload.
    pub(crate) fn insert(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.id.clone(), note)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Note> {
        self.notes.remove(id)
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.notes.contains_key(id)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::Note;

    #[test]
    fn insert_replaces_whole_payload() {
        let mut store = NoteStore::default();
        assert!(store.insert(Note::new("a", "/a.md").with_title("v1")).is_none());

        let previous = store
            .insert(Note::new("a", "/a-moved.md"))
            .expect("second insert should return previous payload");
        assert_eq!(previous.title.as_deref(), Some("v1"));

        let current = store.get("a").expect("note should be stored");
        assert!(current.title.is_none());
        assert_eq!(current.source, "/a-moved.md");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_case_sensitive() {
        let mut store = NoteStore::default();
        store.insert(Note::new("Page", "/Page.md"));
        assert!(store.contains("Page"));
        assert!(!store.contains("page"));
    }
}
