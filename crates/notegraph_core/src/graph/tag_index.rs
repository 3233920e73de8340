//! Tag -> note membership index.

use crate::model::note::NoteId;
use std::collections::{BTreeSet, HashMap};

/// Reverse index from tag to the stored notes carrying it.
///
/// Tags with no remaining notes are dropped.
#[derive(Debug, Default)]
pub(crate) struct TagIndex {
    members: HashMap<String, BTreeSet<NoteId>>,
}

impl TagIndex {
    pub(crate) fn retract<'a>(&mut self, id: &str, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            if let Some(ids) = self.members.get_mut(tag) {
                ids.remove(id);
                if ids.is_empty() {
                    self.members.remove(tag);
                }
            }
        }
    }

    pub(crate) fn insert<'a>(&mut self, id: &str, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            self.members
                .entry(tag.clone())
                .or_default()
                .insert(id.to_string());
        }
    }

    pub(crate) fn notes_with(&self, tag: &str) -> Vec<NoteId> {
        self.members
            .get(tag)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.members.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }
}
