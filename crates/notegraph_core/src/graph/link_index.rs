//! Bidirectional link adjacency.
//!
//! # Invariants
//! - `forward[x]` lists exactly the `to` targets of the links owned by the
//!   note stored under `x`, in source order.
//! - `reverse[t][s]` holds the link slots of `s` whose target is `t`; every
//!   forward edge has exactly one matching slot and vice versa.
//! - A `reverse` key is what makes an unstored id a placeholder.

use crate::config::PlaceholderRetention;
use crate::model::note::{Link, NoteId};
use std::collections::{BTreeMap, HashMap};

/// Source id -> slots inside the source's link list.
pub(crate) type Incoming = BTreeMap<NoteId, Vec<usize>>;

#[derive(Debug, Default)]
pub(crate) struct LinkIndex {
    forward: HashMap<NoteId, Vec<NoteId>>,
    reverse: HashMap<NoteId, Incoming>,
    edges: usize,
}

impl LinkIndex {
    /// Removes every edge owned by `source`.
    ///
    /// Targets left without incoming edges are dropped under
    /// `PlaceholderRetention::Collect` and kept as empty entries otherwise.
    /// Returns how many target entries were dropped.
    pub(crate) fn retract(&mut self, source: &str, retention: PlaceholderRetention) -> usize {
        let Some(targets) = self.forward.remove(source) else {
            return 0;
        };
        self.edges -= targets.len();

        let mut collected = 0;
        for target in targets {
            let Some(incoming) = self.reverse.get_mut(&target) else {
                continue;
            };
            // Duplicate targets were all removed by the first pass.
            if incoming.remove(source).is_none() {
                continue;
            }
            if incoming.is_empty() && retention == PlaceholderRetention::Collect {
                self.reverse.remove(&target);
                collected += 1;
            }
        }
        collected
    }

    /// Inserts one edge per link of `source`.
    ///
    /// Must follow `retract` for the same source.
    pub(crate) fn insert(&mut self, source: &str, links: &[Link]) {
        debug_assert!(
            !self.forward.contains_key(source),
            "edges inserted without retracting previous ones"
        );
        if links.is_empty() {
            return;
        }

        let mut targets = Vec::with_capacity(links.len());
        for (slot, link) in links.iter().enumerate() {
            self.reverse
                .entry(link.to.clone())
                .or_default()
                .entry(source.to_string())
                .or_default()
                .push(slot);
            targets.push(link.to.clone());
        }
        self.edges += targets.len();
        self.forward.insert(source.to_string(), targets);
    }

    pub(crate) fn targets(&self, source: &str) -> &[NoteId] {
        self.forward.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn incoming(&self, target: &str) -> Option<&Incoming> {
        self.reverse.get(target)
    }

    /// Whether `target` has a reverse entry, live or retained.
    pub(crate) fn knows_target(&self, target: &str) -> bool {
        self.reverse.contains_key(target)
    }

    pub(crate) fn target_ids(&self) -> impl Iterator<Item = &NoteId> {
        self.reverse.keys()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges
    }

    /// Panics when forward and reverse maps disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut reverse_slots = 0;
        for (target, incoming) in &self.reverse {
            for (source, slots) in incoming {
                assert!(!slots.is_empty(), "empty slot list {source} -> {target}");
                let targets = self.targets(source);
                for slot in slots {
                    assert_eq!(
                        targets.get(*slot).map(String::as_str),
                        Some(target.as_str()),
                        "reverse slot {slot} of {source} does not point at {target}"
                    );
                }
                reverse_slots += slots.len();
            }
        }
        let forward_edges: usize = self.forward.values().map(Vec::len).sum();
        assert_eq!(forward_edges, reverse_slots);
        assert_eq!(forward_edges, self.edges);
    }
}

#[cfg(test)]
mod tests {
    use super::LinkIndex;
    use crate::config::PlaceholderRetention;
    use crate::model::note::{Link, Position};

    fn link(to: &str) -> Link {
        Link::new(to, to, Position::default())
    }

    #[test]
    fn insert_records_both_directions() {
        let mut index = LinkIndex::default();
        index.insert("b", &[link("a"), link("c")]);

        assert_eq!(index.targets("b"), ["a".to_string(), "c".to_string()]);
        assert!(index.incoming("a").expect("a has incoming").contains_key("b"));
        assert!(index.incoming("c").expect("c has incoming").contains_key("b"));
        assert_eq!(index.edge_count(), 2);
        index.assert_consistent();
    }

    #[test]
    fn duplicate_targets_keep_one_slot_each() {
        let mut index = LinkIndex::default();
        index.insert("b", &[link("a"), link("x"), link("a")]);

        let slots = &index.incoming("a").expect("a has incoming")["b"];
        assert_eq!(slots, &vec![0, 2]);
        assert_eq!(index.edge_count(), 3);

        assert_eq!(index.retract("b", PlaceholderRetention::Collect), 2);
        assert!(index.incoming("a").is_none());
        assert_eq!(index.edge_count(), 0);
        index.assert_consistent();
    }

    #[test]
    fn retract_keeps_targets_with_other_sources() {
        let mut index = LinkIndex::default();
        index.insert("b", &[link("a")]);
        index.insert("c", &[link("a")]);

        index.retract("b", PlaceholderRetention::Collect);
        let incoming = index.incoming("a").expect("c still links a");
        assert_eq!(incoming.keys().collect::<Vec<_>>(), vec!["c"]);
        index.assert_consistent();
    }

    #[test]
    fn retain_policy_keeps_empty_entries() {
        let mut index = LinkIndex::default();
        index.insert("b", &[link("a")]);

        assert_eq!(index.retract("b", PlaceholderRetention::Retain), 0);
        assert!(index.knows_target("a"));
        assert!(index.incoming("a").expect("retained entry").is_empty());
        index.assert_consistent();
    }

    #[test]
    fn retract_of_unknown_source_is_a_no_op() {
        let mut index = LinkIndex::default();
        assert_eq!(index.retract("nobody", PlaceholderRetention::Collect), 0);
        assert!(index.targets("nobody").is_empty());
    }
}
