//! Bidirectional "checked" relation between check-lists and items.
//!
//! # Invariants
//! - For every pair, `by_check_list_id[c][i] == by_item_id[i][c]`.
//! - Both mirrors are only written through [`CheckedRelation::set`].
//! - Inner maps keep the order in which each pair was first recorded.
//! - Ids are not checked against the item or check-list tables.

use crate::model::id::{CheckListId, ItemId};
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedRelation {
    by_check_list_id: HashMap<CheckListId, IndexMap<ItemId, bool>>,
    by_item_id: HashMap<ItemId, IndexMap<CheckListId, bool>>,
}

impl CheckedRelation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `checked` for the pair in both mirrors.
    pub fn set(&mut self, check_list_id: &CheckListId, item_id: &ItemId, checked: bool) {
        self.by_check_list_id
            .entry(check_list_id.clone())
            .or_default()
            .insert(item_id.clone(), checked);
        self.by_item_id
            .entry(item_id.clone())
            .or_default()
            .insert(check_list_id.clone(), checked);
    }

    /// Returns `false` for pairs that were never recorded.
    pub fn get(&self, check_list_id: &CheckListId, item_id: &ItemId) -> bool {
        self.by_check_list_id
            .get(check_list_id)
            .and_then(|items| items.get(item_id))
            .copied()
            .unwrap_or(false)
    }

    /// Item ids currently checked within `check_list_id`.
    pub fn checked_item_ids(&self, check_list_id: &CheckListId) -> Vec<&ItemId> {
        self.by_check_list_id
            .get(check_list_id)
            .map(checked_keys)
            .unwrap_or_default()
    }

    /// Check-list ids in which `item_id` is currently checked.
    pub fn checked_check_list_ids(&self, item_id: &ItemId) -> Vec<&CheckListId> {
        self.by_item_id
            .get(item_id)
            .map(checked_keys)
            .unwrap_or_default()
    }

    /// Number of recorded pairs, checked or not.
    pub fn len(&self) -> usize {
        self.by_check_list_id.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn checked_keys<K>(entries: &IndexMap<K, bool>) -> Vec<&K> {
    entries
        .iter()
        .filter(|(_, checked)| **checked)
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::CheckedRelation;
    use crate::model::id::{CheckListId, ItemId};

    #[test]
    fn set_updates_both_mirrors() {
        let mut relation = CheckedRelation::new();
        let c1 = CheckListId::from("c1");
        let i1 = ItemId::from("i1");

        relation.set(&c1, &i1, true);
        assert!(relation.get(&c1, &i1));
        assert_eq!(relation.checked_item_ids(&c1), vec![&i1]);
        assert_eq!(relation.checked_check_list_ids(&i1), vec![&c1]);

        relation.set(&c1, &i1, false);
        assert!(!relation.get(&c1, &i1));
        assert!(relation.checked_item_ids(&c1).is_empty());
        assert!(relation.checked_check_list_ids(&i1).is_empty());
        assert_eq!(relation.len(), 1);
    }

    #[test]
    fn unknown_pairs_read_as_unchecked() {
        let relation = CheckedRelation::new();
        let c = CheckListId::from("missing");
        let i = ItemId::from("missing");
        assert!(!relation.get(&c, &i));
        assert!(relation.checked_item_ids(&c).is_empty());
        assert!(relation.checked_check_list_ids(&i).is_empty());
        assert!(relation.is_empty());
    }

    #[test]
    fn checked_ids_keep_first_recorded_order() {
        let mut relation = CheckedRelation::new();
        let c1 = CheckListId::from("c1");
        let ids = ["i3", "i1", "i2"].map(ItemId::from);
        for id in &ids {
            relation.set(&c1, id, true);
        }
        relation.set(&c1, &ids[1], false);
        relation.set(&c1, &ids[1], true);

        assert_eq!(
            relation.checked_item_ids(&c1),
            vec![&ids[0], &ids[1], &ids[2]]
        );
    }
}
