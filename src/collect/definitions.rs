//! First-seen-wins definition registry.

use std::collections::HashMap;

use crate::ir::{ObjectId, ObjectRecord};

/// Model definitions keyed by ID, in first-encountered order.
///
/// Registering an ID that is already present is a no-op: the first record
/// seen for an ID is the one its IDE line is built from. Later records with
/// the same ID are neither merged nor treated as errors.
#[derive(Clone, Debug, Default)]
pub struct Definitions<'a> {
    entries: Vec<(ObjectId, &'a ObjectRecord)>,
    index: HashMap<ObjectId, usize>,
}

impl<'a> Definitions<'a> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `record` under `id` unless `id` is already known.
    ///
    /// Returns true if the record was stored.
    pub fn register(&mut self, id: ObjectId, record: &'a ObjectRecord) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push((id, record));
        true
    }

    /// Looks up the stored record for an ID.
    pub fn get(&self, id: ObjectId) -> Option<&'a ObjectRecord> {
        self.index.get(&id).map(|&idx| self.entries[idx].1)
    }

    /// Number of distinct IDs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no definition has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, record)` pairs in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &'a ObjectRecord)> + '_ {
        self.entries.iter().copied()
    }

    /// Stored IDs in first-encountered order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.entries.iter().map(|&(id, _)| id)
    }
}
