//! Index-stable ordered set of entity indices.

/// An insertion-ordered collection of entity indices with O(1) append and
/// O(1) removal by slot.
///
/// Removal tombstones the slot instead of shifting, so slots handed out
/// by [`push`](OrderedEntitySet::push) stay valid until the next
/// [`compact`](OrderedEntitySet::compact). Iteration skips tombstones and
/// preserves insertion order.
#[derive(Debug, Default)]
pub(crate) struct OrderedEntitySet {
    slots: Vec<Option<usize>>,
    len: usize,
}

impl OrderedEntitySet {
    pub(crate) fn new() -> Self {
        OrderedEntitySet {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Appends an entity and returns the slot it occupies.
    pub(crate) fn push(&mut self, entity: usize) -> usize {
        self.slots.push(Some(entity));
        self.len += 1;
        self.slots.len() - 1
    }

    /// Tombstones the given slot.
    pub(crate) fn remove(&mut self, slot: usize) {
        debug_assert!(self.slots[slot].is_some(), "slot {} already removed", slot);
        self.slots[slot] = None;
        self.len -= 1;
    }

    /// Number of live entities.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of tombstoned slots awaiting compaction.
    pub(crate) fn tombstones(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Live entities in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Drops tombstones, renumbering the surviving slots.
    ///
    /// Calls `reindex(entity, new_slot)` for every live entity so the
    /// caller can patch its entity -> slot side table.
    pub(crate) fn compact(&mut self, mut reindex: impl FnMut(usize, usize)) {
        self.slots.retain(|slot| slot.is_some());
        for (new_slot, slot) in self.slots.iter().enumerate() {
            // retain() kept only Some slots
            if let Some(entity) = slot {
                reindex(*entity, new_slot);
            }
        }
        debug_assert_eq!(self.slots.len(), self.len);
    }
}
