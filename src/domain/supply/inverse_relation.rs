//! Collection inverse variable supply: value -> entities reverse index.
//!
//! # Zero-Erasure Design
//!
//! - **Index-based**: stores `value -> entity_index` collections, not
//!   cloned entities; the caller resolves indices against the solution
//! - **Owned**: no `Arc`, `RwLock`, or interior mutability - `&mut self`
//! - **Generic**: full value type information preserved, no `dyn Any`

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::domain::descriptor::VariableDescriptor;
use crate::domain::listener::{ListenerLifecycle, VariableListener};
use crate::error::{CoreError, Result};

use super::ordered_set::OrderedEntitySet;

/// Compact a per-value set once tombstones outnumber live entries and the
/// slot vector is big enough for the rebuild to pay off.
const COMPACT_MIN_SLOTS: usize = 16;

/// Reverse index from each planning value to the ordered collection of
/// entities currently assigned to it.
///
/// For a variable where `entity.value = v`, this supply answers: "given
/// `v`, which entity indices have `entities[i].value == v`?" in O(1),
/// preserving insertion order. A value no entity points at yields an
/// empty collection, never a missing-key failure.
///
/// The hot-path cost is removal-by-identity when an entity moves away
/// from a value; each per-value collection is an index-stable slot vector
/// paired with an entity -> (value, slot) side table, so both the append
/// and the removal are O(1) amortized.
///
/// Accessors are plain fn pointers, keeping the supply `Send` and free of
/// borrows into the solution graph: the supply holds value identities and
/// entity indices only, never references to entities the score director
/// owns.
///
/// # Example
///
/// ```
/// use solvkit_core::{CollectionInverseVariableSupply, VariableDescriptor};
///
/// #[derive(Clone)]
/// struct Solution {
///     values: Vec<Option<u32>>,
/// }
///
/// let mut supply = CollectionInverseVariableSupply::new(
///     VariableDescriptor::genuine("value"),
///     |s: &Solution, i| s.values[i],
///     |s: &Solution| s.values.len(),
/// );
///
/// let mut solution = Solution { values: vec![Some(7), Some(7), None] };
/// supply.reset_working_solution(&solution).unwrap();
/// let assigned: Vec<usize> = supply.inverse_collection(&7).unwrap().iter().collect();
/// assert_eq!(assigned, vec![0, 1]);
///
/// supply.before_variable_changed(&solution, 1).unwrap();
/// solution.values[1] = Some(9);
/// supply.after_variable_changed(&solution, 1).unwrap();
///
/// assert_eq!(supply.inverse_collection(&7).unwrap().len(), 1);
/// assert_eq!(supply.inverse_collection(&9).unwrap().len(), 1);
/// ```
pub struct CollectionInverseVariableSupply<S, V>
where
    V: Clone + Eq + Hash,
{
    /// Descriptor of the genuine variable this supply tracks.
    source_descriptor: VariableDescriptor,
    /// Reads the tracked variable of the entity at the given index.
    value_at: fn(&S, usize) -> Option<V>,
    /// Number of entities in the working solution.
    entity_count: fn(&S) -> usize,
    state: ListenerLifecycle,
    /// Per-value insertion-ordered entity collections.
    collections: HashMap<V, OrderedEntitySet>,
    /// Entity -> (value, slot) side table for O(1) removal-by-identity.
    positions: HashMap<usize, (V, usize)>,
    /// Old value captured by an open before/after bracket.
    pending: Option<(usize, Option<V>)>,
}

impl<S, V> CollectionInverseVariableSupply<S, V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an uninitialized supply tracking the given genuine variable.
    ///
    /// No reads or change notifications are valid until
    /// [`reset_working_solution`](Self::reset_working_solution).
    pub fn new(
        source_descriptor: VariableDescriptor,
        value_at: fn(&S, usize) -> Option<V>,
        entity_count: fn(&S) -> usize,
    ) -> Self {
        CollectionInverseVariableSupply {
            source_descriptor,
            value_at,
            entity_count,
            state: ListenerLifecycle::Uninitialized,
            collections: HashMap::new(),
            positions: HashMap::new(),
            pending: None,
        }
    }

    /// Returns the descriptor of the tracked genuine variable.
    pub fn source_descriptor(&self) -> &VariableDescriptor {
        &self.source_descriptor
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ListenerLifecycle {
        self.state
    }

    /// Rebuilds the reverse index from a full scan of `solution`.
    ///
    /// Valid from `Uninitialized` or `Cleared` only.
    pub fn reset_working_solution(&mut self, solution: &S) -> Result<()> {
        if self.state == ListenerLifecycle::Active {
            return Err(CoreError::InvalidState(
                "reset_working_solution called while already active; \
                 clear_working_solution first"
                    .to_string(),
            ));
        }
        self.collections.clear();
        self.positions.clear();
        self.pending = None;
        let count = (self.entity_count)(solution);
        for entity in 0..count {
            if let Some(value) = (self.value_at)(solution, entity) {
                self.track(entity, value);
            }
        }
        self.state = ListenerLifecycle::Active;
        debug!(
            variable = self.source_descriptor.name,
            entities = count,
            values = self.collections.len(),
            "inverse supply rebuilt"
        );
        Ok(())
    }

    /// Captures the entity's current value as the "old value" for the
    /// matching [`after_variable_changed`](Self::after_variable_changed).
    pub fn before_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()> {
        self.require_active("before_variable_changed")?;
        if let Some((open_entity, _)) = &self.pending {
            return Err(CoreError::StateSequence(format!(
                "before_variable_changed(entity {}) while the bracket for entity {} \
                 is still open",
                entity_index, open_entity
            )));
        }
        self.pending = Some((entity_index, (self.value_at)(solution, entity_index)));
        Ok(())
    }

    /// Moves the entity from its old value's collection to its new
    /// value's collection.
    ///
    /// A `None` new value removes without re-adding; a new value equal to
    /// the old value leaves the collections untouched, so the entity
    /// keeps its position.
    pub fn after_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()> {
        self.require_active("after_variable_changed")?;
        let (pending_entity, old_value) = self.pending.take().ok_or_else(|| {
            CoreError::StateSequence(format!(
                "after_variable_changed(entity {}) without a preceding \
                 before_variable_changed",
                entity_index
            ))
        })?;
        if pending_entity != entity_index {
            let err = CoreError::StateSequence(format!(
                "after_variable_changed(entity {}) does not match the open bracket \
                 (entity {})",
                entity_index, pending_entity
            ));
            self.pending = Some((pending_entity, old_value));
            return Err(err);
        }
        let new_value = (self.value_at)(solution, entity_index);
        if new_value == old_value {
            // No-op move: the entity keeps its position in the collection.
            return Ok(());
        }
        self.untrack(entity_index);
        if let Some(value) = new_value {
            self.track(entity_index, value);
        }
        Ok(())
    }

    /// Releases the reverse index. Valid from `Active` only; an open
    /// bracket is a contract violation.
    pub fn clear_working_solution(&mut self) -> Result<()> {
        self.require_active("clear_working_solution")?;
        if let Some((entity, _)) = &self.pending {
            return Err(CoreError::StateSequence(format!(
                "clear_working_solution while the bracket for entity {} is still open",
                entity
            )));
        }
        self.collections.clear();
        self.positions.clear();
        self.state = ListenerLifecycle::Cleared;
        debug!(
            variable = self.source_descriptor.name,
            "inverse supply cleared"
        );
        Ok(())
    }

    /// Returns the ordered collection of entity indices currently
    /// assigned `value`.
    ///
    /// A value no entity points at yields an empty collection.
    pub fn inverse_collection(&self, value: &V) -> Result<InverseCollection<'_>> {
        self.require_active("inverse_collection")?;
        Ok(InverseCollection {
            set: self.collections.get(value),
        })
    }

    /// Returns how many entities are currently assigned `value`.
    pub fn inverse_count(&self, value: &V) -> Result<usize> {
        self.require_active("inverse_count")?;
        Ok(self.collections.get(value).map_or(0, OrderedEntitySet::len))
    }

    fn track(&mut self, entity: usize, value: V) {
        let set = self.collections.entry(value.clone()).or_default();
        let slot = set.push(entity);
        self.positions.insert(entity, (value, slot));
    }

    fn untrack(&mut self, entity: usize) {
        let Some((value, slot)) = self.positions.remove(&entity) else {
            // Old value was unassigned; nothing to remove.
            return;
        };
        let set = self
            .collections
            .get_mut(&value)
            .expect("side table points at a tracked value");
        set.remove(slot);
        if set.is_empty() {
            // No live slots left, so no side table entry points in here.
            self.collections.remove(&value);
            return;
        }
        if set.tombstones() > set.len() && set.tombstones() + set.len() >= COMPACT_MIN_SLOTS {
            let positions = &mut self.positions;
            set.compact(|entity, new_slot| {
                if let Some((_, slot)) = positions.get_mut(&entity) {
                    *slot = new_slot;
                }
            });
        }
    }

    fn require_active(&self, operation: &str) -> Result<()> {
        if self.state != ListenerLifecycle::Active {
            return Err(CoreError::InvalidState(format!(
                "{} called in {:?} state; call reset_working_solution first",
                operation, self.state
            )));
        }
        Ok(())
    }
}

impl<S, V> VariableListener<S> for CollectionInverseVariableSupply<S, V>
where
    V: Clone + Eq + Hash + Send,
{
    fn source_variable(&self) -> &str {
        self.source_descriptor.name
    }

    fn reset_working_solution(&mut self, solution: &S) -> Result<()> {
        CollectionInverseVariableSupply::reset_working_solution(self, solution)
    }

    fn before_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()> {
        CollectionInverseVariableSupply::before_variable_changed(self, solution, entity_index)
    }

    fn after_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()> {
        CollectionInverseVariableSupply::after_variable_changed(self, solution, entity_index)
    }

    fn clear_working_solution(&mut self) -> Result<()> {
        CollectionInverseVariableSupply::clear_working_solution(self)
    }
}

impl<S, V> std::fmt::Debug for CollectionInverseVariableSupply<S, V>
where
    V: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionInverseVariableSupply")
            .field("variable", &self.source_descriptor.name)
            .field("state", &self.state)
            .field("tracked_entities", &self.positions.len())
            .field("values", &self.collections.len())
            .finish()
    }
}

/// Ordered view of the entities currently assigned one value.
///
/// Borrowed from the supply; iteration yields entity indices in insertion
/// order.
#[derive(Debug, Clone, Copy)]
pub struct InverseCollection<'a> {
    set: Option<&'a OrderedEntitySet>,
}

impl<'a> InverseCollection<'a> {
    /// Number of entities assigned the value.
    pub fn len(&self) -> usize {
        self.set.map_or(0, OrderedEntitySet::len)
    }

    /// Returns true if no entity is assigned the value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity indices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + 'a {
        self.set.into_iter().flat_map(OrderedEntitySet::iter)
    }
}

impl<'a> IntoIterator for InverseCollection<'a> {
    type Item = usize;
    type IntoIter = Box<dyn Iterator<Item = usize> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.set.into_iter().flat_map(OrderedEntitySet::iter))
    }
}
