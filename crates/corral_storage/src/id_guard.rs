//! Recyclable monotonic identifier allocation.

use std::collections::BTreeSet;

use corral_foundation::EntityId;

/// Hands out unique positive ids up to a fixed maximum and accepts released
/// ids back for reuse.
///
/// Freed ids are reissued smallest-first before the monotonic counter
/// advances. Once the counter has reached `max_id` with no freed ids pending,
/// the guard is overflowed: every further request yields
/// [`EntityId::UNDEFINED`], and freeing ids afterwards does not revive it.
/// Overflow means the id space is provably exhausted, which is distinct from
/// an individual id happening to be free; only [`reset`](Self::reset) clears
/// the condition.
#[derive(Debug)]
pub struct IdGuard {
    max_id: u32,
    current: u32,
    freed: BTreeSet<EntityId>,
    overflowed: bool,
}

impl IdGuard {
    /// Creates a guard issuing ids `1..=max_id`.
    #[must_use]
    pub fn new(max_id: u32) -> Self {
        Self {
            max_id,
            current: 0,
            freed: BTreeSet::new(),
            overflowed: false,
        }
    }

    /// Returns the next unique id, or [`EntityId::UNDEFINED`] once the id
    /// space is exhausted.
    pub fn next_id(&mut self) -> EntityId {
        if self.overflowed {
            return EntityId::UNDEFINED;
        }
        if let Some(id) = self.freed.pop_first() {
            return id;
        }
        if self.current == self.max_id {
            self.overflowed = true;
            return EntityId::UNDEFINED;
        }
        self.current += 1;
        EntityId::new(self.current)
    }

    /// Releases an id for reuse.
    ///
    /// The id is not validated against the issue history; passing an id that
    /// was never issued is a caller error.
    pub fn free_id(&mut self, id: EntityId) {
        self.freed.insert(id);
    }

    /// Returns true once the id space has been exhausted.
    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Returns the guard to its initial state: counter at zero, no freed ids,
    /// overflow cleared.
    pub fn reset(&mut self) {
        self.current = 0;
        self.freed.clear();
        self.overflowed = false;
    }
}
