//! Fixed-capacity contiguous pool with swap-remove compaction.
//!
//! The pool owns a single backing buffer sized for exactly `capacity`
//! elements, reserved once at construction and never reallocated. Live
//! elements occupy the prefix `[0, len)`; removal overwrites the removed slot
//! with the current last live element and shrinks the live count, so both
//! insertion and removal are O(1) at the cost of positional order.
//!
//! Stored types must not tie their identity to the slot they occupy: any
//! element can be relocated to a lower slot by compaction. Long-lived
//! references across such churn go through [`SafeCursor`], which the pool
//! retargets or invalidates on every compaction, reset, and clear.

use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Position of a live element inside a [`ContiguousPool`].
///
/// Indices are dense: a pool with `len()` elements has live indices
/// `0..len()`. Compaction moves elements between indices, so a stored
/// `PoolIndex` is only meaningful until the next removal; use a
/// [`SafeCursor`] to follow an element across removals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PoolIndex(usize);

impl PoolIndex {
    pub(crate) const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw slot offset.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CursorState {
    Invalid,
    Tracking(usize),
}

/// A pool-registered cursor that survives compaction.
///
/// While valid, the cursor follows one logical element: if compaction
/// relocates that element, the cursor is retargeted to its new slot; if the
/// element itself is removed, or the pool is reset or cleared, the cursor
/// becomes invalid and stays invalid. A cursor minted on an empty pool (or at
/// an out-of-range index) starts invalid.
///
/// The element is read back through the pool that minted the cursor, via
/// [`ContiguousPool::tracked`] or [`ContiguousPool::tracked_mut`].
#[derive(Debug, Clone)]
pub struct SafeCursor {
    state: Rc<Cell<CursorState>>,
}

impl SafeCursor {
    /// Returns true while the cursor still tracks a live element.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.state.get(), CursorState::Tracking(_))
    }

    /// The slot currently occupied by the tracked element, if still valid.
    #[must_use]
    pub fn index(&self) -> Option<PoolIndex> {
        match self.state.get() {
            CursorState::Tracking(raw) => Some(PoolIndex::new(raw)),
            CursorState::Invalid => None,
        }
    }
}

/// Fixed-capacity contiguous arena with O(1) allocation and removal.
///
/// Two usage styles, matching the two removal operations:
///
/// - **Owned values**: [`allocate`](Self::allocate) /
///   [`deallocate`](Self::deallocate) move values in and drop them on
///   removal.
/// - **Pre-initialized slots**: [`with_init`](Self::with_init) constructs
///   every slot once up front; [`acquire`](Self::acquire) /
///   [`release`](Self::release) then hand slots out and take them back
///   without constructing or dropping, so elements are reused by overwrite.
///   [`reset`](Self::reset) returns every slot to the free region the same
///   way.
///
/// Capacity exhaustion and misuse of the pre-initialized protocol are
/// programmer errors and panic; they are configuration bugs, not recoverable
/// conditions.
#[derive(Debug)]
pub struct ContiguousPool<T> {
    /// Initialized prefix of the backing buffer; live elements are
    /// `slots[..live]`, retained (released but still initialized) values
    /// fill `slots[live..]`.
    slots: Vec<T>,
    live: usize,
    capacity: usize,
    cursors: Vec<Weak<Cell<CursorState>>>,
}

impl<T> ContiguousPool<T> {
    /// Creates an empty pool able to hold `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `T` is zero-sized; both are
    /// configuration errors.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "pool capacity must be positive");
        assert!(size_of::<T>() > 0, "pool elements must occupy storage");
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
            capacity,
            cursors: Vec::new(),
        }
    }

    /// Creates a pool with every slot constructed once via `init`.
    ///
    /// The pool starts logically empty (`len() == 0`); [`acquire`](Self::acquire)
    /// hands out the pre-built values for reuse by overwrite.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`new`](Self::new).
    #[must_use]
    pub fn with_init(capacity: usize, init: impl FnMut() -> T) -> Self {
        let mut pool = Self::new(capacity);
        pool.slots.extend(std::iter::repeat_with(init).take(capacity));
        pool
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Maximum number of elements this pool can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no element is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Stores `value` in the next free slot and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the pool is full; capacity is fixed and never grows.
    pub fn allocate(&mut self, value: T) -> PoolIndex {
        assert!(self.live < self.capacity, "pool capacity exhausted");
        if self.live < self.slots.len() {
            self.slots[self.live] = value;
        } else {
            self.slots.push(value);
        }
        self.live += 1;
        PoolIndex::new(self.live - 1)
    }

    /// Reserves the next slot without constructing anything, returning its
    /// index. The slot keeps whatever value it last held.
    ///
    /// # Panics
    ///
    /// Panics if the pool is full, or if the slot past the live prefix was
    /// never initialized (the pool was not built with
    /// [`with_init`](Self::with_init) and the slot never held a value).
    pub fn acquire(&mut self) -> PoolIndex {
        assert!(self.live < self.capacity, "pool capacity exhausted");
        assert!(
            self.live < self.slots.len(),
            "no initialized slot to reuse; pool was not pre-initialized"
        );
        self.live += 1;
        PoolIndex::new(self.live - 1)
    }

    /// Returns a slot's storage without dropping its value.
    ///
    /// The last live element is swapped into the vacated slot and the live
    /// count shrinks by one; the released value stays in the buffer for
    /// reuse via [`acquire`](Self::acquire).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not live.
    pub fn release(&mut self, index: PoolIndex) {
        assert!(index.0 < self.live, "release of a slot that is not live");
        let last = self.live - 1;
        self.slots.swap(index.0, last);
        self.live = last;
        self.repair_cursors(index.0, last);
    }

    /// Removes and drops the element at `index`.
    ///
    /// Compaction is the same swap-remove as [`release`](Self::release); the
    /// removed value itself is dropped immediately.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not live.
    pub fn deallocate(&mut self, index: PoolIndex) {
        assert!(index.0 < self.live, "deallocate of a slot that is not live");
        let last = self.live - 1;
        self.slots.swap(index.0, last);
        self.live = last;
        // Rotate the dead value past any retained slots so it can drop now.
        let end = self.slots.len() - 1;
        self.slots.swap(last, end);
        self.slots.pop();
        self.repair_cursors(index.0, last);
    }

    /// Drops every element, live and retained, and empties the pool.
    ///
    /// All outstanding cursors become invalid. A pre-initialized pool loses
    /// its reusable slots; use [`reset`](Self::reset) to keep them.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
        self.invalidate_cursors();
    }

    /// Returns every live slot to the free region without dropping values.
    ///
    /// All outstanding cursors become invalid.
    pub fn reset(&mut self) {
        self.live = 0;
        self.invalidate_cursors();
    }

    /// Returns true if `index` refers to a live element.
    #[must_use]
    pub fn contains(&self, index: PoolIndex) -> bool {
        index.0 < self.live
    }

    /// The live element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: PoolIndex) -> Option<&T> {
        self.slots[..self.live].get(index.0)
    }

    /// Mutable access to the live element at `index`, if any.
    pub fn get_mut(&mut self, index: PoolIndex) -> Option<&mut T> {
        self.slots[..self.live].get_mut(index.0)
    }

    /// Iterates over the live elements in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots[..self.live].iter()
    }

    /// Mutably iterates over the live elements in slot order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots[..self.live].iter_mut()
    }

    /// Mints a cursor tracking the element at `index`.
    ///
    /// A cursor at an index that is not live (in particular, any cursor
    /// minted on an empty pool) starts invalid.
    pub fn cursor(&mut self, index: PoolIndex) -> SafeCursor {
        let state = if index.0 < self.live {
            CursorState::Tracking(index.0)
        } else {
            CursorState::Invalid
        };
        let cell = Rc::new(Cell::new(state));
        self.cursors.push(Rc::downgrade(&cell));
        SafeCursor { state: cell }
    }

    /// The element a cursor tracks, if the cursor is still valid.
    #[must_use]
    pub fn tracked(&self, cursor: &SafeCursor) -> Option<&T> {
        let index = cursor.index()?;
        self.get(index)
    }

    /// Mutable access to the element a cursor tracks, if still valid.
    pub fn tracked_mut(&mut self, cursor: &SafeCursor) -> Option<&mut T> {
        let index = cursor.index()?;
        self.get_mut(index)
    }

    /// Moves a cursor to the next live slot, invalidating it at the end of
    /// the live prefix.
    pub fn advance(&self, cursor: &SafeCursor) {
        let next = match cursor.state.get() {
            CursorState::Tracking(raw) if raw + 1 < self.live => CursorState::Tracking(raw + 1),
            _ => CursorState::Invalid,
        };
        cursor.state.set(next);
    }

    /// Retargets cursors after the swap that removed `removed` and relocated
    /// the element previously at `relocated_from`. Dropped cursors are
    /// pruned along the way.
    fn repair_cursors(&mut self, removed: usize, relocated_from: usize) {
        self.cursors.retain(|weak| {
            let Some(cell) = weak.upgrade() else {
                return false;
            };
            match cell.get() {
                CursorState::Tracking(raw) if raw == removed => {
                    cell.set(CursorState::Invalid);
                }
                CursorState::Tracking(raw) if raw == relocated_from => {
                    cell.set(CursorState::Tracking(removed));
                }
                _ => {}
            }
            true
        });
    }

    fn invalidate_cursors(&mut self) {
        self.cursors.retain(|weak| {
            let Some(cell) = weak.upgrade() else {
                return false;
            };
            cell.set(CursorState::Invalid);
            true
        });
    }
}
