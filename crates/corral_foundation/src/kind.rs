//! The closed component-kind enumeration and the bitset over it.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of component kinds an entity can carry.
///
/// The set of variants is fixed per build; the count is derived from
/// [`ComponentKind::ALL`] so there is no separate index constant to keep in
/// sync when a kind is added.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ComponentKind {
    /// Placement in the world.
    Position = 0,
    /// Velocity and steering.
    Movable = 1,
    /// Render layer membership.
    Visible = 2,
    /// Collision mass.
    Tangible = 3,
}

impl ComponentKind {
    /// Every kind, in ascending index order.
    pub const ALL: [Self; 4] = [Self::Position, Self::Movable, Self::Visible, Self::Tangible];

    /// Number of distinct kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// The kind's bit index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-width bitset recording which component kinds are present.
///
/// Bit *i* set means a component of kind *i* is attached. Bitwise `&`, `|`,
/// and `^` follow the usual set semantics and are used to derive "requested
/// but not yet attached" and "attached and also requested" masks.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KindSet {
    bits: u32,
}

impl KindSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Set containing the single given kind.
    #[must_use]
    pub const fn of(kind: ComponentKind) -> Self {
        Self {
            bits: 1 << kind.index(),
        }
    }

    /// Returns true if the kind's bit is set.
    #[must_use]
    pub const fn contains(self, kind: ComponentKind) -> bool {
        self.bits & (1 << kind.index()) != 0
    }

    /// Sets the kind's bit.
    pub fn insert(&mut self, kind: ComponentKind) {
        self.bits |= 1 << kind.index();
    }

    /// Clears the kind's bit.
    pub fn remove(&mut self, kind: ComponentKind) {
        self.bits &= !(1 << kind.index());
    }

    /// Flips the kind's bit.
    pub fn toggle(&mut self, kind: ComponentKind) {
        self.bits ^= 1 << kind.index();
    }

    /// Returns true if any bit is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.bits != 0
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of set bits.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// The single set kind, if exactly one bit is set.
    #[must_use]
    pub fn single(self) -> Option<ComponentKind> {
        if self.len() == 1 { self.iter().next() } else { None }
    }

    /// Iterates over the set kinds in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = ComponentKind> {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl BitAnd for KindSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for KindSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitXor for KindSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits ^ rhs.bits,
        }
    }
}

impl FromIterator<ComponentKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = ComponentKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
