//! Strongly typed identifier wrappers.
//!
//! Both IDs are plain `Copy` values.  A person sits in every queue of the
//! chain at once, so each queue holds its own copy of the same `PersonId`;
//! there is no shared object behind the identifier to alias.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
///
/// `$label` is the prefix used by `Display`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A simulated person, numbered in seeding order from 0.
    pub struct PersonId(u32) => "Person";
}

typed_id! {
    /// Position of a queue in the chain.  0 is the collector, `N-1` the entry.
    pub struct QueueIndex(u32) => "Queue";
}

impl QueueIndex {
    /// The terminal queue from which served people are discarded.
    pub const COLLECTOR: QueueIndex = QueueIndex(0);

    #[inline]
    pub fn is_collector(self) -> bool {
        self == Self::COLLECTOR
    }
}
