//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! parameter tables can be indexed with `id.index()` directly.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
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
                write!(f, "{}({})", stringify!($name), self.0)
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
    /// Index of an agent in the enclosing population.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a contact network among all networks configured for a run.
    pub struct NetworkId(u32);
}

typed_id! {
    /// Dense index of a modeled disease.  A run rarely models more than a
    /// handful concurrently, so `u8` is plenty.
    pub struct DiseaseId(u8);
}

typed_id! {
    /// Row of the transmission-probability matrix for one disease.
    pub struct GroupId(u16);
}

impl GroupId {
    /// The only group under the single-group policy.
    pub const DEFAULT: GroupId = GroupId(0);
}

impl DiseaseId {
    /// Iterator over `DiseaseId(0) .. DiseaseId(count)`.
    pub fn all(count: u8) -> impl Iterator<Item = DiseaseId> {
        (0..count).map(DiseaseId)
    }
}
