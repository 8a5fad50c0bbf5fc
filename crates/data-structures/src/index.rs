//! Index types.

use std::fmt;

pub use index_vec::{Idx, IndexVec};

macro_rules! base_index {
    ($(#[$attr:meta])* $name:ident($primitive:ident || $non_zero:ident <= $max:literal)) => {
        /// A specialized wrapper around a primitive number.
        ///
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name {
            value: std::num::$non_zero,
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.get(), f)
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.get())
            }
        }

        impl Idx for $name {
            #[inline]
            fn from_usize(value: usize) -> Self {
                assert!(value <= Self::MAX_AS as usize);
                Self::new(value as $primitive)
            }

            #[inline]
            fn index(self) -> usize {
                self.get() as usize
            }
        }

        impl $name {
            /// The maximum raw index value.
            pub const MAX_AS: $primitive = $max;

            /// The maximum index value.
            pub const MAX: Self = Self::new(Self::MAX_AS);

            /// Creates a new `$name` from the given `value`.
            ///
            /// # Panics
            ///
            /// Panics if `value` exceeds `MAX`.
            #[inline]
            pub const fn new(value: $primitive) -> Self {
                assert!(value <= Self::MAX_AS);
                match std::num::$non_zero::new(value + 1) {
                    Some(value) => Self { value },
                    None => panic!("index overflowed"),
                }
            }

            /// Gets the underlying index value.
            #[inline]
            pub const fn get(self) -> $primitive {
                self.value.get() - 1
            }
        }
    };
}

base_index! {
    /// The position of a [`Node`](crate::deque::Node) in the arena of a
    /// [`LinkedDeque`](crate::deque::LinkedDeque).
    ///
    /// Stored with a niche so that `Option<NodeId>` is the same size as `NodeId`.
    NodeId(u32 || NonZeroU32 <= 0xFFFF_FF00)
}
