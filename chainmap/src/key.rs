//! The contract every key stored in a [`ChainMap`](crate::ChainMap) satisfies.
//!
//! Equality and hashing come from `Eq` and `Hash`: keys that compare equal
//! must feed identical data to the hasher. On top of that a key type may
//! declare an absence sentinel, a value that stands for "no key" and is
//! rejected by the map instead of being stored.

use alloc::string::String;
use core::hash::Hash;

/// A key type usable with [`ChainMap`](crate::ChainMap).
pub trait MapKey: Hash + Eq {
    /// Returns true if this value is the type's absence sentinel.
    ///
    /// Most types have no such value and keep the default.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_map_key {
    ($($t:ty),* $(,)?) => {
        $(impl MapKey for $t {})*
    };
}

impl_map_key!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    String,
);

impl MapKey for str {}

impl MapKey for &str {}

impl<T: MapKey> MapKey for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(MapKey::is_absent)
    }
}

impl<A: MapKey, B: MapKey> MapKey for (A, B) {
    #[inline]
    fn is_absent(&self) -> bool {
        self.0.is_absent() || self.1.is_absent()
    }
}
