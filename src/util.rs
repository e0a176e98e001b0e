use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

/// Result of [`other_value`]: which member of a pair is the "other" one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtherValue<T> {
    /// The given value matched the second member; this is the first.
    First(T),
    /// The given value matched the first member; this is the second.
    Second(T),
    /// The given value matched neither member.
    Neither,
}

impl<T> OtherValue<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            OtherValue::First(value) | OtherValue::Second(value) => Some(value),
            OtherValue::Neither => None,
        }
    }
}

/// Given one member of a pair, returns the other.  The first member is
/// compared before the second, so for a pair of equal values the second is
/// returned.
pub fn other_value<'a, T: PartialEq>(
    (first, second): (&'a T, &'a T),
    value: &T,
) -> OtherValue<&'a T> {
    if value == first {
        OtherValue::Second(second)
    } else if value == second {
        OtherValue::First(first)
    } else {
        OtherValue::Neither
    }
}

/// Hashes a pair of values so that the result does not depend on their
/// order.
pub fn unordered_hash<T: Hash>(a: &T, b: &T) -> u64 {
    let hasher = BuildHasherDefault::<DefaultHasher>::default();
    hasher.hash_one(a).wrapping_add(hasher.hash_one(b))
}
