use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use derivative::Derivative;

use crate::set::{MutableSet, Set, equal, fmt_set};

/// A mutable set backed by a hash map from each item to a unit marker.
///
/// Not thread-safe; a single owner mutates it at a time.
#[derive(Derivative)]
#[derivative(Clone(bound = "T: Clone"), Default(bound = ""))]
pub struct MapSet<T> {
    items: HashMap<T, ()>,
}

impl<T> MapSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a set holding the given items, ignoring duplicates.
    pub fn of<I>(items: I) -> Self
    where
        T: Eq + Hash,
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    /// Iterates over the items by reference.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.keys()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Creates a [`MapSet`] holding the given items.
pub fn of<T, I>(items: I) -> MapSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    MapSet::of(items)
}

impl<T> Set<T> for MapSet<T>
where
    T: Eq + Hash + Clone,
{
    fn contains(&self, item: &T) -> bool {
        self.items.contains_key(item)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.items.keys().cloned())
    }
}

impl<T> MutableSet<T> for MapSet<T>
where
    T: Eq + Hash + Clone,
{
    fn add(&mut self, item: T) -> bool {
        self.items.insert(item, ()).is_none()
    }

    fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item).is_some()
    }
}

impl<T> FromIterator<T> for MapSet<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|item| (item, ())).collect(),
        }
    }
}

impl<T> Extend<T> for MapSet<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T> PartialEq for MapSet<T>
where
    T: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

impl<T> Eq for MapSet<T> where T: Eq + Hash + Clone {}

impl<T> Debug for MapSet<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.keys()).finish()
    }
}

impl<T> Display for MapSet<T>
where
    T: Eq + Hash + Clone + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::set::to_vec;

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8),
        Remove(u8),
    }

    impl quickcheck::Arbitrary for Op {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let value = u8::arbitrary(g) % 16;
            if bool::arbitrary(g) {
                Op::Add(value)
            } else {
                Op::Remove(value)
            }
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut set = MapSet::<&str>::new();
        assert!(set.is_empty());
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.contains(&"a"));
        assert_eq!(set.len(), 1);
        assert!(set.remove(&"a"));
        assert!(!set.remove(&"a"));
        assert!(!set.contains(&"a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_of_ignores_duplicates() {
        let set = of([3, 1, 3, 2, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set, of([1, 2, 3]));
    }

    #[test]
    fn test_display() {
        assert_eq!(MapSet::<u8>::new().to_string(), "[]");
        assert_eq!(of(["x"]).to_string(), "[x]");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", of([5])), "{5}");
    }

    #[test]
    fn test_with_capacity_and_clear() {
        let mut set = MapSet::with_capacity(8);
        assert!(set.is_empty());
        assert!(set.add_all([1, 2, 3]));
        assert_eq!(set.len(), 3);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert!(set.add(1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set = of([1]);
        let copy = set.clone();
        set.add(2);
        assert_eq!(copy.len(), 1);
        assert_eq!(set.len(), 2);
    }

    #[quickcheck]
    fn prop_contains_reflects_net_effect(ops: Vec<Op>) -> bool {
        let mut set = MapSet::new();
        let mut model = std::collections::HashSet::new();
        for op in ops {
            let (changed, expected) = match op {
                Op::Add(v) => (set.add(v), model.insert(v)),
                Op::Remove(v) => (set.remove(&v), model.remove(&v)),
            };
            if changed != expected {
                return false;
            }
        }
        (0..16u8).all(|v| set.contains(&v) == model.contains(&v))
    }

    #[quickcheck]
    fn prop_len_matches_iteration(items: Vec<u8>) -> bool {
        let set = MapSet::of(items);
        set.len() == to_vec(&set).len() && set.iter().count() == set.len()
    }

    #[quickcheck]
    fn prop_iteration_has_no_duplicates(items: Vec<u8>) -> TestResult {
        if items.is_empty() {
            return TestResult::discard();
        }
        let set = MapSet::of(items);
        let mut seen = std::collections::HashSet::new();
        TestResult::from_bool(set.iter().all(|item| seen.insert(item)))
    }

    #[quickcheck]
    fn prop_add_twice_changes_once(item: u8) -> bool {
        let mut set = MapSet::new();
        set.add(item) && !set.add(item)
    }
}
