use std::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
};

use derivative::Derivative;

use crate::set::{Set, fmt_set};

/// A read-only view of another set.
///
/// Every read is forwarded to the wrapped set when it is made, so changes to
/// the wrapped set are visible immediately.  There is no way to get the
/// wrapped set back out.
#[derive(Derivative)]
#[derivative(Clone(bound = "S: Clone"))]
pub struct Unmodifiable<T, S> {
    inner: S,
    item: PhantomData<fn() -> T>,
}

/// Wraps `set` in an [`Unmodifiable`] view.  Pass a shared handle such as
/// `Rc<RefCell<MapSet<T>>>` to keep mutating the set through another clone of
/// the handle.
pub fn unmodifiable<T, S>(set: S) -> Unmodifiable<T, S>
where
    S: Set<T>,
{
    Unmodifiable {
        inner: set,
        item: PhantomData,
    }
}

impl<T, S> Set<T> for Unmodifiable<T, S>
where
    S: Set<T>,
{
    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        self.inner.iter()
    }
}

impl<T, S> Display for Unmodifiable<T, S>
where
    S: Set<T>,
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

impl<T, S> Debug for Unmodifiable<T, S>
where
    S: Set<T>,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The union of two sets, computed on demand.
///
/// Iteration yields every item of `a`, then the items of `b` that are not in
/// `a`.  [`Set::len`] and iteration scan `b`; membership checks are two
/// lookups.
#[derive(Derivative)]
#[derivative(Clone(bound = "A: Clone, B: Clone"))]
pub struct Union<T, A, B> {
    a: A,
    b: B,
    item: PhantomData<fn() -> T>,
}

/// Creates a live view of `a ∪ b`.
pub fn union<T, A, B>(a: A, b: B) -> Union<T, A, B>
where
    A: Set<T>,
    B: Set<T>,
{
    Union {
        a,
        b,
        item: PhantomData,
    }
}

impl<T, A, B> Set<T> for Union<T, A, B>
where
    A: Set<T>,
    B: Set<T>,
{
    fn contains(&self, item: &T) -> bool {
        self.a.contains(item) || self.b.contains(item)
    }

    fn len(&self) -> usize {
        self.a.len() + self.b.iter().filter(|item| !self.a.contains(item)).count()
    }

    fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(
            self.a
                .iter()
                .chain(self.b.iter().filter(move |item| !self.a.contains(item))),
        )
    }
}

impl<T, A, B> Display for Union<T, A, B>
where
    A: Set<T>,
    B: Set<T>,
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

impl<T, A, B> Debug for Union<T, A, B>
where
    A: Set<T>,
    B: Set<T>,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::set::{MapSet, MutableSet, equal, of, to_vec};

    fn sorted(set: &impl Set<i32>) -> Vec<i32> {
        let mut items = to_vec(set);
        items.sort();
        items
    }

    #[test]
    fn test_unmodifiable_reads_through() {
        let mut backing = Rc::new(RefCell::new(of([1])));
        let view = unmodifiable(backing.clone());
        assert!(view.contains(&1));
        assert_eq!(view.len(), 1);

        backing.add(2);
        assert!(view.contains(&2));
        assert_eq!(sorted(&view), vec![1, 2]);

        backing.remove(&1);
        assert!(!view.contains(&1));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_unmodifiable_display() {
        let view = unmodifiable(of([4]));
        assert_eq!(view.to_string(), "[4]");
        assert_eq!(format!("{view:?}"), "{4}");
    }

    #[test]
    fn test_union_contents() {
        let a = of([1, 2, 3]);
        let b = of([3, 4]);
        let u = union(&a, &b);
        assert_eq!(u.len(), 4);
        assert_eq!(sorted(&u), vec![1, 2, 3, 4]);
        assert!(u.contains(&4));
        assert!(!u.contains(&5));
    }

    #[test]
    fn test_union_iterates_a_first() {
        let a = of([1, 2]);
        let b = of([2, 9]);
        let items = to_vec(&union(&a, &b));
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], 9);
    }

    #[test]
    fn test_union_is_live() {
        let mut a = Rc::new(RefCell::new(of([1])));
        let b = of([2]);
        let u = union(a.clone(), &b);
        assert_eq!(u.len(), 2);

        a.add(2);
        assert_eq!(u.len(), 2);
        a.add(3);
        assert_eq!(u.len(), 3);
        assert!(u.contains(&3));
        assert_eq!(sorted(&u), vec![1, 2, 3]);
    }

    #[test]
    fn test_union_empty() {
        let a = MapSet::<i32>::new();
        let b = MapSet::<i32>::new();
        let u = union(&a, &b);
        assert!(u.is_empty());
        assert_eq!(u.to_string(), "[]");
    }

    #[quickcheck]
    fn prop_union_is_commutative(a: Vec<i32>, b: Vec<i32>) -> bool {
        let (a, b) = (MapSet::of(a), MapSet::of(b));
        equal(&union(&a, &b), &union(&b, &a))
    }

    #[quickcheck]
    fn prop_union_identity(a: Vec<i32>) -> bool {
        let a = MapSet::of(a);
        let empty = MapSet::<i32>::new();
        equal(&union(&a, &empty), &a)
    }

    #[quickcheck]
    fn prop_union_is_idempotent(a: Vec<i32>) -> bool {
        let a = MapSet::of(a);
        equal(&union(&a, &a), &a)
    }

    #[quickcheck]
    fn prop_union_len_matches_iteration(a: Vec<i32>, b: Vec<i32>) -> bool {
        let (a, b) = (MapSet::of(a), MapSet::of(b));
        let u = union(&a, &b);
        u.len() == u.iter().count()
    }

    #[quickcheck]
    fn prop_equal_is_transitive(a: Vec<u8>) -> bool {
        let x = MapSet::of(a.clone());
        let y = MapSet::of(a.iter().rev().cloned());
        let shared = Rc::new(RefCell::new(MapSet::of(a)));
        let z = unmodifiable(shared);
        equal(&x, &y) && equal(&y, &z) && equal(&x, &z) && equal(&z, &x)
    }
}
