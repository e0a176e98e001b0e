//! Sets with value semantics that do not depend on their physical
//! representation.
//!
//! [`Set`] is the read-only contract shared by owned sets ([`MapSet`]) and by
//! views ([`Unmodifiable`], [`Union`], and the graph accessors).  Views never
//! copy the data they read; each call re-derives its answer from whatever
//! backing state the view refers to.

use std::{
    cell::RefCell,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

pub use self::map_set::{MapSet, of};
pub use self::views::{Union, Unmodifiable, union, unmodifiable};

mod map_set;
mod views;

/// A boxed, type-erased set.  Graph accessors return this type.
pub type SetView<T> = Box<dyn Set<T>>;

/// A logical collection of unique items with no defined order.
///
/// Iteration visits each contained item exactly once per call.  The order is
/// unspecified and may differ between calls.
pub trait Set<T> {
    /// Returns true if `item` is a member of the set.
    fn contains(&self, item: &T) -> bool;

    /// Returns the number of distinct items in the set.
    fn len(&self) -> usize;

    /// Returns true if the set has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an iterator over the items of the set.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a;
}

/// Boxed views such as [`SetView`] print in the canonical `[e1, e2, ...]`
/// form.
impl<T: Display + 'static> Display for dyn Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_set(self, f)
    }
}

/// A [`Set`] that can be changed in place.
///
/// Every mutating method reports whether the call changed the set's contents.
pub trait MutableSet<T>: Set<T> {
    /// Adds an item, returning true if it was not already present.
    fn add(&mut self, item: T) -> bool;

    /// Removes an item, returning true if it was present.
    fn remove(&mut self, item: &T) -> bool;

    /// Adds every given item.  Returns true if any of them changed the set.
    fn add_all<I>(&mut self, items: I) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .fold(false, |changed, item| self.add(item) | changed)
    }

    /// Removes every given item.  Returns true if any of them changed the set.
    fn remove_all<I>(&mut self, items: I) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .fold(false, |changed, item| self.remove(&item) | changed)
    }
}

impl<T, S> Set<T> for &S
where
    S: Set<T> + ?Sized,
{
    fn contains(&self, item: &T) -> bool {
        (**self).contains(item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        (**self).iter()
    }
}

impl<T, S> Set<T> for Box<S>
where
    S: Set<T> + ?Sized,
{
    fn contains(&self, item: &T) -> bool {
        (**self).contains(item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        (**self).iter()
    }
}

impl<T, S> Set<T> for Rc<S>
where
    S: Set<T> + ?Sized,
{
    fn contains(&self, item: &T) -> bool {
        (**self).contains(item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        (**self).iter()
    }
}

/// Reads through a `RefCell` borrow.  Iteration takes one pass under the
/// borrow and yields from the collected items, so the cell may be mutated
/// while the iterator is alive.
impl<T, S> Set<T> for RefCell<S>
where
    S: Set<T> + ?Sized,
{
    fn contains(&self, item: &T) -> bool {
        self.borrow().contains(item)
    }

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        let items: Vec<T> = self.borrow().iter().collect();
        Box::new(items.into_iter())
    }
}

impl<T, S> MutableSet<T> for RefCell<S>
where
    S: MutableSet<T>,
{
    fn add(&mut self, item: T) -> bool {
        self.get_mut().add(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.get_mut().remove(item)
    }
}

/// A shared handle is how a set is mutated while views of it are alive.
impl<T, S> MutableSet<T> for Rc<RefCell<S>>
where
    S: MutableSet<T>,
{
    fn add(&mut self, item: T) -> bool {
        self.borrow_mut().add(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.borrow_mut().remove(item)
    }
}

/// Compares two sets structurally: same length, and every item of `b` is in
/// `a`.
pub fn equal<'a, T, A, B>(a: &'a A, b: &'a B) -> bool
where
    T: 'a,
    A: Set<T> + ?Sized,
    B: Set<T> + ?Sized,
{
    a.len() == b.len() && b.iter().all(|item| a.contains(&item))
}

/// Like [`equal`], but a missing set equals only another missing set.
pub fn equal_opt<'a, T, A, B>(a: Option<&'a A>, b: Option<&'a B>) -> bool
where
    T: 'a,
    A: Set<T> + ?Sized,
    B: Set<T> + ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => equal(a, b),
        _ => false,
    }
}

/// Writes the canonical string form of a set, `[e1, e2, ...]`, from a single
/// iteration pass.
pub fn fmt_set<'a, T, S>(set: &'a S, f: &mut Formatter<'_>) -> fmt::Result
where
    T: Display + 'a,
    S: Set<T> + ?Sized,
{
    f.write_str("[")?;
    for (i, item) in set.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Returns the canonical string form of a set.  See [`fmt_set`].
pub fn set_string<'a, T, S>(set: &'a S) -> String
where
    T: Display + 'a,
    S: Set<T> + ?Sized,
{
    struct Formatted<'s, T, S: ?Sized>(&'s S, std::marker::PhantomData<fn() -> T>);

    impl<'s, T, S> Display for Formatted<'s, T, S>
    where
        T: Display + 's,
        S: Set<T> + ?Sized,
    {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            fmt_set(self.0, f)
        }
    }

    Formatted(set, std::marker::PhantomData).to_string()
}

/// Collects a snapshot of the set's items.  The result is independent of the
/// set afterward.
pub fn to_vec<'a, T, S>(set: &'a S) -> Vec<T>
where
    T: 'a,
    S: Set<T> + ?Sized,
{
    set.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<i32>) -> Vec<i32> {
        items.sort();
        items
    }

    #[test]
    fn test_equal() {
        assert!(equal(&of([1, 2, 3]), &of([3, 2, 1])));
        assert!(!equal(&of([1, 2]), &of([1, 2, 3])));
        assert!(!equal(&of([1, 2, 4]), &of([1, 2, 3])));
        assert!(equal(&of::<i32, _>([]), &MapSet::new()));
    }

    #[test]
    fn test_equal_opt() {
        assert!(equal_opt::<i32, MapSet<i32>, MapSet<i32>>(None, None));
        assert!(!equal_opt(Some(&of([1])), None::<&MapSet<i32>>));
        assert!(!equal_opt(None::<&MapSet<i32>>, Some(&of([1]))));
        assert!(equal_opt(Some(&of([1])), Some(&of([1]))));
    }

    #[test]
    fn test_equal_across_representations() {
        let shared = Rc::new(RefCell::new(of([1, 2])));
        let view: SetView<i32> = Box::new(unmodifiable::<i32, _>(shared.clone()));
        assert!(equal(&view, &of([2, 1])));
        assert!(equal(&shared, &*view));
    }

    #[test]
    fn test_set_string() {
        assert_eq!(set_string(&MapSet::<i32>::new()), "[]");
        assert_eq!(set_string(&of([7])), "[7]");
        let s = set_string(&of([1, 2]));
        assert!(s == "[1, 2]" || s == "[2, 1]", "{s}");
    }

    #[test]
    fn test_to_vec_is_a_snapshot() {
        let mut set = of([1, 2]);
        let snapshot = to_vec(&set);
        set.add(3);
        assert_eq!(sorted(snapshot), vec![1, 2]);
        assert_eq!(sorted(to_vec(&set)), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_all_reports_any_change() {
        let mut set = of([1]);
        assert!(set.add_all([1, 2]));
        assert!(!set.add_all([1, 2]));
        assert!(set.add_all([5, 5]));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove_all_reports_any_change() {
        let mut set = of([1, 2, 3]);
        assert!(set.remove_all([4, 3]));
        assert!(!set.remove_all([3, 4]));
        assert_eq!(sorted(to_vec(&set)), vec![1, 2]);
    }

    #[test]
    fn test_shared_handle_mutation() {
        let mut shared = Rc::new(RefCell::new(MapSet::<i32>::new()));
        assert!(shared.add(1));
        assert!(!shared.add(1));
        assert!(shared.contains(&1));
        assert!(shared.remove(&1));
        assert!(shared.is_empty());
    }

    #[test]
    fn test_refcell_iteration_tolerates_mutation() {
        let shared = Rc::new(RefCell::new(of([1, 2])));
        let mut seen = Vec::new();
        for item in shared.iter() {
            shared.borrow_mut().add(item + 10);
            seen.push(item);
        }
        assert_eq!(sorted(seen), vec![1, 2]);
        assert_eq!(shared.len(), 4);
    }
}
