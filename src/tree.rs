use std::ops::Range;

use crate::{
    interval::Interval,
    iter::{OverlapsIter, OwnedIter, RefIter},
    node::{remove_recurse, Node},
};

/// An augmented, unbalanced binary search tree indexing half-open ranges
/// for overlap queries.
///
/// Ranges are keyed by their lower bound, with equal lower bounds stored
/// in insertion order - the tree is a multiset, and inserting a range
/// twice stores it twice. Each node caches the maximum upper bound of the
/// subtree below it, letting [`overlaps()`] skip subtrees that cannot
/// intersect a query.
///
/// ```
/// use interbst::IntervalTree;
///
/// let mut bookings = IntervalTree::default();
///
/// bookings.insert(800..900);
/// bookings.insert(930..1015);
/// bookings.insert(1000..1130);
///
/// // Which bookings clash with [1000, 1100)?
/// let clashes = bookings.overlaps(&(1000..1100)).collect::<Vec<_>>();
/// assert_eq!(clashes, [&(930..1015), &(1000..1130)]);
/// ```
///
/// The tree is never rebalanced: its depth, and therefore the cost of
/// every operation, is a function of insertion order. Randomly ordered
/// inserts yield logarithmic depth; sorted inserts degrade it to linear.
///
/// [`overlaps()`]: IntervalTree::overlaps
#[derive(Debug, Clone)]
pub struct IntervalTree<T>(Option<Box<Node<T>>>);

impl<T> Default for IntervalTree<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> IntervalTree<T>
where
    T: Ord,
{
    /// Insert `range` into the tree.
    ///
    /// All ranges are accepted, duplicates and inverted (`start > end`)
    /// ranges included; an inverted range is stored but overlaps nothing.
    ///
    /// ```
    /// use interbst::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    ///
    /// t.insert(10..24);
    /// t.insert(10..24);
    ///
    /// assert_eq!(t.iter().count(), 2);
    /// ```
    pub fn insert(&mut self, range: Range<T>)
    where
        T: Clone,
    {
        let interval = Interval::from(range);
        match self.0 {
            Some(ref mut v) => v.insert(interval),
            None => self.0 = Some(Box::new(Node::new(interval))),
        }
    }

    /// Remove one stored range matching `range`, returning it, or [`None`]
    /// if nothing matches.
    ///
    /// A stored range matches when its upper bound equals the target's and
    /// the target's lower bound falls within it (bounds inclusive); the
    /// first match on the descent path is extracted. Two consequences
    /// follow, and callers should be aware of both:
    ///
    /// * the extracted range may start earlier than the target:
    ///
    /// ```
    /// use interbst::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    /// t.insert(5..10);
    ///
    /// // [5, 10) ends where the target ends and contains the target's
    /// // start, so it is the range extracted.
    /// assert_eq!(t.remove(&(7..10)), Some(5..10));
    /// ```
    ///
    /// * a stored range can be unreachable even as an exact target: at a
    ///   node whose upper bound exceeds the target's, the descent
    ///   continues left, regardless of where the range actually lives.
    ///
    /// Removing an absent range is a no-op:
    ///
    /// ```
    /// use interbst::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    /// t.insert(10..24);
    ///
    /// assert_eq!(t.remove(&(10..24)), Some(10..24));
    /// assert_eq!(t.remove(&(10..24)), None);
    /// ```
    pub fn remove(&mut self, range: &Range<T>) -> Option<Range<T>>
    where
        T: Clone,
    {
        remove_recurse(&mut self.0, range)
    }

    /// Return an iterator of all stored ranges overlapping `range`.
    ///
    /// Two ranges overlap when each starts strictly before the other
    /// ends; ranges that touch at a bound do not overlap, and an empty or
    /// inverted query matches nothing.
    ///
    /// Results are yielded in depth-first pre-order of the underlying
    /// tree, not in sorted order. Duplicate stored ranges are yielded once
    /// per occurrence.
    ///
    /// ```
    /// use interbst::IntervalTree;
    ///
    /// let mut t = IntervalTree::default();
    ///
    /// t.insert(10..24);
    /// t.insert(24..80);
    ///
    /// // [10, 24) touches the query at 24 and is not an overlap.
    /// let hits = t.overlaps(&(24..30)).collect::<Vec<_>>();
    /// assert_eq!(hits, [&(24..80)]);
    /// ```
    pub fn overlaps<'a>(&'a self, range: &'a Range<T>) -> impl Iterator<Item = &'a Range<T>> {
        self.0
            .iter()
            .flat_map(|v| OverlapsIter::new(v, range))
            .map(|v| v.interval().as_range())
    }

    /// Return an iterator of all stored ranges, in order of their lower
    /// bounds (ties in insertion order).
    pub fn iter(&self) -> impl Iterator<Item = &Range<T>> {
        self.0
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| v.interval().as_range())
    }

    /// Returns true if the tree stores no ranges.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> IntoIterator for IntervalTree<T> {
    type Item = Range<T>;
    type IntoIter = OwnedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}
