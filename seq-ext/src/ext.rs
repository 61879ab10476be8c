use std::borrow::Borrow;
use std::hash::Hash;

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::iter::{matches, After, Before, DistinctBy, SelectDistinct};

/// Extension methods for sequences.
///
/// Implemented for every iterator. Operations that must look at a sequence
/// more than once (to find a boundary or to check that a value occurs at
/// all) require the iterator to be `Clone`; a clonable iterator such as
/// `slice::Iter` or `Range` can be restarted from the beginning.
///
/// Searches compare by value equality and the first occurrence wins. The
/// searched value may be any type the items borrow as, so a sequence of
/// `String` can be searched with a `&str`.
///
/// ```rust
/// use seq_ext::{Boundary, SequenceExt};
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(numbers.iter().after(&3).collect::<Vec<_>>(), [&4, &5]);
/// assert_eq!(numbers.iter().before(&3).collect::<Vec<_>>(), [&1, &2]);
/// assert_eq!(numbers.iter().index_of(&5), Some(4));
/// assert_eq!(numbers.iter().next_of(&5, Boundary::Wrap), Ok(Some(&1)));
/// ```
pub trait SequenceExt: Iterator {
    /// The items strictly after the first item equal to `value`.
    ///
    /// Empty if `value` does not occur.
    fn after<Q>(self, value: &Q) -> After<'_, Self, Q>
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        After::new(self, value)
    }

    /// The items strictly before the first item equal to `value`.
    ///
    /// Empty if `value` does not occur. Finding out whether it does takes a
    /// pass over a clone of the sequence when iteration starts.
    fn before<Q>(self, value: &Q) -> Before<'_, Self, Q>
    where
        Self: Sized + Clone,
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        Before::new(self, value)
    }

    /// Call `action` on every item, in order.
    fn each<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for item in self {
            action(item);
        }
    }

    /// The zero-based position of the first item equal to `value`.
    fn index_of<Q>(mut self, value: &Q) -> Option<usize>
    where
        Self: Sized,
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(|item| matches(&item, value))
    }

    /// The item following the first item equal to `value`.
    ///
    /// `Ok(None)` if `value` does not occur. If it is the last item, the
    /// result depends on `boundary`: [`Boundary::Wrap`] gives the first item,
    /// [`Boundary::Stop`] gives [`Error::OutOfRange`]. A `bool` may be passed
    /// for `boundary`, `true` meaning wrap.
    ///
    /// ```rust
    /// use seq_ext::{Error, SequenceExt};
    ///
    /// let numbers = [1, 2, 3];
    /// assert_eq!(numbers.iter().next_of(&1, false), Ok(Some(&2)));
    /// assert_eq!(numbers.iter().next_of(&3, true), Ok(Some(&1)));
    /// assert_eq!(numbers.iter().next_of(&3, false), Err(Error::OutOfRange));
    /// assert_eq!(numbers.iter().next_of(&9, false), Ok(None));
    /// ```
    fn next_of<Q>(self, value: &Q, boundary: impl Into<Boundary>) -> Result<Option<Self::Item>>
    where
        Self: Sized + Clone,
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let boundary = boundary.into();
        let mut first = self.clone();
        let mut iter = self;
        if iter.position(|item| matches(&item, value)).is_none() {
            return Ok(None);
        }
        match iter.next() {
            Some(next) => Ok(Some(next)),
            // the match proves the sequence isn't empty
            None if boundary.is_wrap() => Ok(first.next()),
            None => Err(Error::OutOfRange),
        }
    }

    /// The item preceding the first item equal to `value`.
    ///
    /// `Ok(None)` if `value` does not occur. If it is the first item, the
    /// result depends on `boundary`: [`Boundary::Wrap`] gives the last item,
    /// [`Boundary::Stop`] gives [`Error::OutOfRange`].
    fn previous_of<Q>(
        self,
        value: &Q,
        boundary: impl Into<Boundary>,
    ) -> Result<Option<Self::Item>>
    where
        Self: Sized + Clone,
        Self::Item: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let boundary = boundary.into();
        let rest = self.clone();
        let mut previous = None;
        for item in self {
            if matches(&item, value) {
                return match previous {
                    Some(previous) => Ok(Some(previous)),
                    None if boundary.is_wrap() => Ok(rest.last()),
                    None => Err(Error::OutOfRange),
                };
            }
            previous = Some(item);
        }
        Ok(None)
    }

    /// Project every item with `selector` and yield each distinct key once,
    /// in the order keys are first seen.
    ///
    /// ```rust
    /// use seq_ext::SequenceExt;
    ///
    /// let words = ["a", "bb", "ccc", "dd"];
    /// let lengths = words.iter().select_distinct(|w| w.len());
    /// assert_eq!(lengths.collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    fn select_distinct<K, F>(self, selector: F) -> SelectDistinct<Self, F, K>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        SelectDistinct::new(self, selector)
    }

    /// Yield each item whose key under `selector` has not been seen before.
    ///
    /// ```rust
    /// use seq_ext::SequenceExt;
    ///
    /// let words = ["a", "bb", "ccc", "dd"];
    /// let distinct = words.into_iter().distinct_by(|w| w.len());
    /// assert_eq!(distinct.collect::<Vec<_>>(), ["a", "bb", "ccc"]);
    /// ```
    fn distinct_by<K, F>(self, selector: F) -> DistinctBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        DistinctBy::new(self, selector)
    }
}

impl<I: Iterator> SequenceExt for I {}
