use std::borrow::Borrow;
use std::hash::Hash;
use std::iter::FusedIterator;

use ahash::{HashSet, HashSetExt};

// We spell out the Borrow impl; `item.borrow()` is ambiguous for reference
// items, which borrow both as themselves and as their referent.
#[inline]
pub(crate) fn matches<T, Q>(item: &T, value: &Q) -> bool
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    <T as Borrow<Q>>::borrow(item) == value
}

/// The items strictly after the first occurrence of a value.
///
/// Created by [`SequenceExt::after`](crate::SequenceExt::after). If the value
/// never occurs the iterator is empty.
#[derive(Debug, Clone)]
pub struct After<'a, I, Q: ?Sized> {
    iter: I,
    value: &'a Q,
    found: bool,
}

impl<'a, I, Q: ?Sized> After<'a, I, Q> {
    pub(crate) fn new(iter: I, value: &'a Q) -> Self {
        Self {
            iter,
            value,
            found: false,
        }
    }
}

impl<I, Q> Iterator for After<'_, I, Q>
where
    I: Iterator,
    I::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.found {
            // consume everything up to and including the match
            let value = self.value;
            self.iter.by_ref().find(|item| matches(item, value))?;
            self.found = true;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.found {
            self.iter.size_hint()
        } else {
            // the match itself is never yielded
            let (_, upper) = self.iter.size_hint();
            (0, upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

impl<I, Q> FusedIterator for After<'_, I, Q>
where
    I: FusedIterator,
    I::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
}

/// The items strictly before the first occurrence of a value.
///
/// Created by [`SequenceExt::before`](crate::SequenceExt::before). If the
/// value never occurs the iterator is empty, so on the first call to `next`
/// a clone of the underlying iterator is scanned to locate the value.
#[derive(Debug, Clone)]
pub struct Before<'a, I, Q: ?Sized> {
    iter: I,
    value: &'a Q,
    remaining: Option<usize>,
}

impl<'a, I, Q: ?Sized> Before<'a, I, Q> {
    pub(crate) fn new(iter: I, value: &'a Q) -> Self {
        Self {
            iter,
            value,
            remaining: None,
        }
    }
}

impl<I, Q> Before<'_, I, Q>
where
    I: Iterator + Clone,
    I::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn remaining(&mut self) -> usize {
        let value = self.value;
        let iter = &self.iter;
        *self.remaining.get_or_insert_with(|| {
            iter.clone()
                .position(|item| matches(&item, value))
                .unwrap_or(0)
        })
    }
}

impl<I, Q> Iterator for Before<'_, I, Q>
where
    I: Iterator + Clone,
    I::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        self.remaining = Some(remaining - 1);
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => {
                let (_, upper) = self.iter.size_hint();
                (0, upper.map(|upper| upper.saturating_sub(1)))
            }
        }
    }
}

impl<I, Q> FusedIterator for Before<'_, I, Q>
where
    I: FusedIterator + Clone,
    I::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
}

/// Projected keys, each yielded the first time it is seen.
///
/// Created by [`SequenceExt::select_distinct`](crate::SequenceExt::select_distinct).
#[derive(Clone)]
pub struct SelectDistinct<I, F, K> {
    iter: I,
    selector: F,
    seen: HashSet<K>,
}

impl<I, F, K> SelectDistinct<I, F, K> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        Self {
            iter,
            selector,
            seen: HashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for SelectDistinct<I, F, K>
where
    I: Iterator,
    F: FnMut(I::Item) -> K,
    K: Hash + Eq + Clone,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        loop {
            let key = (self.selector)(self.iter.next()?);
            if self.seen.insert(key.clone()) {
                return Some(key);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        // at least one key when anything is left and nothing was seen yet
        let lower = if self.seen.is_empty() && lower > 0 {
            1
        } else {
            0
        };
        (lower, upper)
    }
}

impl<I, F, K> FusedIterator for SelectDistinct<I, F, K>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> K,
    K: Hash + Eq + Clone,
{
}

/// Items whose projected key has not been seen before.
///
/// Created by [`SequenceExt::distinct_by`](crate::SequenceExt::distinct_by).
#[derive(Clone)]
pub struct DistinctBy<I, F, K> {
    iter: I,
    selector: F,
    seen: HashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        Self {
            iter,
            selector,
            seen: HashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let selector = &mut self.selector;
        let seen = &mut self.seen;
        self.iter.find(|item| seen.insert(selector(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = if self.seen.is_empty() && lower > 0 {
            1
        } else {
            0
        };
        (lower, upper)
    }
}

impl<I, F, K> FusedIterator for DistinctBy<I, F, K>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
}
