//! Sequence operations with every argument optional.
//!
//! These mirror the methods of [`SequenceExt`], but take each required
//! argument as an `Option`. An absent argument is reported as
//! [`Error::InvalidArgument`] before the sequence is touched, and before
//! any selector or action is called. Use them at the edge where values
//! may legitimately be missing; elsewhere the methods on [`SequenceExt`]
//! make absence impossible.
//!
//! ```rust
//! use seq_ext::{checked, Error};
//!
//! let numbers = vec![1, 2, 3];
//! let after = checked::after(Some(&numbers), Some(&1)).unwrap();
//! assert_eq!(after.collect::<Vec<_>>(), [&2, &3]);
//!
//! let missing: Option<&Vec<i32>> = None;
//! assert!(matches!(
//!     checked::after(missing, Some(&1)),
//!     Err(Error::InvalidArgument { name: "source" })
//! ));
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::ext::SequenceExt;
use crate::iter::{After, Before, SelectDistinct};

fn require<T>(argument: Option<T>, name: &'static str) -> Result<T> {
    argument.ok_or_else(|| Error::missing(name))
}

pub fn after<'a, S, Q>(
    source: Option<S>,
    value: Option<&'a Q>,
) -> Result<After<'a, S::IntoIter, Q>>
where
    S: IntoIterator,
    S::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    let source = require(source, "source")?;
    let value = require(value, "value")?;
    Ok(source.into_iter().after(value))
}

pub fn before<'a, S, Q>(
    source: Option<S>,
    value: Option<&'a Q>,
) -> Result<Before<'a, S::IntoIter, Q>>
where
    S: IntoIterator,
    S::IntoIter: Clone,
    S::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    let source = require(source, "source")?;
    let value = require(value, "value")?;
    Ok(source.into_iter().before(value))
}

pub fn for_each<S, F>(source: Option<S>, action: Option<F>) -> Result<()>
where
    S: IntoIterator,
    F: FnMut(S::Item),
{
    let source = require(source, "source")?;
    let action = require(action, "action")?;
    source.into_iter().each(action);
    Ok(())
}

pub fn index_of<S, Q>(source: Option<S>, value: Option<&Q>) -> Result<Option<usize>>
where
    S: IntoIterator,
    S::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    let source = require(source, "source")?;
    let value = require(value, "value")?;
    Ok(source.into_iter().index_of(value))
}

/// See [`SequenceExt::next_of`].
pub fn next<S, Q>(
    source: Option<S>,
    value: Option<&Q>,
    boundary: impl Into<Boundary>,
) -> Result<Option<S::Item>>
where
    S: IntoIterator,
    S::IntoIter: Clone,
    S::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    let source = require(source, "source")?;
    let value = require(value, "value")?;
    source.into_iter().next_of(value, boundary)
}

/// See [`SequenceExt::previous_of`].
pub fn previous<S, Q>(
    source: Option<S>,
    value: Option<&Q>,
    boundary: impl Into<Boundary>,
) -> Result<Option<S::Item>>
where
    S: IntoIterator,
    S::IntoIter: Clone,
    S::Item: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    let source = require(source, "source")?;
    let value = require(value, "value")?;
    source.into_iter().previous_of(value, boundary)
}

pub fn select_distinct<S, F, K>(
    source: Option<S>,
    selector: Option<F>,
) -> Result<SelectDistinct<S::IntoIter, F, K>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> K,
    K: Hash + Eq + Clone,
{
    let source = require(source, "source")?;
    let selector = require(selector, "selector")?;
    Ok(source.into_iter().select_distinct(selector))
}
