//! Extension methods for sequences.
//!
//! [`SequenceExt`] adds small conveniences to every iterator: the items
//! [`after`](SequenceExt::after) or [`before`](SequenceExt::before) a value,
//! the [`next`](SequenceExt::next_of) or [`previous`](SequenceExt::previous_of)
//! neighbour of a value (optionally wrapping around, see [`Boundary`]), the
//! [`index_of`](SequenceExt::index_of) a value, distinct projections with
//! [`select_distinct`](SequenceExt::select_distinct) and an
//! [`each`](SequenceExt::each) for side effects.
//!
//! The [`checked`] module offers the same operations with optional arguments.

mod boundary;
pub mod checked;
mod error;
mod ext;
mod iter;

pub use boundary::Boundary;
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use iter::{After, Before, DistinctBy, SelectDistinct};
