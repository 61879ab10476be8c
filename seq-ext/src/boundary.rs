use strum_macros::{Display, EnumString};

/// What a neighbour lookup does at the edge of a sequence.
///
/// The default is [`Boundary::Stop`]: asking for the element after the last
/// one (or before the first one) is an [`Error::OutOfRange`].
///
/// A `bool` converts into a boundary, with `true` meaning wrap-around:
///
/// ```rust
/// use seq_ext::Boundary;
///
/// assert_eq!(Boundary::from(true), Boundary::Wrap);
/// assert_eq!(Boundary::default(), Boundary::Stop);
/// assert_eq!("wrap".parse::<Boundary>().unwrap(), Boundary::Wrap);
/// ```
///
/// [`Error::OutOfRange`]: crate::Error::OutOfRange
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// Fail at the boundary.
    #[default]
    Stop,
    /// Continue from the opposite end of the sequence.
    Wrap,
}

impl Boundary {
    #[inline]
    pub fn is_wrap(self) -> bool {
        matches!(self, Boundary::Wrap)
    }
}

impl From<bool> for Boundary {
    #[inline]
    fn from(wrap_around: bool) -> Self {
        if wrap_around {
            Boundary::Wrap
        } else {
            Boundary::Stop
        }
    }
}
