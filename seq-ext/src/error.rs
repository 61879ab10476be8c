use thiserror::Error;

/// Errors raised by sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent.
    ///
    /// Raised before the sequence is enumerated. `name` is the name of the
    /// missing parameter: `source`, `value`, `selector` or `action`.
    #[error("Invalid argument: {name} must be present")]
    InvalidArgument { name: &'static str },
    /// No neighbour exists at the sequence boundary.
    ///
    /// The searched value sits at the start (or end) of the sequence and
    /// the boundary policy does not allow wrapping around.
    #[error("Out of range: no neighbour at the sequence boundary")]
    OutOfRange,
}

impl Error {
    pub(crate) fn missing(name: &'static str) -> Self {
        Error::InvalidArgument { name }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
