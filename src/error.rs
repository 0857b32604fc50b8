//! Errors raised by the bounded collections.

/// Failure modes of [`Collection`](crate::Collection) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-capacity collection was asked to hold more keys than it can.
    #[error("collection is full: capacity of {capacity} keys reached")]
    CapacityExceeded {
        /// How many keys the collection can hold.
        capacity: usize,
    },
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
