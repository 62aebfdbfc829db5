use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a container operation.
///
/// Every variant is recoverable and leaves the container as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A container was requested with a capacity of zero.
    InvalidCapacity,
    /// Insertion into a container holding `capacity` elements.
    QueueFull,
    /// Removal from a container holding no elements.
    QueueEmpty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity => f.write_str("capacity must be at least 1"),
            Error::QueueFull => f.write_str("queue is full"),
            Error::QueueEmpty => f.write_str("queue is empty"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{boxed::Box, string::ToString};

    #[test]
    fn display() {
        assert_eq!(Error::QueueFull.to_string(), "queue is full");
        assert_eq!(Error::QueueEmpty.to_string(), "queue is empty");
        assert_eq!(
            Error::InvalidCapacity.to_string(),
            "capacity must be at least 1"
        );
    }

    #[test]
    fn boxed() {
        fn fails() -> core::result::Result<(), Box<dyn core::error::Error>> {
            Err(Error::QueueEmpty)?
        }
        let err = fails().unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::QueueEmpty));
    }
}
