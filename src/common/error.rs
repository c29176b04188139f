//! Error types for pagesort.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the paged array, the sorts and the generator.
///
/// Library code only ever returns these; deciding to exit the process is
/// left to the binaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Open, read or write failure on a backing file.
    ///
    /// A read that comes up short of the expected extent lands here as
    /// `UnexpectedEof`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized algorithm code, size name or other user input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed access outside `[0, len)`.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Source length is not a whole number of elements.
    #[error("file length {len} is not a multiple of the element width")]
    MisalignedFile { len: u64 },

    /// The cache is full and the replacer has no victim to offer.
    ///
    /// Indicates the page table and the replacer disagree.
    #[error("no frame available for eviction")]
    NoFreeFrames,

    /// Unusable page size or cache capacity.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfBounds { index: 9, len: 5 };
        assert_eq!(
            format!("{}", err),
            "index 9 out of bounds for array of length 5"
        );

        let err = Error::InvalidArgument("unknown algorithm 'XS'".into());
        assert_eq!(format!("{}", err), "invalid argument: unknown algorithm 'XS'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::MisalignedFile { len: 7 }.source().is_none());
    }
}
