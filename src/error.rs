//! Error types for password generation.

use std::io;

use thiserror::Error;

use crate::secure::BufferKind;

/// Everything that can abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// Arguments that should have been rejected before the core was invoked.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("could not allocate {len} bytes for the {buffer}")]
    AllocationFailure { buffer: BufferKind, len: usize },

    #[error("could not open {path}: {source}")]
    EntropySourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "could not read {requested} bytes from {origin} (got {received}){}",
        read_cause(.cause)
    )]
    EntropyShortRead {
        origin: String,
        requested: usize,
        received: usize,
        /// Set when the read itself failed rather than returning short.
        #[source]
        cause: Option<io::Error>,
    },

    /// The pool cursor ran past its end. Sizes are computed up front, so this
    /// only fires on a sizing bug.
    #[error("entropy pool exhausted: wanted {requested} bytes, {remaining} left")]
    EntropyExhausted { requested: usize, remaining: usize },

    #[error("could not write passwords: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn read_cause(cause: &Option<io::Error>) -> String {
    cause.as_ref().map(|e| format!(": {e}")).unwrap_or_default()
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_name_the_failed_resource() {
        let err = Error::AllocationFailure {
            buffer: BufferKind::Dictionary,
            len: 78,
        };
        assert_eq!(err.to_string(), "could not allocate 78 bytes for the dictionary");

        let err = Error::EntropyShortRead {
            origin: "/dev/urandom".into(),
            requested: 208,
            received: 12,
            cause: None,
        };
        assert_eq!(
            err.to_string(),
            "could not read 208 bytes from /dev/urandom (got 12)"
        );
    }

    #[test]
    fn failed_reads_carry_the_io_error() {
        use std::error::Error as _;

        let err = Error::EntropyShortRead {
            origin: "/tmp".into(),
            requested: 208,
            received: 0,
            cause: Some(io::Error::other("Is a directory")),
        };
        assert_eq!(
            err.to_string(),
            "could not read 208 bytes from /tmp (got 0): Is a directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_convert_to_output() {
        let err: Error = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, Error::Output(_)));
    }
}
