//! Error types for the sortprov workspace.
//!
//! The sort path itself has no recoverable errors. These variants cover the
//! surrounding surface: selecting an algorithm by name or id, building
//! buffer views from Rust slices, verifying output, and loading report
//! configuration.

use std::error::Error;
use std::fmt;

/// Errors raised outside the infallible sort path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// No algorithm is registered under this name.
    UnknownAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
    /// No algorithm is registered under this ABI id.
    UnknownAlgorithmId {
        /// The id that failed to parse.
        id: i32,
    },
    /// A gapped insertion pass was requested with a gap of zero.
    InvalidGap,
    /// A slice is too long to describe with an `i32` element count.
    LengthOverflow {
        /// Length of the offending slice.
        len: usize,
    },
    /// Output is not in non-decreasing order.
    NotSorted {
        /// Index of the first element greater than its successor.
        index: usize,
    },
    /// Output is not a permutation of the input.
    NotPermutation,
    /// Report configuration is malformed.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
            Self::UnknownAlgorithmId { id } => write!(f, "unknown algorithm id {id}"),
            Self::InvalidGap => write!(f, "insertion gap must be at least 1"),
            Self::LengthOverflow { len } => {
                write!(f, "slice length {len} exceeds i32::MAX elements")
            }
            Self::NotSorted { index } => {
                write!(f, "element {index} is greater than its successor")
            }
            Self::NotPermutation => write!(f, "output is not a permutation of the input"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl Error for SortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SortError::UnknownAlgorithm {
                name: "bogo".into()
            }
            .to_string(),
            "unknown algorithm 'bogo'"
        );
        assert_eq!(
            SortError::UnknownAlgorithmId { id: 99 }.to_string(),
            "unknown algorithm id 99"
        );
        assert_eq!(
            SortError::NotSorted { index: 3 }.to_string(),
            "element 3 is greater than its successor"
        );
        assert!(SortError::InvalidConfig {
            reason: "runs must be at least 1".into()
        }
        .to_string()
        .contains("runs must be at least 1"));
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(SortError::InvalidGap);
        assert!(e.source().is_none());
    }
}
