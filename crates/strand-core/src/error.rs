//! Error types for sequence operations.

use std::error::Error;
use std::fmt;

/// Error from a bounds-checked sequence operation whose index falls
/// outside the live range `[0, len)`.
///
/// Returned by [`Seq::get`](crate::Seq::get),
/// [`Seq::get_mut`](crate::Seq::get_mut), and container removal
/// operations. Carries the offending index and the number of live
/// elements at the time of the operation so callers can report precise
/// diagnostics without re-querying the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// Number of live elements when the operation was attempted.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for sequence of length {}",
            self.index, self.len
        )
    }
}

impl Error for IndexOutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let e = IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            e.to_string(),
            "index 7 out of range for sequence of length 3"
        );
    }

    #[test]
    fn comparable_for_test_assertions() {
        let a = IndexOutOfRange { index: 0, len: 0 };
        let b = IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(a, b);
    }
}
