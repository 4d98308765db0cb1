//! Strand: growable sequence containers with a swappable backing-store contract.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let mut xs = DynArray::new();
//! xs.append(1);
//! xs.append(2);
//! xs.append(3);
//! assert_eq!((xs.len(), xs.capacity()), (3, 4));
//!
//! // Positional edits shift the suffix by one slot.
//! xs.insert(1, 9);
//! assert_eq!(xs.remove(0).unwrap(), 1);
//!
//! // Textual form: "(e0, e1, ..., en-1)".
//! let mut out = Vec::new();
//! xs.write_text(&mut out).unwrap();
//! assert_eq!(&out[..], b"(9, 2, 3)");
//!
//! // Bounds violations are recoverable, typed errors.
//! assert_eq!(xs.get(5).copied(), Err(IndexOutOfRange { index: 5, len: 3 }));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`seq`] | `strand-core` | The `Seq` contract, error types, text helpers |
//! | [`array`] | `strand-array` | The array-backed container `DynArray` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The sequence contract, error types, and text helpers (`strand-core`).
///
/// Contains the [`seq::Seq`] trait every container implements, the
/// [`seq::IndexOutOfRange`] error, and the [`seq::text`] encode/decode
/// helpers behind the `"(e0, e1, ...)"` form.
pub use strand_core as seq;

/// The array-backed container (`strand-array`).
///
/// [`array::DynArray`] is the contiguous, doubling-growth sequence and
/// the crate's primary type; it is also available in the [`prelude`].
pub use strand_array as array;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
///
/// This imports the container, the sequence contract, and the error
/// type returned by bounds-checked operations.
pub mod prelude {
    pub use strand_array::DynArray;
    pub use strand_core::{IndexOutOfRange, Seq};
}
