//! Array-backed growable sequence storage.
//!
//! [`DynArray`] is a contiguous, exclusively owned buffer with a tracked
//! live-element count:
//!
//! ```text
//! DynArray<T>
//! ├── buf: Vec<T>   full-capacity backing store, power-of-two length;
//! │                 vacant tail slots hold T::default() placeholders
//! └── len           live prefix length (elements [0, len) are live)
//! ```
//!
//! Capacity starts at 1 and doubles whenever the buffer fills, which
//! bounds total copy work across `n` appends to O(n). Positional insert
//! and remove shift the affected suffix by one slot. The container
//! implements the [`strand_core::Seq`] contract, so code written against
//! the contract runs unchanged over other backing stores.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dyn_array;

pub use dyn_array::DynArray;
