//! Core contract and error types for Strand sequence containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Seq`] trait that every Strand container implements, the
//! [`IndexOutOfRange`] error returned by bounds-checked operations, and
//! the textual encode/decode helpers in [`text`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod seq;
pub mod text;

pub use error::IndexOutOfRange;
pub use seq::Seq;
