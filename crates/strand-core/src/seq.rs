//! The abstract sequence contract.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::IndexOutOfRange;

/// Random-access sequence of `T` with explicit capacity tracking.
///
/// This is the contract every Strand container satisfies. Generic code
/// operates over `impl Seq<T>` or `&mut dyn Seq<T>` without knowing the
/// backing store, so an array-backed container and (say) a list-backed
/// one are interchangeable wherever only the contract is used.
///
/// The contract deliberately does not fix a growth policy: `capacity()`
/// reports whatever the implementation has allocated. Mutating entry
/// points (append, insert, remove) are implementation surface, not
/// contract surface — they differ too much between backing stores to
/// share a signature.
pub trait Seq<T> {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether the sequence holds no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total allocated element slots. Always `>= len()`.
    fn capacity(&self) -> usize;

    /// Borrow the element at `index`.
    ///
    /// Fails with [`IndexOutOfRange`] unless `index < len()`.
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange>;

    /// Mutably borrow the element at `index` for in-place update.
    ///
    /// Fails with [`IndexOutOfRange`] unless `index < len()`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange>;

    /// Render the sequence as `"(e0, e1, ..., en-1)"` into `w`.
    ///
    /// An empty sequence renders as `"()"`. Implementations use
    /// [`text::write_seq`](crate::text::write_seq) so every container
    /// produces the same shape.
    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display;

    /// Parse elements from `r` and append each onto the sequence.
    ///
    /// Scans delimited tokens (see [`text::next_token`](crate::text::next_token))
    /// and appends one element per token, stopping at the first token
    /// that fails to parse or at end of input — a normal termination,
    /// not a fault. Parsed elements accumulate onto any existing
    /// contents. Returns the sequence's length after the scan.
    fn read_text(&mut self, r: &mut dyn io::Read) -> usize
    where
        T: FromStr;
}
