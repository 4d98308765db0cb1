//! Test utilities and mock sequences for Strand development.
//!
//! Provides [`MockSeq`], a plain `Vec`-backed implementation of the
//! [`Seq`] contract. It makes none of the array container's capacity
//! promises, which is the point: code written against the contract must
//! behave identically over it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::io;
use std::str::FromStr;

use strand_core::{text, IndexOutOfRange, Seq};

/// Mock implementation of [`Seq`].
///
/// Backed by a bare `Vec<T>` with whatever capacity the `Vec` happens
/// to hold. Pre-populate it with [`push`](MockSeq::push) or build one
/// from existing values with `From<Vec<T>>` before passing it to code
/// under test.
pub struct MockSeq<T> {
    items: Vec<T>,
}

impl<T> MockSeq<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }
}

impl<T> Default for MockSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for MockSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Seq<T> for MockSeq<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.items.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })
    }

    fn write_text(&self, w: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display,
    {
        text::write_seq(w, &self.items)
    }

    fn read_text(&mut self, r: &mut dyn io::Read) -> usize
    where
        T: FromStr,
    {
        while let Some(value) = text::parse_next::<T>(r) {
            self.items.push(value);
        }
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfies_the_contract_shape() {
        let mut mock = MockSeq::from(vec![1, 2, 3]);
        assert_eq!(mock.len(), 3);
        assert_eq!(*mock.get(0).unwrap(), 1);
        *mock.get_mut(2).unwrap() = 30;
        assert_eq!(
            mock.get(3).copied(),
            Err(IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn text_matches_the_shared_format() {
        let mock = MockSeq::from(vec![1, 2, 3]);
        let mut out = Vec::new();
        mock.write_text(&mut out).unwrap();
        assert_eq!(out, b"(1, 2, 3)");
    }
}
