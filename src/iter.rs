//! Snapshot iterators over a materialized traversal.
//!
//! A [`SnapshotIter`] owns its sequence. It is built once from a copy of the
//! container's contents and never looks back at the container, so later
//! `add`/`remove` calls cannot change what an existing iterator yields.
//!
//! The two ends returned by [`SnapshotIter::make`] share one immutable
//! `Arc<[T]>` buffer. Equality always compares contents, so ends from two
//! separate `make` calls over the same contents also compare equal.
use crate::error::{Error, Result};
use crate::order::{
	Ascending, Descending, Insertion, MiddleOut, Order, Reverse, SideCross, Traversal,
};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::sync::Arc;

/// Iterator in insertion order.
pub type InsertionOrder<T> = SnapshotIter<T, Insertion>;
/// Iterator in reverse insertion order.
pub type ReverseOrder<T> = SnapshotIter<T, Reverse>;
/// Iterator in ascending order.
pub type AscendingOrder<T> = SnapshotIter<T, Ascending>;
/// Iterator in descending order.
pub type DescendingOrder<T> = SnapshotIter<T, Descending>;
/// Iterator alternating between the lowest and highest remaining elements.
pub type SideCrossOrder<T> = SnapshotIter<T, SideCross>;
/// Iterator from the middle of the insertion order outwards.
pub type MiddleOutOrder<T> = SnapshotIter<T, MiddleOut>;

/// A cursor over an owned, immutable traversal sequence.
///
/// The cursor ranges over `[0, len]`. Every position below `len` can be
/// dereferenced with [`get`](Self::get); `len` itself is the end position.
/// The kind tag `K` keeps iterators of different orders apart at compile time.
pub struct SnapshotIter<T, K> {
	seq: Arc<[T]>,
	cursor: usize,
	kind: PhantomData<K>,
}

impl<T, K: Traversal> SnapshotIter<T, K> {
	fn new(seq: Arc<[T]>, cursor: usize) -> Self {
		SnapshotIter {
			seq,
			cursor,
			kind: PhantomData,
		}
	}

	/// Materializes `items` in order `K` and returns the `(begin, end)` pair.
	///
	/// The pair is a half-open range: advancing `begin` exactly
	/// `items.len()` times makes it equal to `end`.
	///
	/// ```
	/// use multiorder::iter::SideCrossOrder;
	///
	/// let (mut it, end) = SideCrossOrder::make(&[7, 15, 6, 1, 2]);
	/// let mut seen = Vec::new();
	/// while it != end {
	/// 	seen.push(*it.get().unwrap());
	/// 	it.advance();
	/// }
	/// assert_eq!(seen, [1, 15, 2, 7, 6]);
	/// ```
	pub fn make(items: &[T]) -> (Self, Self)
	where
		T: Clone + Ord,
	{
		let seq: Arc<[T]> = K::ORDER.arrange(items).into();
		let end = seq.len();
		(Self::new(Arc::clone(&seq), 0), Self::new(seq, end))
	}

	/// The traversal order of this iterator.
	pub fn order(&self) -> Order {
		K::ORDER
	}
}

impl<T, K> SnapshotIter<T, K> {
	/// Returns the element under the cursor.
	///
	/// Fails with [`Error::OutOfBounds`] at or past the end position.
	pub fn get(&self) -> Result<&T> {
		self.seq.get(self.cursor).ok_or(Error::OutOfBounds {
			position: self.cursor,
			len: self.seq.len(),
		})
	}

	/// Moves the cursor forward by one (prefix increment).
	///
	/// There is no bound check: moving past the end is allowed, but every
	/// later [`get`](Self::get) fails.
	pub fn advance(&mut self) -> &mut Self {
		self.cursor = self.cursor.saturating_add(1);
		self
	}

	/// Moves the cursor forward by one and returns the iterator as it was
	/// before the move (postfix increment).
	pub fn advance_post(&mut self) -> Self {
		let prior = self.clone();
		self.advance();
		prior
	}

	/// Current cursor position.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Length of the whole traversal sequence, which is also the end position.
	pub fn sequence_len(&self) -> usize {
		self.seq.len()
	}

	/// Returns `true` once the cursor has reached or passed the end.
	pub fn is_end(&self) -> bool {
		self.cursor >= self.seq.len()
	}

	/// The whole traversal sequence, independent of the cursor.
	pub fn as_slice(&self) -> &[T] {
		&self.seq
	}

	fn remaining(&self) -> usize {
		self.seq.len().saturating_sub(self.cursor)
	}
}

impl<T, K> Clone for SnapshotIter<T, K> {
	fn clone(&self) -> Self {
		SnapshotIter {
			seq: Arc::clone(&self.seq),
			cursor: self.cursor,
			kind: PhantomData,
		}
	}
}

impl<T: PartialEq, K> PartialEq for SnapshotIter<T, K> {
	fn eq(&self, other: &Self) -> bool {
		self.cursor == other.cursor && (Arc::ptr_eq(&self.seq, &other.seq) || self.seq == other.seq)
	}
}

impl<T: Eq, K> Eq for SnapshotIter<T, K> {}

impl<T: fmt::Debug, K: Traversal> fmt::Debug for SnapshotIter<T, K> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("SnapshotIter")
			.field("order", &K::ORDER)
			.field("cursor", &self.cursor)
			.field("seq", &self.seq)
			.finish()
	}
}

/// Yields clones of the remaining elements, advancing the cursor.
impl<T: Clone, K> Iterator for SnapshotIter<T, K> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		let value = self.seq.get(self.cursor)?.clone();
		self.cursor += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.remaining();
		(remaining, Some(remaining))
	}
}

impl<T: Clone, K> ExactSizeIterator for SnapshotIter<T, K> {}

impl<T: Clone, K> FusedIterator for SnapshotIter<T, K> {}
