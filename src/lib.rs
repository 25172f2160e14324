//! # Multiorder: An Insertion-Ordered Container with Six Traversals
//!
//! This crate provides [`Container`], a generic collection that stores its
//! elements in the order they were added and can hand out read-only iterators
//! over six different orderings of that content.
//!
//! ## Design Overview
//!
//! ### Key Concepts
//!
//! **Snapshots**: An iterator never borrows the container. Building a traversal
//! copies the current contents, arranges the copy, and moves it into an
//! immutable `Arc<[T]>` owned by the iterator pair. Later mutation of the
//! container cannot change an iterator that already exists.
//!
//! **Traversal Orders**: Each order is a pure function over a slice, found in
//! [`order`]. They never share state, so building one does not affect another.
//!
//! **One Iterator Shape**: All six orders share a single generic
//! [`iter::SnapshotIter`], tagged with a zero-sized kind type so iterators of
//! different orders stay distinct types.
//!
//! ### Data Flow
//!
//! ```text
//!   ┌──────────────┐   snapshot()    ┌──────────────┐   Order::arrange   ┌──────────────┐
//!   │  Container   │ ──────────────► │    &[T]      │ ─────────────────► │  Arc<[T]>    │
//!   │  Vec<T>      │                 │  (borrowed)  │      (copy)        │  (owned)     │
//!   └──────────────┘                 └──────────────┘                    └──────┬───────┘
//!                                                                              │
//!                                                              ┌───────────────┴──────────┐
//!                                                              ▼                          ▼
//!                                                       begin (cursor 0)          end (cursor len)
//! ```
//!
//! ## Basic Usage
//!
//! ```
//! use multiorder::Container;
//!
//! let mut c = Container::new();
//! for x in [7, 15, 6, 1, 2] {
//! 	c.add(x);
//! }
//! assert_eq!(c.render(), "7 15 6 1 2 \n");
//!
//! // Walk a begin/end pair
//! let mut it = c.begin_side_cross_order();
//! let end = c.end_side_cross_order();
//! let mut seen = Vec::new();
//! while it != end {
//! 	seen.push(*it.get().unwrap());
//! 	it.advance();
//! }
//! assert_eq!(seen, [1, 15, 2, 7, 6]);
//!
//! // Or use the begin iterator as a plain Rust iterator
//! let middle_out: Vec<_> = c.begin_middle_out_order().collect();
//! assert_eq!(middle_out, [6, 15, 1, 7, 2]);
//!
//! // Remove every occurrence of a value
//! assert!(c.remove(&15).is_ok());
//! assert!(c.remove(&15).is_err());
//! ```
//!
//! ## Thread Safety
//!
//! The container has no internal locking. To share one between threads, wrap
//! it in a lock and build traversals while holding the read side; the returned
//! iterators are plain owned values and can be sent anywhere once built.

use std::fmt;

pub mod error;
pub mod iter;
pub mod order;

pub use error::{Error, Result};
pub use order::Order;

use iter::{
	AscendingOrder, DescendingOrder, InsertionOrder, MiddleOutOrder, ReverseOrder, SideCrossOrder,
	SnapshotIter,
};
use order::{Ascending, Descending, Insertion, MiddleOut, Reverse, SideCross, Traversal};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A duplicate-permitting collection that keeps its elements in insertion
/// order.
///
/// Elements are only ever appended with [`add`](Self::add) or dropped with
/// [`remove`](Self::remove); there is no access by index and no in-place
/// update. Reordered views come from the traversal methods, which copy the
/// contents rather than rearranging them.
///
/// # Type Parameters
///
/// - `T`: The element type. Traversals need `Clone + Ord`, removal needs
///   `PartialEq`, rendering needs `Display`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Container<T> {
	data: Vec<T>,
}

impl<T> Default for Container<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Container<T> {
	/// Creates an empty container.
	pub fn new() -> Self {
		Container {
			data: Vec::new(),
		}
	}

	/// Appends `value` at the end.
	pub fn add(&mut self, value: T) {
		self.data.push(value);
	}

	/// Number of elements, counting duplicates.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the container holds no elements.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The current contents in insertion order.
	///
	/// This is the read-only view traversals are built from. It borrows the
	/// container, so the container cannot be changed while it is held.
	pub fn snapshot(&self) -> &[T] {
		&self.data
	}

	/// Iterates over the current contents in insertion order by reference.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.data.iter()
	}
}

impl<T: PartialEq> Container<T> {
	/// Removes every element equal to `value` and returns how many were
	/// removed. The survivors keep their relative order.
	///
	/// # Errors
	///
	/// Returns [`Error::NotFound`] if no element equals `value`. The
	/// container is unchanged in that case.
	///
	/// # Example
	///
	/// ```
	/// use multiorder::{Container, Error};
	///
	/// let mut c: Container<i32> = [1, 2, 2, 3].into_iter().collect();
	/// assert_eq!(c.remove(&2), Ok(2));
	/// assert_eq!(c.snapshot(), [1, 3]);
	/// assert_eq!(c.remove(&2), Err(Error::NotFound));
	/// ```
	pub fn remove(&mut self, value: &T) -> Result<usize> {
		let before = self.data.len();
		self.data.retain(|e| e != value);
		let removed = before - self.data.len();

		if removed == 0 {
			log::debug!("remove matched none of {before} elements");
			return Err(Error::NotFound);
		}

		log::debug!("removed {removed} of {before} elements");
		Ok(removed)
	}

	/// Returns `true` if any element equals `value`.
	pub fn contains(&self, value: &T) -> bool {
		self.data.contains(value)
	}
}

impl<T: fmt::Display> Container<T> {
	/// Renders every element followed by a single space, then a newline.
	///
	/// An empty container renders as `"\n"`.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

// ---------------------------------------------------------------------------
// Traversals
// ---------------------------------------------------------------------------

impl<T: Clone + Ord> Container<T> {
	/// Builds the `(begin, end)` pair for traversal kind `K` from the current
	/// contents.
	///
	/// ```
	/// use multiorder::Container;
	/// use multiorder::order::Descending;
	///
	/// let c: Container<i32> = [2, 9, 4].into_iter().collect();
	/// let (begin, end) = c.make::<Descending>();
	/// assert_eq!(begin.collect::<Vec<_>>(), [9, 4, 2]);
	/// assert_eq!(end.cursor(), 3);
	/// ```
	pub fn make<K: Traversal>(&self) -> (SnapshotIter<T, K>, SnapshotIter<T, K>) {
		SnapshotIter::make(&self.data)
	}

	/// Materializes the current contents in an order chosen at runtime.
	pub fn traverse(&self, order: Order) -> Vec<T> {
		order.arrange(&self.data)
	}

	/// Start of the insertion-order traversal.
	pub fn begin_order(&self) -> InsertionOrder<T> {
		self.make::<Insertion>().0
	}

	/// End of the insertion-order traversal.
	pub fn end_order(&self) -> InsertionOrder<T> {
		self.make::<Insertion>().1
	}

	/// Start of the reverse insertion-order traversal.
	pub fn begin_reverse_order(&self) -> ReverseOrder<T> {
		self.make::<Reverse>().0
	}

	/// End of the reverse insertion-order traversal.
	pub fn end_reverse_order(&self) -> ReverseOrder<T> {
		self.make::<Reverse>().1
	}

	/// Start of the ascending traversal.
	pub fn begin_ascending_order(&self) -> AscendingOrder<T> {
		self.make::<Ascending>().0
	}

	/// End of the ascending traversal.
	pub fn end_ascending_order(&self) -> AscendingOrder<T> {
		self.make::<Ascending>().1
	}

	/// Start of the descending traversal.
	pub fn begin_descending_order(&self) -> DescendingOrder<T> {
		self.make::<Descending>().0
	}

	/// End of the descending traversal.
	pub fn end_descending_order(&self) -> DescendingOrder<T> {
		self.make::<Descending>().1
	}

	/// Start of the side-cross traversal: lowest, highest, second lowest, ...
	pub fn begin_side_cross_order(&self) -> SideCrossOrder<T> {
		self.make::<SideCross>().0
	}

	/// End of the side-cross traversal.
	pub fn end_side_cross_order(&self) -> SideCrossOrder<T> {
		self.make::<SideCross>().1
	}

	/// Start of the middle-out traversal: the lower middle element, then
	/// alternately left and right.
	pub fn begin_middle_out_order(&self) -> MiddleOutOrder<T> {
		self.make::<MiddleOut>().0
	}

	/// End of the middle-out traversal.
	pub fn end_middle_out_order(&self) -> MiddleOutOrder<T> {
		self.make::<MiddleOut>().1
	}
}

// ---------------------------------------------------------------------------
// Trait Implementations
// ---------------------------------------------------------------------------

impl<T: fmt::Display> fmt::Display for Container<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for e in &self.data {
			write!(f, "{e} ")?;
		}
		writeln!(f)
	}
}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(&self.data).finish()
	}
}

impl<T> From<Vec<T>> for Container<T> {
	fn from(data: Vec<T>) -> Self {
		Container {
			data,
		}
	}
}

impl<T> FromIterator<T> for Container<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Container {
			data: iter.into_iter().collect(),
		}
	}
}

impl<T> Extend<T> for Container<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.data.extend(iter);
	}
}

impl<'a, T> IntoIterator for &'a Container<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.iter()
	}
}

// ===========================================================================
// Invariant Validation
// ===========================================================================

impl<T: Clone + Ord + fmt::Debug> Container<T> {
	/// Validates every traversal against the current contents. Panics with
	/// diagnostic info if any rule is violated.
	///
	/// # Invariants Checked
	///
	/// 1. Every traversal is a permutation of the contents
	/// 2. Insertion and reverse match the stored order exactly
	/// 3. Ascending and descending are sorted
	/// 4. Side-cross alternates rising low picks and falling high picks
	/// 5. Middle-out starts at the lower middle of the insertion order
	/// 6. Each `(begin, end)` pair spans exactly `len()` advances
	#[doc(hidden)]
	pub fn assert_invariants(&self) {
		let mut expected = self.data.clone();
		expected.sort();

		for order in Order::ALL {
			let seq = self.traverse(order);
			let mut sorted = seq.clone();
			sorted.sort();
			assert_eq!(sorted, expected, "{order} traversal is not a permutation of {self:?}");
		}

		assert_eq!(self.traverse(Order::Insertion), self.data, "insertion order differs");

		let mut reversed = self.data.clone();
		reversed.reverse();
		assert_eq!(self.traverse(Order::Reverse), reversed, "reverse order differs");

		let ascending = self.traverse(Order::Ascending);
		assert!(ascending.windows(2).all(|w| w[0] <= w[1]), "not ascending: {ascending:?}");

		let descending = self.traverse(Order::Descending);
		assert!(descending.windows(2).all(|w| w[0] >= w[1]), "not descending: {descending:?}");

		let side_cross = self.traverse(Order::SideCross);
		let lows: Vec<_> = side_cross.iter().step_by(2).collect();
		let highs: Vec<_> = side_cross.iter().skip(1).step_by(2).collect();
		assert!(lows.windows(2).all(|w| w[0] <= w[1]), "side-cross lows not rising: {side_cross:?}");
		assert!(highs.windows(2).all(|w| w[0] >= w[1]), "side-cross highs not falling: {side_cross:?}");
		if let (Some(low), Some(high)) = (lows.last(), highs.last()) {
			assert!(low <= high, "side-cross picks crossed: {side_cross:?}");
		}

		let middle_out = self.traverse(Order::MiddleOut);
		if let Some(last) = self.data.len().checked_sub(1) {
			assert_eq!(middle_out[0], self.data[last / 2], "middle-out does not start at the middle");
		}

		self.assert_span::<Insertion>();
		self.assert_span::<Reverse>();
		self.assert_span::<Ascending>();
		self.assert_span::<Descending>();
		self.assert_span::<SideCross>();
		self.assert_span::<MiddleOut>();
	}

	fn assert_span<K: Traversal>(&self) {
		let (mut it, end) = self.make::<K>();
		assert_eq!(it == end, self.is_empty(), "{} begin == end disagrees with is_empty", K::ORDER);
		for step in 0..self.len() {
			assert!(it != end, "{} reached end after {step} advances", K::ORDER);
			assert!(it.get().is_ok(), "{} not dereferenceable at {step}", K::ORDER);
			it.advance();
		}
		assert!(it == end, "{} did not reach end after {} advances", K::ORDER, self.len());
		assert_eq!(
			it.get(),
			Err(Error::OutOfBounds {
				position: self.len(),
				len: self.len(),
			})
		);
	}
}
