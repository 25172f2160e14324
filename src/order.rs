//! # Traversal Orders
//!
//! Each traversal order is a pure function from a read-only view of the
//! container's contents to a freshly materialized sequence. The functions in
//! this module never touch the container; they copy out of the slice they are
//! handed, so any number of them can be computed from one snapshot without
//! interfering with each other.
//!
//! | Order        | Sequence                                                    |
//! |--------------|-------------------------------------------------------------|
//! | `Insertion`  | contents as appended                                        |
//! | `Reverse`    | contents back to front                                      |
//! | `Ascending`  | stable sort, smallest first                                 |
//! | `Descending` | stable sort, largest first                                  |
//! | `SideCross`  | ascending, then lowest, highest, next lowest, next highest  |
//! | `MiddleOut`  | insertion order, from the lower middle outwards, left first |
//!
//! ```text
//! contents    [7, 15, 6, 1, 2]
//!
//! SideCross   sorted [1, 2, 6, 7, 15]
//!                     ^            ^      low, high, low, high, low
//!             => [1, 15, 2, 7, 6]
//!
//! MiddleOut   [7, 15, 6, 1, 2]
//!                     ^                   start at (n - 1) / 2
//!             => [6, 15, 1, 7, 2]         then left, right, left, right
//! ```
//!
//! The runtime [`Order`] enum names an order; the zero-sized tags
//! ([`Insertion`], [`Reverse`], ...) name it at the type level so that
//! iterators of different orders are different types.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the six supported traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Order {
	/// The order elements were appended in.
	Insertion,
	/// Insertion order, back to front.
	Reverse,
	/// Smallest to largest. Equal elements keep their insertion order.
	Ascending,
	/// Largest to smallest. Equal elements keep their insertion order.
	Descending,
	/// Alternately the lowest and the highest remaining element, lowest first.
	SideCross,
	/// From the lower middle of the insertion order, alternately one step
	/// left and one step right.
	MiddleOut,
}

impl Order {
	/// Every order, in declaration order.
	pub const ALL: [Order; 6] = [
		Order::Insertion,
		Order::Reverse,
		Order::Ascending,
		Order::Descending,
		Order::SideCross,
		Order::MiddleOut,
	];

	/// The kebab-case name used by `Display`, `FromStr` and serde.
	pub const fn name(self) -> &'static str {
		match self {
			Order::Insertion => "insertion",
			Order::Reverse => "reverse",
			Order::Ascending => "ascending",
			Order::Descending => "descending",
			Order::SideCross => "side-cross",
			Order::MiddleOut => "middle-out",
		}
	}

	/// Materializes `items` in this order.
	pub fn arrange<T: Clone + Ord>(self, items: &[T]) -> Vec<T> {
		log::trace!("building {} traversal over {} elements", self, items.len());
		match self {
			Order::Insertion => insertion(items),
			Order::Reverse => reverse(items),
			Order::Ascending => ascending(items),
			Order::Descending => descending(items),
			Order::SideCross => side_cross(items),
			Order::MiddleOut => middle_out(items),
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Returned when parsing an [`Order`] from an unknown name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal order `{0}`")]
pub struct ParseOrderError(String);

impl FromStr for Order {
	type Err = ParseOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Order::ALL
			.into_iter()
			.find(|order| order.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| ParseOrderError(s.to_owned()))
	}
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Copies `items` unchanged.
pub fn insertion<T: Clone>(items: &[T]) -> Vec<T> {
	items.to_vec()
}

/// Copies `items` back to front.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
	items.iter().rev().cloned().collect()
}

/// Copies `items` sorted smallest first. The sort is stable.
pub fn ascending<T: Clone + Ord>(items: &[T]) -> Vec<T> {
	let mut seq = items.to_vec();
	seq.sort();
	seq
}

/// Copies `items` sorted largest first. The sort is stable, so equal
/// elements are not reversed relative to each other.
pub fn descending<T: Clone + Ord>(items: &[T]) -> Vec<T> {
	let mut seq = items.to_vec();
	seq.sort_by(|a, b| b.cmp(a));
	seq
}

/// Sorts `items` ascending, then takes alternately from the low end and the
/// high end, starting low.
///
/// For an odd length the middle element is the last one taken, on a low turn.
pub fn side_cross<T: Clone + Ord>(items: &[T]) -> Vec<T> {
	let mut sorted: VecDeque<T> = ascending(items).into();
	let mut seq = Vec::with_capacity(sorted.len());
	let mut take_low = true;

	loop {
		let next = if take_low {
			sorted.pop_front()
		} else {
			sorted.pop_back()
		};
		let Some(value) = next else {
			break;
		};
		seq.push(value);
		take_low = !take_low;
	}

	seq
}

/// Starts at index `(n - 1) / 2` of `items` (the lower middle for an even
/// length) and then alternately steps one further left and one further right,
/// left first. Once one side runs out the rest of the other side follows.
///
/// Unlike [`side_cross`], this works on insertion order and does not sort.
pub fn middle_out<T: Clone>(items: &[T]) -> Vec<T> {
	let Some(last) = items.len().checked_sub(1) else {
		return Vec::new();
	};
	let mid = last / 2;

	let mut left = items[..mid].iter().rev();
	let mut right = items[mid + 1..].iter();
	let mut seq = Vec::with_capacity(items.len());
	seq.push(items[mid].clone());

	let mut take_left = true;
	loop {
		let next = if take_left {
			left.next().or_else(|| right.next())
		} else {
			right.next().or_else(|| left.next())
		};
		let Some(value) = next else {
			break;
		};
		seq.push(value.clone());
		take_left = !take_left;
	}

	seq
}

// ---------------------------------------------------------------------------
// Type-level order tags
// ---------------------------------------------------------------------------

/// Names a traversal order at the type level.
///
/// Implemented by the six zero-sized tags below. [`SnapshotIter`] is generic
/// over this trait, so an ascending iterator can never be compared with a
/// reverse one.
///
/// [`SnapshotIter`]: crate::iter::SnapshotIter
pub trait Traversal {
	/// The runtime order this tag stands for.
	const ORDER: Order;
}

macro_rules! traversal_tag {
	($(#[$doc:meta])* $name:ident => $order:expr) => {
		$(#[$doc])*
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
		pub struct $name;

		impl Traversal for $name {
			const ORDER: Order = $order;
		}
	};
}

traversal_tag!(
	/// Tag for [`Order::Insertion`].
	Insertion => Order::Insertion
);
traversal_tag!(
	/// Tag for [`Order::Reverse`].
	Reverse => Order::Reverse
);
traversal_tag!(
	/// Tag for [`Order::Ascending`].
	Ascending => Order::Ascending
);
traversal_tag!(
	/// Tag for [`Order::Descending`].
	Descending => Order::Descending
);
traversal_tag!(
	/// Tag for [`Order::SideCross`].
	SideCross => Order::SideCross
);
traversal_tag!(
	/// Tag for [`Order::MiddleOut`].
	MiddleOut => Order::MiddleOut
);

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: [i32; 5] = [7, 15, 6, 1, 2];

	/// Orders by `key` only; `tag` lets tests see which duplicate came first.
	#[derive(Debug, Clone, Copy)]
	struct Keyed {
		key: i32,
		tag: char,
	}

	impl PartialEq for Keyed {
		fn eq(&self, other: &Self) -> bool {
			self.key == other.key
		}
	}

	impl Eq for Keyed {}

	impl PartialOrd for Keyed {
		fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
			Some(self.cmp(other))
		}
	}

	impl Ord for Keyed {
		fn cmp(&self, other: &Self) -> std::cmp::Ordering {
			self.key.cmp(&other.key)
		}
	}

	fn keyed(input: &[(i32, char)]) -> Vec<Keyed> {
		input
			.iter()
			.map(|&(key, tag)| Keyed {
				key,
				tag,
			})
			.collect()
	}

	fn tags(seq: &[Keyed]) -> String {
		seq.iter().map(|k| k.tag).collect()
	}

	// -----------------------------------------------------------------------
	// Builder Tests
	// -----------------------------------------------------------------------

	#[test]
	fn insertion_and_reverse() {
		assert_eq!(insertion(&BASE), vec![7, 15, 6, 1, 2]);
		assert_eq!(reverse(&BASE), vec![2, 1, 6, 15, 7]);
	}

	#[test]
	fn ascending_and_descending() {
		assert_eq!(ascending(&BASE), vec![1, 2, 6, 7, 15]);
		assert_eq!(descending(&BASE), vec![15, 7, 6, 2, 1]);
		assert_eq!(ascending(&[10, -20, 190, 190, 5]), vec![-20, 5, 10, 190, 190]);
		assert_eq!(descending(&[10, -20, 190, 190, 5]), vec![190, 190, 10, 5, -20]);
	}

	#[test]
	fn sorts_are_stable() {
		let input = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]);
		assert_eq!(tags(&ascending(&input)), "bdace");
		assert_eq!(tags(&descending(&input)), "acebd");
	}

	#[test]
	fn side_cross_odd_and_even() {
		assert_eq!(side_cross(&BASE), vec![1, 15, 2, 7, 6]);
		assert_eq!(side_cross(&[1, 2, 3, 4]), vec![1, 4, 2, 3]);
		assert_eq!(side_cross(&[3, 1, 2]), vec![1, 3, 2]);
	}

	#[test]
	fn middle_out_odd_and_even() {
		assert_eq!(middle_out(&BASE), vec![6, 15, 1, 7, 2]);
		assert_eq!(middle_out(&[1, 2, 3, 4]), vec![2, 1, 3, 4]);
		assert_eq!(middle_out(&[1, 2]), vec![1, 2]);
		assert_eq!(middle_out(&[1, 2, 3, 4, 5, 6]), vec![3, 2, 4, 1, 5, 6]);
	}

	#[test]
	fn middle_out_uses_insertion_order() {
		// Sorting first would start from 3.
		assert_eq!(middle_out(&[5, 1, 9]), vec![1, 5, 9]);
	}

	#[test]
	fn empty_and_single() {
		let empty: [i32; 0] = [];
		for order in Order::ALL {
			assert!(order.arrange(&empty).is_empty(), "{order} over empty input");
			assert_eq!(order.arrange(&[42]), vec![42], "{order} over one element");
		}
	}

	#[test]
	fn arrange_dispatches() {
		assert_eq!(Order::Insertion.arrange(&BASE), insertion(&BASE));
		assert_eq!(Order::Reverse.arrange(&BASE), reverse(&BASE));
		assert_eq!(Order::Ascending.arrange(&BASE), ascending(&BASE));
		assert_eq!(Order::Descending.arrange(&BASE), descending(&BASE));
		assert_eq!(Order::SideCross.arrange(&BASE), side_cross(&BASE));
		assert_eq!(Order::MiddleOut.arrange(&BASE), middle_out(&BASE));
	}

	// -----------------------------------------------------------------------
	// Naming Tests
	// -----------------------------------------------------------------------

	#[test]
	fn names_round_trip() {
		for order in Order::ALL {
			assert_eq!(order.to_string().parse::<Order>(), Ok(order));
		}
		assert_eq!("Side-Cross".parse::<Order>(), Ok(Order::SideCross));
		assert_eq!(
			"sideways".parse::<Order>().unwrap_err().to_string(),
			"unknown traversal order `sideways`"
		);
	}

	#[test]
	fn tags_match_orders() {
		assert_eq!(<Insertion as Traversal>::ORDER, Order::Insertion);
		assert_eq!(<Reverse as Traversal>::ORDER, Order::Reverse);
		assert_eq!(<Ascending as Traversal>::ORDER, Order::Ascending);
		assert_eq!(<Descending as Traversal>::ORDER, Order::Descending);
		assert_eq!(<SideCross as Traversal>::ORDER, Order::SideCross);
		assert_eq!(<MiddleOut as Traversal>::ORDER, Order::MiddleOut);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_names() {
		assert_eq!(serde_json::to_string(&Order::MiddleOut).unwrap(), "\"middle-out\"");
		assert_eq!(serde_json::from_str::<Order>("\"side-cross\"").unwrap(), Order::SideCross);
	}
}
