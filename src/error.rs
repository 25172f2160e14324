//! # Error Types for the Container
//!
//! This module defines the two ways an operation on a [`Container`] or one of
//! its snapshot iterators can fail.
//!
//! ## Error Handling Strategy
//!
//! Nothing in this crate panics on caller misuse. Both failures are reported
//! through [`Result`] and leave all state untouched:
//!
//! ```text
//! Container::remove(x)
//!      │
//!      ▼
//! Drop every element equal to x
//!      │
//!      ├── none dropped ──────► Err(NotFound)     (contents unchanged)
//!      │
//!      ▼
//! Ok(count)
//!
//! SnapshotIter::get()
//!      │
//!      ├── cursor >= len ─────► Err(OutOfBounds)  (iterator unchanged)
//!      │
//!      ▼
//! Ok(&element)
//! ```
//!
//! [`Container`]: crate::Container

use thiserror::Error;

/// Errors returned by container and iterator operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// `remove` was asked for a value that no element equals.
	///
	/// The container is left exactly as it was. Whether the value was absent
	/// is only known once the whole sequence has been scanned, and at that
	/// point nothing has been removed.
	#[error("element does not exist in the container")]
	NotFound,

	/// An iterator was dereferenced at or past its end position.
	///
	/// The end position of a traversal is never dereferenceable. Advancing
	/// past it is allowed, but every later dereference fails with this error.
	#[error("iterator position {position} is out of bounds for a traversal of length {len}")]
	OutOfBounds {
		/// Cursor position at the time of the access.
		position: usize,
		/// Length of the traversal sequence.
		len: usize,
	},
}

/// A Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;
