//! # Integration Tests for Multiorder
//!
//! This module contains end-to-end tests that drive the container through its
//! public API with realistic workloads and compare it against a `Vec` oracle.

use multiorder::{Container, Error, Order};
use rand::prelude::*;

// ===========================================================================
// Large Scale Operation Tests
// ===========================================================================

#[test]
fn large_scale_add_and_traverse() {
	let mut c = Container::new();

	for i in 0..10_000 {
		c.add((i * 7919) % 10_007);
	}

	c.assert_invariants();
	assert_eq!(c.len(), 10_000);

	let ascending: Vec<i32> = c.begin_ascending_order().collect();
	assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
	assert_eq!(ascending.len(), 10_000);
}

#[test]
fn large_scale_random_operations() {
	let mut c = Container::new();
	let mut expected: Vec<i32> = Vec::new();
	let mut rng = rand::rng();

	for _ in 0..10_000 {
		let value: i32 = rng.random_range(0..100);
		let op: u8 = rng.random_range(0..3);

		match op {
			0 | 1 => {
				c.add(value);
				expected.push(value);
			}
			2 => {
				let before = expected.len();
				expected.retain(|e| *e != value);
				let removed = before - expected.len();

				match c.remove(&value) {
					Ok(n) => assert_eq!(n, removed),
					Err(Error::NotFound) => assert_eq!(removed, 0),
					Err(e) => panic!("unexpected error {e}"),
				}
			}
			_ => unreachable!(),
		}
	}

	c.assert_invariants();
	assert_eq!(c.len(), expected.len());
	assert_eq!(c.snapshot(), expected.as_slice());
}

// ===========================================================================
// Traversal Shape Tests
// ===========================================================================

#[test]
fn every_order_spans_len_advances() {
	for n in 0..40 {
		let c: Container<i32> = (0..n).map(|i| (i * 13) % 7).collect();
		c.assert_invariants();

		for order in Order::ALL {
			assert_eq!(c.traverse(order).len(), c.len(), "{order} with {n} elements");
		}

		let mut it = c.begin_side_cross_order();
		let end = c.end_side_cross_order();
		let mut steps = 0;
		while it != end {
			it.advance();
			steps += 1;
		}
		assert_eq!(steps, c.len());
		assert!(matches!(it.get(), Err(Error::OutOfBounds { .. })));
	}
}

#[test]
fn side_cross_alternates_extremes() {
	let c: Container<i32> = (1..=9).rev().collect();
	assert_eq!(c.traverse(Order::SideCross), [1, 9, 2, 8, 3, 7, 4, 6, 5]);

	let c: Container<i32> = (1..=8).collect();
	assert_eq!(c.traverse(Order::SideCross), [1, 8, 2, 7, 3, 6, 4, 5]);
}

#[test]
fn middle_out_from_lower_middle() {
	let c: Container<i32> = (1..=7).collect();
	assert_eq!(c.traverse(Order::MiddleOut), [4, 3, 5, 2, 6, 1, 7]);

	let c: Container<i32> = (1..=8).collect();
	assert_eq!(c.traverse(Order::MiddleOut), [4, 3, 5, 2, 6, 1, 7, 8]);
}

// ===========================================================================
// Snapshot Isolation Tests
// ===========================================================================

#[test]
fn iterators_ignore_later_mutation() {
	let mut c: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();

	let pairs = (
		(c.begin_order(), c.end_order()),
		(c.begin_reverse_order(), c.end_reverse_order()),
		(c.begin_middle_out_order(), c.end_middle_out_order()),
	);

	c.remove(&15).unwrap();
	c.add(100);
	c.add(-4);

	assert_eq!(pairs.0 .0.as_slice(), [7, 15, 6, 1, 2]);
	assert_eq!(pairs.0 .1.cursor(), 5);
	assert_eq!(pairs.1 .0.collect::<Vec<_>>(), [2, 1, 6, 15, 7]);
	assert_eq!(pairs.2 .0.collect::<Vec<_>>(), [6, 15, 1, 7, 2]);

	assert_eq!(c.begin_order().collect::<Vec<_>>(), [7, 6, 1, 2, 100, -4]);
}

#[test]
fn repeated_construction_is_idempotent() {
	let mut rng = rand::rng();
	let c: Container<i32> = (0..200).map(|_| rng.random_range(-50..50)).collect();

	for order in Order::ALL {
		assert_eq!(c.traverse(order), c.traverse(order), "{order}");
	}
	assert_eq!(c.begin_descending_order(), c.begin_descending_order());
	assert_eq!(c.end_side_cross_order(), c.end_side_cross_order());
	assert_ne!(c.begin_ascending_order(), c.end_ascending_order());
}

#[test]
fn postfix_returns_prior_position() {
	let c: Container<i32> = [10, 20, 30].into_iter().collect();
	let mut it = c.begin_descending_order();

	let prior = it.advance_post();
	assert_eq!(prior.get(), Ok(&30));
	assert_eq!(it.get(), Ok(&20));
	assert_eq!(prior.cursor() + 1, it.cursor());
}
