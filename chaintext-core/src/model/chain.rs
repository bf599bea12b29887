use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fixed-order transition chain over word tokens.
///
/// The `OrderChain` maps each context window of exactly `order` tokens
/// to the list of tokens observed immediately after that window in the
/// training corpus.
///
/// # Responsibilities
/// - Accumulate successor observations during model building
/// - Look up the successor list for a context window
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key has length exactly `order`
/// - Successor lists are non-empty and keep insertion order; duplicates
///   are preserved so that uniform sampling reproduces frequency
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderChain {
	/// The context length of this chain.
	order: usize,

	/// Mapping from a context window (length `order`) to its successors.
	entries: HashMap<Vec<String>, Vec<String>>,
}

impl OrderChain {
	/// Creates an empty chain of the given order.
	pub(crate) fn new(order: usize) -> Self {
		Self { order, entries: HashMap::new() }
	}

	/// Returns the context length of this chain.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct context windows recorded.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Records one observation: `next` followed `window` in the corpus.
	pub(crate) fn record(&mut self, window: &[String], next: &str) {
		debug_assert_eq!(window.len(), self.order);
		self.entries
			.entry(window.to_vec())
			.or_default()
			.push(next.to_owned());
	}

	/// Returns the successor list for a window, if it was ever observed.
	pub fn successors(&self, window: &[String]) -> Option<&[String]> {
		if window.len() != self.order {
			return None;
		}
		self.entries.get(window).map(Vec::as_slice)
	}
}
