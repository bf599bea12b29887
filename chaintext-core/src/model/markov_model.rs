use std::path::Path;

use serde::{Deserialize, Serialize};

use super::chain::OrderChain;
use super::filter;
use crate::error::Error;
use crate::text::TaggedSentence;

/// The full Markov model built from a filtered corpus: one transition
/// chain per order 1..=k plus the list of sentence starts.
///
/// # Responsibilities
/// - Build chains and starts from tagged sentences
/// - Resolve context windows, backing off to shorter suffixes when the
///   full window was never observed
/// - Persist to and reload from a snapshot file
///
/// # Invariants
/// - `chains[i]` has order `i + 1`; the last chain has order `order`
/// - Every sentence start has length exactly `order`; duplicates are
///   retained to preserve sampling weight
/// - The model is never mutated after `build` returns
///
/// # Notes
/// - Storing the whole tower rather than only the top order is what
///   makes backoff effective: a length-j suffix is looked up in the
///   order-j chain, where it can actually exist.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarkovModel {
	order: usize,
	chains: Vec<OrderChain>,
	starts: Vec<Vec<String>>,
}

impl MarkovModel {
	/// Builds a model of the given order from tagged sentences.
	///
	/// Per sentence: apply the admission filter; skip it when rejected
	/// or shorter than `order` tokens; record its first `order` tokens
	/// as a sentence start; then slide windows of every length 1..=order
	/// across it, recording each window's successor.
	///
	/// # Errors
	/// - [`Error::InvalidOrder`] if `order` is 0.
	/// - [`Error::EmptyModel`] if no sentence survives.
	pub fn build(sentences: &[TaggedSentence], order: usize) -> Result<Self, Error> {
		if order == 0 {
			return Err(Error::InvalidOrder(order));
		}

		let mut chains: Vec<OrderChain> = (1..=order).map(OrderChain::new).collect();
		let mut starts: Vec<Vec<String>> = Vec::new();

		for sentence in sentences {
			if !filter::accepts(sentence) {
				continue;
			}
			let tokens = &sentence.tokens;
			if tokens.len() < order {
				continue;
			}

			starts.push(tokens[..order].to_vec());

			for chain in &mut chains {
				let k = chain.order();
				for i in 0..tokens.len() - k {
					chain.record(&tokens[i..i + k], &tokens[i + k]);
				}
			}
		}

		if starts.is_empty() {
			return Err(Error::EmptyModel);
		}

		for chain in &chains {
			log::debug!("order-{} chain holds {} contexts", chain.order(), chain.len());
		}
		log::debug!("model built from {} sentence starts", starts.len());

		Ok(Self { order, chains, starts })
	}

	/// The top order of this model.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Recorded sentence starts, duplicates included.
	pub fn starts(&self) -> &[Vec<String>] {
		&self.starts
	}

	/// Looks up a context window in the chain matching its length.
	///
	/// Returns `None` for windows longer than the model order or never
	/// observed at their own order.
	pub fn successors(&self, context: &[String]) -> Option<&[String]> {
		let chain = self.chains.get(context.len().checked_sub(1)?)?;
		chain.successors(context)
	}

	/// Resolves a context window, backing off to shorter suffixes.
	///
	/// Tries the window at its own length first, then for each shrink
	/// amount drops the leading token and retries, down to a single
	/// token. Returns the first successor list found.
	pub fn successors_backoff(&self, context: &[String]) -> Option<&[String]> {
		for offset in 0..context.len() {
			if let Some(found) = self.successors(&context[offset..]) {
				return Some(found);
			}
		}
		None
	}

	/// Serializes the model to a snapshot file.
	///
	/// # Errors
	/// [`Error::Persistence`] on I/O or codec failure; nothing partial
	/// is left behind on codec failure.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
		let path = path.as_ref();
		let bytes = postcard::to_stdvec(self).map_err(|e| Error::persistence(path, e))?;
		std::fs::write(path, bytes).map_err(|e| Error::persistence(path, e))?;
		log::info!("model snapshot saved to {}", path.display());
		Ok(())
	}

	/// Reloads a model from a snapshot file.
	///
	/// # Errors
	/// - [`Error::Persistence`] on I/O or codec failure.
	/// - [`Error::EmptyModel`] if the snapshot holds no sentence starts.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|e| Error::persistence(path, e))?;
		let model: Self = postcard::from_bytes(&bytes).map_err(|e| Error::persistence(path, e))?;
		if model.starts.is_empty() {
			return Err(Error::EmptyModel);
		}
		log::info!("model snapshot loaded from {}", path.display());
		Ok(model)
	}
}
