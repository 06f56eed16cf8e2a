use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::GenerationError;
use super::state::State;
use super::{Prefix, Token};
use crate::tokenizer::tokenize;

/// Represents an n-gram frequency model over word tokens.
///
/// The `NGramModel` stores states for prefixes of length `n-1` and records
/// how often each next token follows a given prefix, along with the prefixes
/// that opened each ingested sentence.
///
/// # Responsibilities
/// - Build the n-gram model from plain-text sentences
/// - Accumulate transition counts for each prefix
/// - Record sentence-start prefixes (with repetition)
///
/// # Invariants
/// - `n` is always >= 2
/// - Each state in `states` corresponds to a unique prefix of length `n-1`
/// - All state transitions have occurrence counts >= 1
/// - A sentence shorter than `n` tokens contributes nothing
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of tokens in the n-gram)
	n: usize, // must be >= 2

	/// Mapping from a prefix (length n-1) to its corresponding state
	states: HashMap<Prefix, State>,

	/// Opening (n-1)-token prefix of every sentence long enough to yield
	/// one. Duplicates are kept so frequent openings are drawn more often.
	starts: Vec<Prefix>,
}

impl NGramModel {
	/// Creates a new n-gram model of order `n`.
	///
	/// # Errors
	/// Returns `GenerationError::InvalidOrder` if `n < 2`.
	pub fn new(n: usize) -> Result<Self, GenerationError> {
		if n < 2 {
			return Err(GenerationError::InvalidOrder(n));
		}
		Ok(Self { n, states: HashMap::new(), starts: Vec::new() })
	}

	/// Creates a model of order `n` and ingests every sentence in `corpus`.
	///
	/// # Errors
	/// Returns `GenerationError::InvalidOrder` if `n < 2`.
	pub fn from_sentences<S: AsRef<str>>(n: usize, corpus: &[S]) -> Result<Self, GenerationError> {
		let mut model = Self::new(n)?;
		for sentence in corpus {
			model.add_sentence(sentence.as_ref());
		}
		log::info!("built {}-gram model: {} prefixes, {} sentence starts", n, model.states.len(), model.starts.len());
		Ok(model)
	}

	/// Adds one sentence to the model.
	///
	/// Tokenizes the input, records its opening prefix, and updates the
	/// transition counts for every n-gram window in the token sequence.
	///
	/// # Notes
	/// - Sentences with fewer than `n` tokens are ignored entirely: they
	///   cannot yield even one n-gram, so neither counts nor a start entry
	///   are recorded for them.
	/// - A sentence of exactly `n` tokens contributes exactly one n-gram
	///   and one start entry.
	pub fn add_sentence(&mut self, sentence: &str) {
		let tokens = tokenize(sentence);
		if tokens.len() < self.n {
			// Sentence too short, no n-grams to compute
			return;
		}

		self.starts.push(tokens[..self.n - 1].to_vec());

		// For each n-gram in the sentence
		for window in tokens.windows(self.n) {
			let prefix = window[..self.n - 1].to_vec();
			let next = &window[self.n - 1];

			// Get or create the state for this prefix
			let state = self.states.entry(prefix).or_insert_with(State::new);
			state.add_transition(next);
		}
	}

	/// Returns the order `n` of the model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Returns how many times `next` was observed after `prefix`.
	///
	/// Returns 0 for unknown prefixes or unseen continuations.
	pub fn count(&self, prefix: &[Token], next: &str) -> usize {
		self.states.get(prefix).map_or(0, |state| state.count(next))
	}

	/// Returns the recorded sentence-start prefixes, in ingestion order.
	pub fn starts(&self) -> &[Prefix] {
		&self.starts
	}

	/// True if no sentence yielded a single n-gram.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Number of distinct prefixes observed.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Read access to the per-prefix states, for estimation and
	/// start-prefix fallback.
	pub(crate) fn states(&self) -> &HashMap<Prefix, State> {
		&self.states
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corpus() -> Vec<&'static str> {
		vec![
			"To be or not to be.",
			"The lady doth protest too much, methinks.",
		]
	}

	fn prefix(words: &[&str]) -> Prefix {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn rejects_order_below_two() {
		assert_eq!(NGramModel::new(0).unwrap_err(), GenerationError::InvalidOrder(0));
		assert_eq!(NGramModel::new(1).unwrap_err(), GenerationError::InvalidOrder(1));
		assert!(NGramModel::new(2).is_ok());
	}

	#[test]
	fn counts_bigrams() {
		let model = NGramModel::from_sentences(2, &corpus()).unwrap();

		assert!(model.count(&prefix(&["to"]), "be") >= 1);
		assert!(model.count(&prefix(&["be"]), "or") >= 1);
		assert!(model.starts().contains(&prefix(&["to"])));
		assert!(model.starts().contains(&prefix(&["the"])));
		assert_eq!(model.starts().len(), 2);
	}

	#[test]
	fn counts_trigrams() {
		let model = NGramModel::from_sentences(3, &corpus()).unwrap();

		assert!(model.count(&prefix(&["to", "be"]), "or") >= 1);
		assert!(model.count(&prefix(&["be", "or"]), "not") >= 1);
		assert!(model.starts().contains(&prefix(&["to", "be"])));
	}

	#[test]
	fn counts_quadgrams() {
		let model = NGramModel::from_sentences(4, &corpus()).unwrap();

		assert!(model.count(&prefix(&["to", "be", "or"]), "not") >= 1);
		assert!(!model.starts().contains(&prefix(&["to", "be"])));
		assert!(model.starts().contains(&prefix(&["to", "be", "or"])));
	}

	#[test]
	fn one_increment_per_window() {
		// 6 tokens, order 3: exactly 6 - (3-1) = 4 increments, one start.
		let model = NGramModel::from_sentences(3, &["To be or not to be."]).unwrap();

		let total: usize = model.states().values().map(|state| state.total()).sum();
		assert_eq!(total, 4);
		assert_eq!(model.starts().len(), 1);
	}

	#[test]
	fn sentence_of_exact_length_contributes_one_ngram() {
		let model = NGramModel::from_sentences(3, &["Brevity is wit."]).unwrap();

		let total: usize = model.states().values().map(|state| state.total()).sum();
		assert_eq!(total, 1);
		assert_eq!(model.starts(), &[vec!["brevity".to_string(), "is".to_string()]]);
	}

	#[test]
	fn short_sentences_are_skipped() {
		let model = NGramModel::from_sentences(4, &["To be.", "Alas!", ""]).unwrap();

		assert!(model.is_empty());
		assert!(model.starts().is_empty());
		assert_eq!(model.len(), 0);
	}
}
