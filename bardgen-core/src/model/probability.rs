use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ngram_model::NGramModel;
use super::{Prefix, Token};

/// Conditional next-token probability distributions derived from an
/// `NGramModel`.
///
/// For every observed prefix, holds the distribution over possible next
/// tokens, estimated from transition frequencies.
///
/// # Responsibilities
/// - Normalize transition counts into probabilities (estimation)
/// - Draw one next token by weighted random sampling
///
/// # Invariants
/// - Every probability lies in (0, 1]
/// - For every prefix, the probabilities sum to 1.0 (within floating-point
///   tolerance)
/// - The set of prefixes is exactly the set of prefixes of the source model
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
	/// The order of the source model.
	n: usize,

	/// Mapping from a prefix to its next-token distribution.
	probs: HashMap<Prefix, HashMap<Token, f64>>,
}

impl ProbabilityTable {
	/// Estimates conditional probabilities from a frequency model.
	///
	/// Each next-token count is divided by the total count across all next
	/// tokens for its prefix, so every per-prefix distribution sums to 1.0.
	///
	/// Deterministic and pure: the same model always yields bit-identical
	/// probabilities.
	pub fn from_model(model: &NGramModel) -> Self {
		let mut probs = HashMap::with_capacity(model.len());

		for (prefix, state) in model.states() {
			let total = state.total() as f64;
			let distribution = state
				.transitions()
				.map(|(token, count)| (token.to_owned(), count as f64 / total))
				.collect();
			probs.insert(prefix.clone(), distribution);
		}

		Self { n: model.order(), probs }
	}

	/// Draws the next token after `prefix` by weighted random sampling.
	///
	/// The probability of selecting a token is its estimated conditional
	/// probability, consumed from the caller's random source. Performs a
	/// cumulative subtraction over the distribution to select a bucket.
	///
	/// Returns `None` if the prefix is unknown. No fallback happens here;
	/// fallback policy belongs to the caller.
	pub fn sample_next<R: Rng>(&self, prefix: &[Token], rng: &mut R) -> Option<Token> {
		let distribution = self.probs.get(prefix)?;

		let mut r: f64 = rng.random_range(0.0..1.0);
		let mut fallback: Option<&str> = None;
		for (token, probability) in distribution {
			if r < *probability {
				return Some(token.clone());
			}
			r -= probability;
			fallback = Some(token.as_str());
		}

		// Floating-point rounding can leave a sliver of r; the invariant
		// guarantees the distribution is non-empty, so take the last bucket.
		fallback.map(str::to_owned)
	}

	/// True if `prefix` has a recorded distribution.
	pub fn contains(&self, prefix: &[Token]) -> bool {
		self.probs.contains_key(prefix)
	}

	/// Returns the estimated probability of `next` following `prefix`,
	/// or 0.0 if the pair was never observed.
	pub fn probability(&self, prefix: &[Token], next: &str) -> f64 {
		self.probs
			.get(prefix)
			.and_then(|distribution| distribution.get(next))
			.copied()
			.unwrap_or(0.0)
	}

	/// Returns the order `n` of the source model.
	pub fn order(&self) -> usize {
		self.n
	}

	/// True if the source model had no observed n-grams.
	pub fn is_empty(&self) -> bool {
		self.probs.is_empty()
	}

	/// Iterates over all per-prefix distributions.
	pub fn distributions(&self) -> impl Iterator<Item = (&Prefix, &HashMap<Token, f64>)> {
		self.probs.iter()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn table() -> ProbabilityTable {
		let model = NGramModel::from_sentences(2, &[
			"To be or not to be.",
			"The lady doth protest too much, methinks.",
			"All the world is a stage.",
			"Brevity is the soul of wit.",
		])
		.unwrap();
		ProbabilityTable::from_model(&model)
	}

	fn prefix(words: &[&str]) -> Prefix {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn distributions_sum_to_one() {
		let table = table();
		assert!(!table.is_empty());

		for (_, distribution) in table.distributions() {
			let sum: f64 = distribution.values().sum();
			assert!((sum - 1.0).abs() < 1e-5, "distribution sums to {}", sum);
			assert!(distribution.values().all(|p| *p > 0.0 && *p <= 1.0));
		}
	}

	#[test]
	fn estimation_is_idempotent() {
		let model = NGramModel::from_sentences(3, &["To be or not to be."]).unwrap();

		let first = ProbabilityTable::from_model(&model);
		let second = ProbabilityTable::from_model(&model);
		assert_eq!(first, second);
	}

	#[test]
	fn known_ratio() {
		// After "to": "be" twice, nothing else, in the first sentence alone.
		let model = NGramModel::from_sentences(2, &["To be or not to be."]).unwrap();
		let table = ProbabilityTable::from_model(&model);

		assert_eq!(table.probability(&prefix(&["to"]), "be"), 1.0);
		assert_eq!(table.probability(&prefix(&["not"]), "to"), 1.0);
		assert_eq!(table.probability(&prefix(&["to"]), "sleep"), 0.0);
	}

	#[test]
	fn sampled_token_comes_from_the_distribution() {
		let table = table();
		let mut rng = StdRng::seed_from_u64(42);

		for _ in 0..100 {
			let token = table.sample_next(&prefix(&["the"]), &mut rng).unwrap();
			assert!(table.probability(&prefix(&["the"]), &token) > 0.0);
		}
	}

	#[test]
	fn unknown_prefix_yields_none() {
		let table = table();
		let mut rng = StdRng::seed_from_u64(7);

		assert_eq!(table.sample_next(&prefix(&["hamlet"]), &mut rng), None);
	}

	#[test]
	fn seeded_sampling_is_reproducible() {
		let table = table();

		let mut first = StdRng::seed_from_u64(1234);
		let mut second = StdRng::seed_from_u64(1234);
		for _ in 0..50 {
			assert_eq!(
				table.sample_next(&prefix(&["the"]), &mut first),
				table.sample_next(&prefix(&["the"]), &mut second)
			);
		}
	}
}
