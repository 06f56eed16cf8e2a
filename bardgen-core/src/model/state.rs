use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Token;

/// Represents a state in an n-gram model.
///
/// A `State` corresponds to a fixed (n-1)-token prefix and stores all
/// observed transitions from this prefix to the next token.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities
/// - Accumulate transition occurrences during counting
/// - Expose counts and totals for probability estimation
///
/// ## Invariants
/// - Each transition occurrence count is strictly positive
/// - A state exists only for prefixes observed with at least one continuation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Outgoing transitions indexed by the next token.
	/// The value represents how many times this transition was observed.
	/// Example: { "be" => 42, "die" => 3 }
	transitions: HashMap<Token, usize>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self { transitions: HashMap::new() }
	}

	/// Records an occurrence of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub fn add_transition(&mut self, next: &str) {
		*self.transitions.entry(next.to_owned()).or_insert(0) += 1;
	}

	/// Returns the occurrence count recorded for `next`, or 0 if unseen.
	pub fn count(&self, next: &str) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Returns the total number of observed transitions from this state.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Iterates over `(next_token, occurrence_count)` pairs.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(token, count)| (token.as_str(), *count))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transitions_accumulate() {
		let mut state = State::new();
		state.add_transition("be");
		state.add_transition("be");
		state.add_transition("die");

		assert_eq!(state.count("be"), 2);
		assert_eq!(state.count("die"), 1);
		assert_eq!(state.count("sleep"), 0);
		assert_eq!(state.total(), 3);
	}
}
