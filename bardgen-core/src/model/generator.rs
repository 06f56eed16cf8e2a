use rand::Rng;
use rand::prelude::{IndexedRandom, IteratorRandom};

use super::error::GenerationError;
use super::generation_input::{FallbackPolicy, GenerationInput};
use super::ngram_model::NGramModel;
use super::probability::ProbabilityTable;
use super::{Prefix, Token};

/// High-level text generator built on a trained n-gram model.
///
/// Owns the frequency model and the probability table derived from it.
/// Both are built once and never mutated afterwards, so a `Generator`
/// can serve any number of generation calls, each with its own random
/// source.
///
/// # Responsibilities
/// - Select a starting prefix (sentence openings first, any prefix as
///   fallback)
/// - Generate bounded free text, sliding the prefix window token by token
/// - Generate well-formed sentences (capitalized, terminally punctuated)
#[derive(Clone, Debug)]
pub struct Generator {
	model: NGramModel,
	probs: ProbabilityTable,
}

impl Generator {
	/// Creates a generator from a trained model.
	///
	/// Derives the conditional probability table once, up front.
	pub fn new(model: NGramModel) -> Self {
		let probs = ProbabilityTable::from_model(&model);
		Self { model, probs }
	}

	/// Read access to the underlying probability table.
	pub fn probabilities(&self) -> &ProbabilityTable {
		&self.probs
	}

	/// Read access to the underlying frequency model.
	pub fn model(&self) -> &NGramModel {
		&self.model
	}

	/// Picks a starting prefix for generation.
	///
	/// # Behavior
	/// - Draws uniformly from the recorded sentence starts, so frequent
	///   natural openings are favored by their repetition in the list.
	/// - If no sentence start was recorded, draws uniformly from all
	///   known prefixes instead.
	/// - Returns `None` only when the model is empty (degenerate corpus);
	///   the caller must treat this as a hard failure.
	pub fn pick_start<R: Rng>(&self, rng: &mut R) -> Option<Prefix> {
		if let Some(start) = self.model.starts().choose(rng) {
			return Some(start.clone());
		}
		self.model.states().keys().choose(rng).cloned()
	}

	/// Picks a starting prefix among the `top` most frequent ones.
	///
	/// Prefixes are ranked by their total transition count; ties break by
	/// token order so the ranking is stable. Drawing from the head of the
	/// ranking tends to produce better openings than a uniform draw.
	///
	/// Returns `None` if the model is empty.
	pub fn pick_frequent_start<R: Rng>(&self, top: usize, rng: &mut R) -> Option<Prefix> {
		let mut ranked: Vec<(&Prefix, usize)> = self
			.model
			.states()
			.iter()
			.map(|(prefix, state)| (prefix, state.total()))
			.collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		ranked.truncate(top.max(1));

		ranked.choose(rng).map(|(prefix, _)| (*prefix).clone())
	}

	/// Generates a well-formed sentence starting from `start`.
	///
	/// # Behavior
	/// - Seeds the output with the tokens of `start`.
	/// - Repeatedly samples the next token using the trailing (n-1)-token
	///   window, until the window has no recorded continuation or the
	///   output reaches `max_words` tokens in total.
	/// - Capitalizes the first word and appends a terminal `.` unless the
	///   last token already ends with terminal punctuation.
	///
	/// The output always begins with an uppercase character and always
	/// ends with `.`, `?` or `!`.
	///
	/// # Errors
	/// Returns `GenerationError::EmptyStart` if `start` has no tokens.
	pub fn generate_sentence<R: Rng>(&self, start: &[Token], max_words: usize, rng: &mut R) -> Result<String, GenerationError> {
		if start.is_empty() {
			return Err(GenerationError::EmptyStart);
		}

		let mut words: Vec<Token> = start.to_vec();
		while words.len() < max_words {
			match self.sample_after(&words, rng) {
				Some(next) => words.push(next),
				None => {
					// Expected terminal signal, not an error
					log::debug!("no continuation after {:?}, closing the sentence", self.window_of(&words));
					break;
				}
			}
		}

		if let Some(first) = words.first_mut() {
			capitalize(first);
		}

		let mut sentence = words.join(" ");
		if !sentence.ends_with(['.', '?', '!']) {
			sentence.push('.');
		}
		Ok(sentence)
	}

	/// Generates free text of up to `num_words` tokens starting from
	/// `initial`.
	///
	/// Unlike `generate_sentence`, the output is not capitalized or
	/// punctuated. When the trailing window has no recorded continuation,
	/// the `fallback` policy decides between stopping early and re-seeding
	/// the window from a random known prefix.
	///
	/// # Errors
	/// Returns `GenerationError::EmptyStart` if `initial` has no tokens.
	pub fn generate_text<R: Rng>(
		&self,
		initial: &[Token],
		num_words: usize,
		fallback: FallbackPolicy,
		rng: &mut R,
	) -> Result<String, GenerationError> {
		if initial.is_empty() {
			return Err(GenerationError::EmptyStart);
		}

		let mut words: Vec<Token> = initial.to_vec();
		while words.len() < num_words {
			match self.sample_after(&words, rng) {
				Some(next) => words.push(next),
				None => match fallback {
					FallbackPolicy::Stop => {
						log::debug!("no continuation after {:?}, stopping early", self.window_of(&words));
						break;
					}
					FallbackPolicy::RandomPrefix => {
						// Known prefixes always have a continuation, so
						// generation resumes on the next iteration.
						match self.model.states().keys().choose(rng) {
							Some(prefix) => words.extend(prefix.iter().cloned()),
							None => break,
						}
					}
				},
			}
		}
		words.truncate(num_words.max(initial.len()));

		Ok(words.join(" "))
	}

	/// Generates `num_samples` sentences according to `input`.
	///
	/// Picks a fresh sentence start for each sample. The random source is
	/// the one implied by `input.seed`, so a seeded input reproduces its
	/// output exactly.
	///
	/// # Errors
	/// Returns `GenerationError::NoStartAvailable` if the model yielded no
	/// usable starting prefix (empty or degenerate corpus).
	pub fn generate(&self, input: &GenerationInput) -> Result<Vec<String>, GenerationError> {
		let mut rng = input.rng();

		let mut sentences = Vec::with_capacity(input.num_samples);
		for _ in 0..input.num_samples {
			let start = self.pick_start(&mut rng).ok_or(GenerationError::NoStartAvailable)?;
			sentences.push(self.generate_sentence(&start, input.max_words, &mut rng)?);
		}
		Ok(sentences)
	}

	/// Samples the next token after the trailing (n-1)-token window of
	/// `words`.
	fn sample_after<R: Rng>(&self, words: &[Token], rng: &mut R) -> Option<Token> {
		self.probs.sample_next(self.window_of(words), rng)
	}

	/// Returns the trailing (n-1)-token window of `words`.
	fn window_of<'a>(&self, words: &'a [Token]) -> &'a [Token] {
		let window = self.model.order() - 1;
		&words[words.len() - window.min(words.len())..]
	}
}

/// Uppercases the first character of `word` in place.
fn capitalize(word: &mut Token) {
	let mut chars = word.chars();
	if let Some(first) = chars.next() {
		let rest = chars.as_str();
		*word = first.to_uppercase().chain(rest.chars()).collect();
	}
}
