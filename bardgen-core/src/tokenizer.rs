use crate::model::Token;

/// Splits raw text into lowercase word tokens.
///
/// A token is a maximal run of word characters (letters, digits, underscore).
/// Everything else (punctuation, whitespace, quotes) acts as a separator and
/// is discarded, never emitted. Contractions split at the apostrophe, so
/// "world's" yields `["world", "s"]`.
///
/// Empty input yields an empty vector. This function cannot fail.
pub fn tokenize(text: &str) -> Vec<Token> {
	let mut tokens = Vec::new();
	let mut current = String::new();

	for c in text.chars().flat_map(|c| c.to_lowercase()) {
		if c.is_alphanumeric() || c == '_' {
			current.push(c);
		} else if !current.is_empty() {
			tokens.push(std::mem::take(&mut current));
		}
	}
	if !current.is_empty() {
		tokens.push(current);
	}

	tokens
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowercases_and_strips_punctuation() {
		assert_eq!(tokenize("To be, or not to be!"), vec!["to", "be", "or", "not", "to", "be"]);
	}

	#[test]
	fn empty_input_yields_no_tokens() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("  ...  !?").is_empty());
	}

	#[test]
	fn keeps_digits_and_underscores() {
		assert_eq!(tokenize("act 2_scene 1"), vec!["act", "2_scene", "1"]);
	}

	#[test]
	fn splits_contractions_at_apostrophe() {
		assert_eq!(tokenize("All the world's a stage."), vec!["all", "the", "world", "s", "a", "stage"]);
	}
}
