use thiserror::Error;

/// Errors surfaced by model construction and generation.
///
/// A prefix with no recorded continuation is deliberately not represented
/// here: it is normal control flow during generation and is absorbed by the
/// `Generator` (sentence termination or early stop), never surfaced to the
/// caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
	/// The requested n-gram order is below the minimum of 2.
	#[error("n must be >= 2, got {0}")]
	InvalidOrder(usize),

	/// No sentence-start prefix and no fallback prefix exists.
	///
	/// Happens when the corpus was empty or every sentence was shorter
	/// than the model order. Fatal for the generation call; the caller
	/// must skip or report.
	#[error("no valid starting prefix available (empty or degenerate corpus)")]
	NoStartAvailable,

	/// Generation was asked to start from an empty prefix.
	#[error("starting prefix is empty")]
	EmptyStart,
}
