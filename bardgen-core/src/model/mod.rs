//! Top-level module for the n-gram generation system.
//!
//! This module provides a word-level n-gram generation pipeline, including:
//! - Fixed-order frequency models (`NGramModel`)
//! - Derived conditional probability tables (`ProbabilityTable`)
//! - Internal per-prefix state management (`State`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// Error type shared across the model and generation layers.
pub mod error;

/// High-level interface for generating text from a trained n-gram model.
///
/// Exposes start-prefix selection, bounded free-text generation, and
/// well-formed sentence generation with configurable fallback behavior.
pub mod generator;

/// Generation configuration structure.
///
/// Stores generation parameters such as output length, sample count,
/// fallback policy, and random-source seeding.
pub mod generation_input;

/// Fixed-order n-gram frequency model (`n >= 2`).
///
/// Handles sentence ingestion, transition counting, and
/// sentence-start bookkeeping.
pub mod ngram_model;

/// Conditional probability tables derived from a frequency model.
///
/// Supports normalization of transition counts and weighted random
/// sampling of the next token.
pub mod probability;

/// Internal representation of a single n-gram state (prefix).
///
/// Tracks outgoing transition counts. This module is not exposed publicly.
mod state;

/// A normalized word, as produced by the tokenizer.
pub type Token = String;

/// An ordered (n-1)-token sequence used as a lookup key into the model.
pub type Prefix = Vec<Token>;
