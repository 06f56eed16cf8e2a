//! Word-level n-gram language modeling and text generation library.
//!
//! This crate provides a modular n-gram generation system including:
//! - Word tokenization (lowercase, punctuation stripped)
//! - Fixed-order n-gram frequency models (bigram and up)
//! - Conditional probability estimation per prefix
//! - Probabilistic generation of free text and well-formed sentences
//!
//! The library consumes plain-text sentences from an external source;
//! corpus acquisition, document parsing, and presentation are out of scope.

/// Core n-gram models and generation logic.
///
/// This module exposes the model, probability table, and generator types
/// while keeping internal state representations private.
pub mod model;

/// Word tokenization.
///
/// Normalizes raw text into lowercase word tokens.
pub mod tokenizer;
