//! Top-level module for the Markov generation system.
//!
//! This crate provides a grammar-filtered word-level Markov generator, including:
//! - Fixed-order transition chains (`OrderChain`)
//! - A multi-order model with a backoff tower (`MarkovModel`)
//! - Sentence admission heuristics (`filter`)
//! - Generation configuration (`GenerationRequest`)
//! - A seedable generation interface (`Generator`)
//! - Token-sequence rendering (`render`)

/// High-level interface for generating text from a built model.
///
/// Exposes start resolution, the generation loop with backoff and
/// random-restart recovery, and an explicit iteration ceiling.
pub mod generator;

/// Multi-order Markov model with sentence starts and persistence.
///
/// Holds one chain per order 1..=k so that unseen high-order contexts
/// can degrade gracefully to shorter suffixes.
pub mod markov_model;

/// Fixed-order transition chain.
///
/// Maps k-token context windows to the tokens observed after them,
/// duplicates preserved to encode frequency.
mod chain;

/// Sentence admission filter.
///
/// Structural checks (paren balance, quote parity) plus a verb-tag
/// requirement; rejected sentences are discarded wholesale.
pub mod filter;

/// Rendering of generated token sequences into display text.
pub mod render;

pub use chain::OrderChain;
