//! Word-level Markov text generation library.
//!
//! This crate provides a grammar-filtered n-gram generation system including:
//! - Fixed-order word chains with a full backoff tower (orders 1..=k)
//! - Sentence filtering on structural and part-of-speech heuristics
//! - Seedable, reproducible generation with forced-start handling
//! - Snapshot persistence of built models
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core Markov model and generation logic.
///
/// This module exposes the model, generator and rendering interfaces
/// while keeping internal chain representations private.
pub mod model;

/// Corpus acquisition (folder of `.txt` files) and snapshot path helpers.
pub mod corpus;

/// Sentence segmentation, tokenization and part-of-speech tagging.
///
/// These are collaborators of the model, deliberately simple; the
/// [`text::Tagger`] trait is the seam for plugging a better tagger.
pub mod text;

/// Error kinds shared across the crate.
pub mod error;

/// I/O utilities (file discovery, path helpers).
///
/// Not exposed
pub(crate) mod io;
