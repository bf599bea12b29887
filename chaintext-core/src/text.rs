//! Sentence segmentation, tokenization and part-of-speech tagging.
//!
//! These utilities feed the model builder but are not part of the
//! statistical core; they stay intentionally small. The [`Tagger`]
//! trait is the seam for swapping in a real tagger.

/// Part-of-speech tag attached to one token.
///
/// Only the verb/non-verb distinction matters to the sentence filter,
/// so the tag set is reduced to exactly that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosTag {
	Verb,
	Other,
}

impl PosTag {
	pub fn is_verb(self) -> bool {
		matches!(self, Self::Verb)
	}
}

/// Assigns one [`PosTag`] per token.
pub trait Tagger {
	fn tag(&self, tokens: &[String]) -> Vec<PosTag>;
}

/// A tokenized training sentence with per-token tags.
///
/// # Invariants
/// - `tags.len() == tokens.len()`
#[derive(Clone, Debug)]
pub struct TaggedSentence {
	pub tokens: Vec<String>,
	pub tags: Vec<PosTag>,
}

/// Auxiliaries and modal verbs recognized verbatim (case-insensitive).
const AUXILIARIES: &[&str] = &[
	"am", "is", "are", "was", "were", "be", "been", "being",
	"do", "does", "did", "have", "has", "had",
	"will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

/// Small heuristic English tagger.
///
/// Marks a token as a verb when it is a known auxiliary/modal, or when
/// it carries a common verbal suffix. Good enough for the structural
/// sentence filter; wrong often enough that nothing else should rely
/// on it.
pub struct HeuristicTagger;

impl Tagger for HeuristicTagger {
	fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
		tokens
			.iter()
			.map(|token| {
				let lower = token.to_lowercase();
				if AUXILIARIES.contains(&lower.as_str()) {
					return PosTag::Verb;
				}
				if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
					return PosTag::Verb;
				}
				PosTag::Other
			})
			.collect()
	}
}

/// Splits raw text into sentence strings.
///
/// A sentence ends after `.`, `!` or `?` when followed by whitespace
/// or end of input. Blank results are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
	let mut sentences = Vec::new();
	let mut current = String::new();
	let mut chars = text.chars().peekable();

	while let Some(c) = chars.next() {
		current.push(c);
		if matches!(c, '.' | '!' | '?') {
			let boundary = match chars.peek() {
				Some(next) => next.is_whitespace(),
				None => true,
			};
			if boundary {
				let sentence = current.trim();
				if !sentence.is_empty() {
					sentences.push(sentence.to_owned());
				}
				current.clear();
			}
		}
	}

	let tail = current.trim();
	if !tail.is_empty() {
		sentences.push(tail.to_owned());
	}

	sentences
}

/// Splits a sentence into word and punctuation tokens.
///
/// - Alphanumeric runs (plus inner `'` and `-`) form word tokens.
/// - Each of `. , ! ? ; : ( ) "` becomes its own single-char token.
/// - Case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();

	for c in text.chars() {
		if c.is_alphanumeric() || c == '\'' || c == '-' {
			current.push(c);
		} else if matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '"') {
			if !current.is_empty() {
				tokens.push(std::mem::take(&mut current));
			}
			tokens.push(c.to_string());
		} else if c.is_whitespace() {
			if !current.is_empty() {
				tokens.push(std::mem::take(&mut current));
			}
		} else {
			current.push(c);
		}
	}

	if !current.is_empty() {
		tokens.push(current);
	}

	tokens
}

/// Segments, tokenizes and tags a whole corpus.
pub fn prepare<T: Tagger>(text: &str, tagger: &T) -> Vec<TaggedSentence> {
	split_sentences(text)
		.iter()
		.map(|sentence| {
			let tokens = tokenize(sentence);
			let tags = tagger.tag(&tokens);
			TaggedSentence { tokens, tags }
		})
		.collect()
}
