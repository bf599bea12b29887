use crate::text::TaggedSentence;

/// Decides whether a tokenized sentence may enter the training set.
///
/// A sentence is accepted iff:
/// - its `(` and `)` token counts match,
/// - its `"` token count is even,
/// - at least one token is tagged as a verb.
///
/// Rejected sentences are discarded wholesale; no partial use.
pub fn accepts(sentence: &TaggedSentence) -> bool {
	let opens = sentence.tokens.iter().filter(|t| *t == "(").count();
	let closes = sentence.tokens.iter().filter(|t| *t == ")").count();
	if opens != closes {
		return false;
	}

	let quotes = sentence.tokens.iter().filter(|t| *t == "\"").count();
	if quotes % 2 != 0 {
		return false;
	}

	sentence.tags.iter().any(|tag| tag.is_verb())
}
