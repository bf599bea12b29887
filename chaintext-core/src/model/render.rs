/// Tokens that end a sentence and allow generation to stop.
pub(crate) fn is_terminal(token: &str) -> bool {
	matches!(token, "." | "!" | "?")
}

/// Tokens that fuse onto the preceding word with no space.
fn fuses(token: &str) -> bool {
	matches!(token, "," | "." | "!" | "?" | ";" | ":")
}

/// Renders a token sequence into display text.
///
/// A token consisting solely of one of `, . ! ? ; :` is appended to the
/// previous token with no space; a leading such token stands alone.
/// All other tokens join with single spaces.
pub fn render(tokens: &[String]) -> String {
	let mut out = String::new();
	for token in tokens {
		if out.is_empty() {
			out.push_str(token);
			continue;
		}

		if fuses(token) {
			out.push_str(token);
		} else {
			out.push(' ');
			out.push_str(token);
		}
	}
	out
}
