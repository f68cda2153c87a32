use serde::{Deserialize, Serialize};

/// The canonical, ordered list of candidate phrases.
///
/// A phrase is an opaque non-empty string; it is never split or mutated
/// by the generator. The bank itself has no mutation operations: one
/// generation run derives its own working pool from it and the bank is
/// shared freely between runs.
///
/// ## Invariants
/// - Phrase order is preserved as given.
/// - The draw policy needs at least 2 phrases to be meaningful; this is
///   checked at request construction, not here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhraseBank {
	phrases: Vec<String>,
}

impl PhraseBank {
	/// Creates a bank from an ordered list of phrases.
	pub fn new(phrases: Vec<String>) -> Self {
		Self { phrases }
	}

	/// Creates a bank from newline-separated text, one phrase per line.
	///
	/// Lines are trimmed and blank lines are dropped, so a file with
	/// trailing newlines or spacing between phrases parses cleanly.
	pub fn from_lines(text: &str) -> Self {
		let phrases = text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_owned)
			.collect();
		Self { phrases }
	}

	/// Returns the full content list, read-only.
	pub fn all(&self) -> &[String] {
		&self.phrases
	}

	/// Number of phrases in the bank.
	pub fn len(&self) -> usize {
		self.phrases.len()
	}

	/// Whether the bank has no phrases at all.
	pub fn is_empty(&self) -> bool {
		self.phrases.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_lines_trims_and_drops_blanks() {
		let bank = PhraseBank::from_lines("  First phrase.  \n\nSecond phrase.\n   \nThird phrase.\n");
		assert_eq!(bank.all(), ["First phrase.", "Second phrase.", "Third phrase."]);
	}

	#[test]
	fn order_is_preserved() {
		let bank = PhraseBank::new(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
		assert_eq!(bank.len(), 3);
		assert_eq!(bank.all()[0], "a");
		assert_eq!(bank.all()[2], "c");
	}
}
