use serde::{Deserialize, Serialize};

/// One generated paragraph: phrases joined by single spaces, tagged with
/// a zero-based index.
///
/// Paragraphs are plain values: immutable once returned, no embedded
/// markup, owned by the caller. Downstream formatters (see
/// [`crate::format`]) turn a sequence of them into HTML or plain text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
	index: usize,
	text: String,
}

impl Paragraph {
	pub(crate) fn new(index: usize, text: String) -> Self {
		Self { index, text }
	}

	/// Zero-based position of this paragraph in the generated sequence.
	pub fn index(&self) -> usize {
		self.index
	}

	/// The paragraph body, internal single spaces, no markup.
	pub fn text(&self) -> &str {
		&self.text
	}
}
