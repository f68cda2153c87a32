use thiserror::Error;

/// Errors rejecting a generation request before any work is done.
///
/// Generation itself is a pure computation with no transient failure
/// modes, so there is no retry path: every variant here is an argument
/// error reported synchronously, and no partial result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// The phrase bank has zero entries.
	#[error("Phrase bank is empty")]
	EmptyBank,

	/// The phrase bank is too small for the draw policy, which always
	/// skips the first pool position and therefore needs at least two
	/// phrases to choose from.
	#[error("Phrase bank needs at least 2 phrases, got {0}")]
	BankTooSmall(usize),

	/// The requested paragraph count is below 1.
	#[error("Paragraph count must be at least 1")]
	InvalidParagraphCount,
}
