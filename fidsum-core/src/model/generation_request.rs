use crate::error::GenerateError;
use crate::model::phrase_bank::PhraseBank;

/// Validated input for one generation run.
///
/// A `GenerationRequest` borrows the bank for the duration of a single
/// call and carries the requested paragraph count. It can only be built
/// through [`GenerationRequest::new`], which enforces the generator
/// preconditions, so a request in hand is always usable.
///
/// # Invariants
/// - `paragraph_count >= 1`
/// - the bank holds at least 2 phrases
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
	bank: &'a PhraseBank,
	paragraph_count: usize,
}

impl<'a> GenerationRequest<'a> {
	/// Builds a request, rejecting invalid arguments up front.
	///
	/// # Errors
	/// - [`GenerateError::InvalidParagraphCount`] if `paragraph_count < 1`.
	/// - [`GenerateError::EmptyBank`] if the bank has zero phrases.
	/// - [`GenerateError::BankTooSmall`] if the bank has fewer than 2
	///   phrases (the draw policy always skips the first pool position,
	///   so a 1-phrase bank degenerates).
	pub fn new(bank: &'a PhraseBank, paragraph_count: usize) -> Result<Self, GenerateError> {
		if paragraph_count < 1 {
			return Err(GenerateError::InvalidParagraphCount);
		}
		if bank.is_empty() {
			return Err(GenerateError::EmptyBank);
		}
		if bank.len() < 2 {
			return Err(GenerateError::BankTooSmall(bank.len()));
		}
		Ok(Self { bank, paragraph_count })
	}

	/// The bank this request draws from.
	pub fn bank(&self) -> &'a PhraseBank {
		self.bank
	}

	/// How many paragraphs to generate.
	pub fn paragraph_count(&self) -> usize {
		self.paragraph_count
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bank(phrases: &[&str]) -> PhraseBank {
		PhraseBank::new(phrases.iter().map(|p| p.to_string()).collect())
	}

	#[test]
	fn rejects_zero_paragraph_count() {
		let bank = bank(&["One.", "Two."]);
		assert_eq!(
			GenerationRequest::new(&bank, 0).unwrap_err(),
			GenerateError::InvalidParagraphCount
		);
	}

	#[test]
	fn rejects_empty_bank() {
		let bank = bank(&[]);
		assert_eq!(
			GenerationRequest::new(&bank, 1).unwrap_err(),
			GenerateError::EmptyBank
		);
	}

	#[test]
	fn rejects_single_phrase_bank() {
		let bank = bank(&["Only one."]);
		assert_eq!(
			GenerationRequest::new(&bank, 1).unwrap_err(),
			GenerateError::BankTooSmall(1)
		);
	}

	#[test]
	fn accepts_minimal_valid_input() {
		let bank = bank(&["One.", "Two."]);
		let request = GenerationRequest::new(&bank, 1).unwrap();
		assert_eq!(request.paragraph_count(), 1);
		assert_eq!(request.bank().len(), 2);
	}
}
