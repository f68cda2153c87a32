use rand::Rng;

use crate::model::phrase_bank::PhraseBank;

/// Working pool / spent bank pair for one generation run.
///
/// A `PhrasePool` starts as a copy of the full bank content. Drawing
/// moves a phrase from the working pool to the spent bank, so no phrase
/// can be drawn again before the pool is exhausted. When the working
/// pool is down to exactly one phrase it is considered exhausted: the
/// spent bank (in draw order, with the leftover phrase appended) becomes
/// the new working pool and the spent bank is cleared, restoring full
/// circulation for the next cycle.
///
/// ## Invariants
/// - A phrase is present in the working pool at most once per cycle.
/// - The working pool never holds fewer than 2 phrases at draw time
///   (guaranteed by the bank-size precondition checked at request
///   construction).
///
/// The draw deliberately never selects the working pool's first
/// position; whatever sits at index 0 stays undrawable until a reset
/// moves it. This reproduces the observable selection bias of the
/// original generator.
#[derive(Debug)]
pub(crate) struct PhrasePool {
	working: Vec<String>,
	spent: Vec<String>,
}

impl PhrasePool {
	/// Creates a fresh pool holding the full bank content.
	pub(crate) fn new(bank: &PhraseBank) -> Self {
		Self {
			working: bank.all().to_vec(),
			spent: Vec::new(),
		}
	}

	/// Number of phrases currently drawable (working pool size).
	pub(crate) fn len(&self) -> usize {
		self.working.len()
	}

	/// Draws one phrase, resetting first if the pool is exhausted.
	///
	/// The random index is taken from `1..len`, skipping position 0.
	pub(crate) fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
		if self.working.len() == 1 {
			self.reset();
		}
		let index = rng.random_range(1..self.working.len());
		let phrase = self.working.remove(index);
		self.spent.push(phrase.clone());
		phrase
	}

	/// Recycles the spent bank into a full working pool.
	fn reset(&mut self) {
		let leftover = self.working.pop();
		self.working = std::mem::take(&mut self.spent);
		if let Some(phrase) = leftover {
			self.working.push(phrase);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};

	use super::*;

	/// RNG whose raw output is always zero, so every bounded draw
	/// resolves to the lowest allowed index.
	struct ZeroRng;

	impl RngCore for ZeroRng {
		fn next_u32(&mut self) -> u32 {
			0
		}

		fn next_u64(&mut self) -> u64 {
			0
		}

		fn fill_bytes(&mut self, dst: &mut [u8]) {
			dst.fill(0);
		}
	}

	fn bank(phrases: &[&str]) -> PhraseBank {
		PhraseBank::new(phrases.iter().map(|p| p.to_string()).collect())
	}

	#[test]
	fn draw_skips_first_position() {
		let bank = bank(&["a", "b", "c"]);
		let mut pool = PhrasePool::new(&bank);
		// Lowest allowed index is 1, never 0.
		assert_eq!(pool.draw(&mut ZeroRng), "b");
	}

	#[test]
	fn two_phrase_pool_alternates_across_resets() {
		let bank = bank(&["a", "b"]);
		let mut pool = PhrasePool::new(&bank);
		let drawn: Vec<String> = (0..4).map(|_| pool.draw(&mut ZeroRng)).collect();
		// Each reset moves the previously drawn phrase to position 0,
		// leaving only the other one drawable.
		assert_eq!(drawn, ["b", "a", "b", "a"]);
	}

	#[test]
	fn no_reuse_before_exhaustion() {
		let bank = bank(&["a", "b", "c", "d", "e"]);
		let mut pool = PhrasePool::new(&bank);
		let mut rng = StdRng::seed_from_u64(7);

		// With 5 phrases the pool resets on the 5th draw; the first 4
		// draws must all be distinct.
		let mut drawn: Vec<String> = (0..4).map(|_| pool.draw(&mut rng)).collect();
		drawn.sort();
		drawn.dedup();
		assert_eq!(drawn.len(), 4);
	}

	#[test]
	fn reset_restores_full_circulation() {
		let bank = bank(&["a", "b", "c"]);
		let mut pool = PhrasePool::new(&bank);
		let mut rng = StdRng::seed_from_u64(1);

		pool.draw(&mut rng);
		pool.draw(&mut rng);
		assert_eq!(pool.len(), 1);

		// The 3rd draw triggers the reset first, so the leftover phrase
		// rejoins the pool instead of being dropped.
		pool.draw(&mut rng);
		assert_eq!(pool.len(), 2);
	}
}
