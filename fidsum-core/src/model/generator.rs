use rand::Rng;

use crate::model::generation_request::GenerationRequest;
use crate::model::paragraph::Paragraph;
use crate::model::phrase_pool::PhrasePool;

/// Word threshold at which a paragraph stops accepting new phrases.
pub const DEFAULT_SOFT_CAP: usize = 100;

/// Label prepended to the very first phrase of the very first paragraph.
const FIRST_PHRASE_LABEL: &str = "Lorem Fidsum, ";

/// High-level paragraph generator.
///
/// # Responsibilities
/// - Derive a working pool from the request's bank
/// - Draw phrases without reuse until the pool is exhausted, then recycle
/// - Assemble word-bounded paragraphs up to the configured soft cap
///
/// # Behavior
/// Each paragraph draws phrases while its word accumulator is at or
/// below the soft cap, and never draws more phrases than the working
/// pool held when the paragraph started (early close on pool
/// exhaustion). The first phrase of the first paragraph is lower-cased
/// on its first character and prefixed with `"Lorem Fidsum, "`.
///
/// # Notes
/// - Generation is pure apart from the random source; use
///   [`ParagraphGenerator::generate_with_rng`] with a seeded RNG for
///   reproducible output.
/// - Each call allocates its own pool, so concurrent calls over a shared
///   bank are independent.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphGenerator {
	soft_cap: usize,
}

impl Default for ParagraphGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl ParagraphGenerator {
	/// Creates a generator with the default 100-word soft cap.
	pub fn new() -> Self {
		Self { soft_cap: DEFAULT_SOFT_CAP }
	}

	/// Creates a generator with an explicit soft cap.
	pub fn with_soft_cap(soft_cap: usize) -> Self {
		Self { soft_cap }
	}

	/// The configured soft cap.
	pub fn soft_cap(&self) -> usize {
		self.soft_cap
	}

	/// Generates paragraphs using the thread RNG.
	pub fn generate(&self, request: &GenerationRequest) -> Vec<Paragraph> {
		self.generate_with_rng(request, &mut rand::rng())
	}

	/// Generates paragraphs using the provided random source.
	///
	/// # Behavior
	/// - Returns exactly `request.paragraph_count()` paragraphs, indexed
	///   `0..count` in order.
	/// - Every paragraph holds at least one phrase.
	/// - A paragraph closes once its word accumulator exceeds the soft
	///   cap, or earlier if it has drawn as many phrases as the pool held
	///   at paragraph start.
	pub fn generate_with_rng<R: Rng + ?Sized>(
		&self,
		request: &GenerationRequest,
		rng: &mut R,
	) -> Vec<Paragraph> {
		let mut pool = PhrasePool::new(request.bank());
		let mut paragraphs = Vec::with_capacity(request.paragraph_count());

		for index in 0..request.paragraph_count() {
			let draw_budget = pool.len();
			let mut phrases: Vec<String> = Vec::new();
			let mut word_count = 0;

			while word_count <= self.soft_cap && phrases.len() < draw_budget {
				let mut phrase = pool.draw(rng);
				if index == 0 && phrases.is_empty() {
					phrase = label_first_phrase(&phrase);
				}
				word_count += count_words(&phrase);
				phrases.push(phrase);
			}

			paragraphs.push(Paragraph::new(index, phrases.join(" ")));
		}

		paragraphs
	}
}

/// Word count of a phrase, split on single spaces.
fn count_words(phrase: &str) -> usize {
	phrase.split(' ').count()
}

/// Lower-cases the first character and prepends the opening label.
fn label_first_phrase(phrase: &str) -> String {
	let mut chars = phrase.chars();
	match chars.next() {
		Some(first) => format!("{FIRST_PHRASE_LABEL}{}{}", first.to_lowercase(), chars.as_str()),
		None => FIRST_PHRASE_LABEL.to_owned(),
	}
}
