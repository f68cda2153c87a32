//! Top-level module for the paragraph generation system.
//!
//! This module provides the phrase-based paragraph generator, including:
//! - The canonical phrase list (`PhraseBank`)
//! - A validated per-call request (`GenerationRequest`)
//! - Internal working-pool management (`PhrasePool`)
//! - The generated paragraph value (`Paragraph`)
//! - A high-level generation interface (`ParagraphGenerator`)

/// High-level interface producing word-bounded paragraphs from a bank.
///
/// Exposes soft-cap configuration and generation with either the thread
/// RNG or an injected (seedable) random source.
pub mod generator;

/// Canonical ordered list of candidate phrases.
pub mod phrase_bank;

/// Validated input for one generation run.
///
/// Construction enforces the generator preconditions (paragraph count,
/// minimum bank size) so a request in hand is always usable.
pub mod generation_request;

/// Generated paragraph value (index + joined text).
pub mod paragraph;

/// Internal working pool / spent bank pair for one run.
///
/// Tracks which phrases are still drawable and resets on exhaustion.
/// This module is not exposed publicly.
mod phrase_pool;
