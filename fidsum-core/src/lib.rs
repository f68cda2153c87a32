//! Placeholder-text ("Lorem Fidsum") generation library.
//!
//! This crate provides a paragraph generator working over a fixed bank
//! of pre-written phrases, including:
//! - An immutable phrase bank abstraction
//! - Random phrase selection without reuse before pool exhaustion
//! - Word-bounded paragraph assembly with a configurable soft cap
//! - Plain-text and HTML rendering of the generated paragraphs
//!
//! Generation is a pure function of its inputs plus a random source; the
//! random source is injectable so callers can make runs deterministic.

/// Core phrase bank, pool and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// the working-pool representation private.
pub mod model;

/// Typed errors reported when a generation request is rejected.
pub mod error;

/// Rendering of generated paragraphs (plain text, HTML).
pub mod format;

/// I/O utilities (phrase bank files, bank listing).
pub mod io;
