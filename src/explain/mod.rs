//! Heuristic extractor for AI-written alert explanations.
//!
//! The generator is asked for three labelled sections but gives no
//! structural guarantee: headers arrive decorated, reworded, or missing,
//! and paragraphs run together. This module segments whatever arrives
//! into the three report fields, degrading to empty fields rather than
//! failing. Every input produces a valid record.

mod segment;
mod sentence;

use serde::{Deserialize, Serialize};

/// Structured form of one alert explanation.
///
/// All three fields are always present: a section the text never opened
/// is an empty string or empty list, never a missing field. Sentences are
/// trimmed, start uppercase, and keep their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExplanation {
    pub what_happened: String,
    pub why_it_matters: String,
    pub what_to_do: Vec<String>,
}

/// Two-pass pipeline: markup stripping → line segmentation with
/// per-section sentence normalization.
pub fn parse_explanation(raw: &str) -> ParsedExplanation {
    let clean = sentence::strip_markup(raw);
    segment::segment(&clean)
}

/// Parse a batch of explanations in parallel.
#[cfg(feature = "rayon")]
pub fn parse_batch(raws: &[String]) -> Vec<ParsedExplanation> {
    use rayon::prelude::*;
    raws.par_iter().map(|r| parse_explanation(r)).collect()
}

/// Parse a batch of explanations.
#[cfg(not(feature = "rayon"))]
pub fn parse_batch(raws: &[String]) -> Vec<ParsedExplanation> {
    raws.iter().map(|r| parse_explanation(r)).collect()
}
