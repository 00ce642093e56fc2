//! Sentence enhancer: turns one stripped sentence into one bullet line.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::enhancement::substitutions::SubstitutionTable;
use crate::enhancement::tone::Tone;

/// Suffixes appended to short professional bullets.
pub const IMPACT_PHRASES: [&str; 4] = [
    ", resulting in improved outcomes",
    ", driving measurable results",
    ", enhancing overall performance",
    ", contributing to team success",
];

/// Bullets shorter than this (in characters) get an impact phrase.
pub const IMPACT_PHRASE_THRESHOLD: usize = 80;

/// Source of the single random choice in the engine: which impact phrase to
/// append. Implementations return an index in `0..choices`.
pub trait ImpactPicker {
    fn pick(&mut self, choices: usize) -> usize;
}

/// `ImpactPicker` backed by a `rand` generator. One instance per request.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ImpactPicker for RandomPicker {
    fn pick(&mut self, choices: usize) -> usize {
        self.rng.gen_range(0..choices)
    }
}

/// Enhances a single sentence whose weak opener has already been removed.
///
/// Steps: trim and drop trailing punctuation, run the substitution table,
/// lowercase a leading capital, prefix `verb`, and for the professional tone
/// append an impact phrase when the line is still short.
pub fn enhance_sentence(
    sentence: &str,
    verb: &str,
    tone: Tone,
    substitutions: &SubstitutionTable,
    picker: &mut dyn ImpactPicker,
) -> String {
    let cleaned = sentence.trim().trim_end_matches(['.', ',', '!', '?']);
    let substituted = substitutions.apply(cleaned);
    let clause = lowercase_first(&substituted);

    let mut line = format!("{verb} {clause}");

    if tone == Tone::Professional && line.chars().count() < IMPACT_PHRASE_THRESHOLD {
        let index = picker.pick(IMPACT_PHRASES.len()) % IMPACT_PHRASES.len();
        line.push_str(IMPACT_PHRASES[index]);
    }

    line
}

/// Lowercases the first character only if it is uppercase.
fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}
