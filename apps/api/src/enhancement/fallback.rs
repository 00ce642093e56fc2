//! Fallback engine: rule-based enhancement used when no language model is
//! configured or the remote call fails.
//!
//! Flow: segment → strip weak opener → enhance sentence (verb cycled by
//! sentence index) → bullet list. Input with no usable sentence produces a
//! fixed three-line filler instead. The engine has no failure path.

use tracing::debug;

use crate::enhancement::openers::strip_weak_opener;
use crate::enhancement::segmenter::segment;
use crate::enhancement::sentence::{enhance_sentence, ImpactPicker};
use crate::enhancement::substitutions::SubstitutionTable;
use crate::enhancement::tone::Tone;

/// Prefix for every rendered bullet line.
pub const BULLET_MARKER: &str = "• ";

/// Holds the compiled static tables. Built once and shared behind an `Arc`.
pub struct FallbackEngine {
    substitutions: SubstitutionTable,
}

impl FallbackEngine {
    pub fn new() -> Result<Self, regex::Error> {
        let substitutions = SubstitutionTable::new()?;
        debug!("Compiled {} substitution rules", substitutions.rule_count());
        Ok(Self { substitutions })
    }

    /// Produces the ordered bullet lines for `text`. Never empty.
    pub fn bullets(&self, text: &str, tone: Tone, picker: &mut dyn ImpactPicker) -> Vec<String> {
        let bullets: Vec<String> = segment(text)
            .into_iter()
            .enumerate()
            .filter_map(|(index, sentence)| {
                let stripped = strip_weak_opener(sentence);
                if stripped.trim().is_empty() {
                    return None;
                }
                Some(enhance_sentence(
                    stripped,
                    tone.verb_at(index),
                    tone,
                    &self.substitutions,
                    &mut *picker,
                ))
            })
            .collect();

        if bullets.is_empty() {
            filler_bullets(tone)
        } else {
            bullets
        }
    }

    /// Same as [`FallbackEngine::bullets`], rendered as one newline-separated block.
    pub fn enhance(&self, text: &str, tone: Tone, picker: &mut dyn ImpactPicker) -> String {
        format_bullets(&self.bullets(text, tone, picker))
    }
}

/// Generic bullets built from the tone's first three verbs.
pub fn filler_bullets(tone: Tone) -> Vec<String> {
    vec![
        format!(
            "{} key initiatives and delivered impactful results",
            tone.verb_at(0)
        ),
        format!(
            "{} solutions that addressed critical business needs",
            tone.verb_at(1)
        ),
        format!(
            "{} best practices to ensure consistent quality",
            tone.verb_at(2)
        ),
    ]
}

/// Renders bullet lines as `• line` joined by newlines.
pub fn format_bullets(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|b| format!("{BULLET_MARKER}{b}"))
        .collect::<Vec<_>>()
        .join("\n")
}
