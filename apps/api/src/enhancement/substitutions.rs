//! Lexical substitution table: weak or informal phrases and their stronger
//! professional replacements.
//!
//! Matching is case-insensitive and substring-based, so a key also matches
//! inside longer words ("handsome" becomes "handmultiple"). Entries run one after
//! another in table order, so a later entry sees (and may rewrite) the output
//! of earlier ones. Running the table twice over the same text is therefore
//! not guaranteed to be a no-op.

use regex::{NoExpand, Regex, RegexBuilder};

/// `(weak phrase, replacement)` in application order.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("good", "excellent"),
    ("great", "outstanding"),
    ("nice", "exceptional"),
    ("some", "multiple"),
    ("a lot of", "numerous"),
    ("lots of", "numerous"),
    ("things", "initiatives"),
    ("stuff", "deliverables"),
    ("helped", "facilitated"),
    ("worked on", "contributed to"),
    ("worked with", "collaborated with"),
    ("in charge of", "responsible for"),
    ("made", "created"),
    ("tried to", "endeavored to"),
    ("really", "highly"),
    ("team player", "collaborative team member"),
    ("hard worker", "dedicated professional"),
    ("fast learner", "quick learner adept at mastering new skills"),
    (
        "people person",
        "skilled communicator with strong interpersonal abilities",
    ),
];

struct Substitution {
    pattern: Regex,
    replacement: &'static str,
}

/// Compiled form of [`SUBSTITUTIONS`]. Built once at startup and shared
/// read-only across requests.
pub struct SubstitutionTable {
    rules: Vec<Substitution>,
}

impl SubstitutionTable {
    pub fn new() -> Result<Self, regex::Error> {
        let rules = SUBSTITUTIONS
            .iter()
            .map(|&(weak, replacement)| {
                RegexBuilder::new(&regex::escape(weak))
                    .case_insensitive(true)
                    .build()
                    .map(|pattern| Substitution {
                        pattern,
                        replacement,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Applies every entry in order, one left-to-right pass each.
    pub fn apply(&self, sentence: &str) -> String {
        let mut text = sentence.to_string();
        for rule in &self.rules {
            if rule.pattern.is_match(&text) {
                text = rule
                    .pattern
                    .replace_all(&text, NoExpand(rule.replacement))
                    .into_owned();
            }
        }
        text
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
