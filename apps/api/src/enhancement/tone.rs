//! Tone presets: the closed set of styles a caller can request, with their
//! action verbs and the display metadata served by `GET /api/tones`.

use serde::{Deserialize, Serialize};

/// A named style preset. Unknown input always resolves to `Professional`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    #[serde(alias = "ats-friendly")]
    Ats,
    Executive,
    Creative,
}

/// Display metadata for a tone. Presentation only; the engine never reads it.
#[derive(Debug, Clone, Serialize)]
pub struct ToneInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Ats,
        Tone::Executive,
        Tone::Creative,
    ];

    /// Strict parse. Accepts `ats-friendly` as an alias of `ats`.
    pub fn from_id(input: &str) -> Option<Tone> {
        match input.trim().to_ascii_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "ats" | "ats-friendly" | "ats_friendly" => Some(Tone::Ats),
            "executive" => Some(Tone::Executive),
            "creative" => Some(Tone::Creative),
            _ => None,
        }
    }

    /// Lenient parse used on request input; anything unrecognized becomes
    /// `Professional`.
    pub fn parse(input: &str) -> Tone {
        Tone::from_id(input).unwrap_or_default()
    }

    /// Parses `input` and coerces it to `Professional` when the result is not
    /// in the enabled allow-list.
    pub fn resolve(input: &str, enabled: &[Tone]) -> Tone {
        let tone = Tone::parse(input);
        if enabled.contains(&tone) {
            tone
        } else {
            Tone::Professional
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Ats => "ats",
            Tone::Executive => "executive",
            Tone::Creative => "creative",
        }
    }

    /// Ordered action verbs, cycled by sentence index. Every list has at least
    /// three entries so the filler bullets can take the first three.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            Tone::Professional => &[
                "Spearheaded",
                "Developed",
                "Implemented",
                "Led",
                "Delivered",
                "Streamlined",
                "Established",
                "Optimized",
            ],
            Tone::Casual => &[
                "Built",
                "Created",
                "Tackled",
                "Crafted",
                "Explored",
                "Shared",
            ],
            Tone::Ats => &[
                "Managed",
                "Developed",
                "Implemented",
                "Coordinated",
                "Analyzed",
                "Administered",
                "Designed",
            ],
            Tone::Executive => &[
                "Directed",
                "Championed",
                "Orchestrated",
                "Oversaw",
                "Pioneered",
                "Transformed",
            ],
            Tone::Creative => &[
                "Imagined",
                "Crafted",
                "Designed",
                "Reinvented",
                "Brought to life",
                "Shaped",
            ],
        }
    }

    /// Verb for the sentence at `index`, wrapping around the list.
    pub fn verb_at(self, index: usize) -> &'static str {
        let verbs = self.verbs();
        verbs[index % verbs.len()]
    }

    pub fn info(self) -> ToneInfo {
        match self {
            Tone::Professional => ToneInfo {
                id: "professional",
                name: "Professional",
                description: "Polished, confident language with strong action verbs",
                icon: "💼",
            },
            Tone::Casual => ToneInfo {
                id: "casual",
                name: "Casual",
                description: "Warm and approachable while still showing off your skills",
                icon: "😊",
            },
            Tone::Ats => ToneInfo {
                id: "ats",
                name: "ATS-Friendly",
                description: "Keyword-rich, simply formatted for applicant tracking systems",
                icon: "🤖",
            },
            Tone::Executive => ToneInfo {
                id: "executive",
                name: "Executive",
                description: "Strategic, leadership-focused framing for senior roles",
                icon: "👔",
            },
            Tone::Creative => ToneInfo {
                id: "creative",
                name: "Creative",
                description: "Vivid, distinctive phrasing that lets personality show",
                icon: "🎨",
            },
        }
    }
}
