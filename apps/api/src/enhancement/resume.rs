//! Full resume generation: turns structured profile fields into a sectioned
//! resume. Remote first; the fallback enhances summary and experience with
//! the rule-based engine and passes education and skills through.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::enhancement::coordinator::{EnhanceError, EnhancementSource, Enhancer};
use crate::enhancement::prompts::RESUME_PROMPT_TEMPLATE;
use crate::enhancement::sentence::{ImpactPicker, RandomPicker};
use crate::enhancement::tone::Tone;
use crate::llm_client::prompts::{RESUME_SYSTEM, TRUTHFULNESS_INSTRUCTION};
use crate::llm_client::{CompletionBackend, LlmError};

const RESUME_MAX_TOKENS: u32 = 1500;

/// Request body for `POST /generate-resume`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub tone: Option<String>,
}

/// The four generated sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeSections {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    #[serde(flatten)]
    pub sections: ResumeSections,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeOutcome {
    pub resume: GeneratedResume,
    pub tone: Tone,
    pub source: EnhancementSource,
}

#[derive(Debug, Clone, Copy)]
enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

const SECTION_HEADERS: [(&str, Section); 4] = [
    ("SUMMARY:", Section::Summary),
    ("EXPERIENCE:", Section::Experience),
    ("EDUCATION:", Section::Education),
    ("SKILLS:", Section::Skills),
];

impl ResumeSections {
    fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Summary => &mut self.summary,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
        }
    }

    fn is_empty(&self) -> bool {
        [&self.summary, &self.experience, &self.education, &self.skills]
            .iter()
            .all(|s| s.is_empty())
    }

    fn trim_all(&mut self) {
        for field in [
            &mut self.summary,
            &mut self.experience,
            &mut self.education,
            &mut self.skills,
        ] {
            *field = field.trim().to_string();
        }
    }
}

impl ResumeInput {
    fn content_fields(&self) -> [&str; 4] {
        [
            self.summary.as_str(),
            self.experience.as_str(),
            self.education.as_str(),
            self.skills.as_str(),
        ]
    }

    fn total_length(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.linkedin]
            .into_iter()
            .map(|f| f.chars().count())
            .chain(self.content_fields().iter().map(|f| f.chars().count()))
            .sum()
    }

    fn build_prompt(&self, tone: Tone) -> String {
        RESUME_PROMPT_TEMPLATE
            .replace("{truthfulness}", TRUTHFULNESS_INSTRUCTION)
            .replace("{tone}", tone.id())
            .replace("{name}", or_placeholder(&self.name, "Your Name"))
            .replace("{email}", &self.email)
            .replace("{phone}", &self.phone)
            .replace("{linkedin}", &self.linkedin)
            .replace("{summary}", &self.summary)
            .replace("{experience}", &self.experience)
            .replace("{education}", &self.education)
            .replace("{skills}", &self.skills)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

impl Enhancer {
    /// Generates a complete resume, remote first when configured.
    pub async fn generate_resume(&self, input: &ResumeInput) -> Result<ResumeOutcome, EnhanceError> {
        self.validate_resume(input)?;
        let tone = self.resolve_tone(input.tone.as_deref().unwrap_or_default());

        if let Some(remote) = self.remote() {
            match self.remote_resume(remote, input, tone).await {
                Ok(sections) => {
                    return Ok(outcome(input, sections, tone, EnhancementSource::Remote));
                }
                Err(e) => warn!("Remote resume generation failed, using fallback engine: {e}"),
            }
        }

        let sections = self.fallback_resume(input, tone, &mut RandomPicker::from_entropy());
        Ok(outcome(input, sections, tone, EnhancementSource::Fallback))
    }

    fn validate_resume(&self, input: &ResumeInput) -> Result<(), EnhanceError> {
        if input.content_fields().iter().all(|f| f.trim().is_empty()) {
            return Err(EnhanceError::EmptyResume);
        }
        let actual = input.total_length();
        if actual > self.max_text_length() {
            return Err(EnhanceError::TooLong {
                max: self.max_text_length(),
                actual,
            });
        }
        Ok(())
    }

    async fn remote_resume(
        &self,
        remote: &dyn CompletionBackend,
        input: &ResumeInput,
        tone: Tone,
    ) -> Result<ResumeSections, LlmError> {
        let prompt = input.build_prompt(tone);
        let output = self
            .bounded(remote.complete(RESUME_SYSTEM, &prompt, RESUME_MAX_TOKENS))
            .await?;
        parse_resume_sections(&output)
    }

    fn fallback_resume(
        &self,
        input: &ResumeInput,
        tone: Tone,
        picker: &mut dyn ImpactPicker,
    ) -> ResumeSections {
        let mut enhance = |text: &str| {
            if text.trim().is_empty() {
                String::new()
            } else {
                self.engine().enhance(text, tone, &mut *picker)
            }
        };

        ResumeSections {
            summary: enhance(&input.summary),
            experience: enhance(&input.experience),
            education: input.education.trim().to_string(),
            skills: input.skills.trim().to_string(),
        }
    }
}

fn outcome(
    input: &ResumeInput,
    sections: ResumeSections,
    tone: Tone,
    source: EnhancementSource,
) -> ResumeOutcome {
    ResumeOutcome {
        resume: GeneratedResume {
            name: or_placeholder(&input.name, "Your Name").to_string(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            linkedin: input.linkedin.clone(),
            sections,
        },
        tone,
        source,
    }
}

/// Splits model output on `SUMMARY:` / `EXPERIENCE:` / `EDUCATION:` / `SKILLS:`
/// header lines. Markdown emphasis around a header is tolerated, and text after
/// the colon on the header line belongs to that section.
pub fn parse_resume_sections(output: &str) -> Result<ResumeSections, LlmError> {
    let mut sections = ResumeSections::default();
    let mut current: Option<Section> = None;
    let mut found_header = false;

    for line in output.lines() {
        let bare = line.trim().trim_start_matches(['#', '*', ' ']);
        let upper = bare.to_ascii_uppercase();

        if let Some((header, section)) = SECTION_HEADERS
            .iter()
            .find(|(header, _)| upper.starts_with(header))
        {
            current = Some(*section);
            found_header = true;
            let rest = bare[header.len()..].trim_matches(['*', ' ']);
            if !rest.is_empty() {
                let target = sections.section_mut(*section);
                target.push_str(rest);
                target.push('\n');
            }
            continue;
        }

        if let Some(section) = current {
            let target = sections.section_mut(section);
            target.push_str(line);
            target.push('\n');
        }
    }

    if !found_header {
        return Err(LlmError::Malformed(
            "resume response has no recognizable sections".to_string(),
        ));
    }

    sections.trim_all();
    if sections.is_empty() {
        return Err(LlmError::Malformed(
            "resume response has headers but no content".to_string(),
        ));
    }
    Ok(sections)
}
