// Prompt templates for the remote enhancement path.
// System prompts and the truthfulness fragment come from llm_client::prompts.

use crate::enhancement::tone::Tone;
use crate::llm_client::prompts::TRUTHFULNESS_INSTRUCTION;

/// What kind of text the caller submitted. Only changes the remote prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    Resume,
    Bio,
}

impl ContentType {
    pub fn parse(input: &str) -> ContentType {
        match input.trim().to_ascii_lowercase().as_str() {
            "bio" => ContentType::Bio,
            _ => ContentType::Resume,
        }
    }
}

/// Instruction block describing how the model should write for `tone`.
pub fn tone_instructions(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "You are an expert resume writer. Enhance the following text to be highly professional.
- Use strong action verbs (Led, Developed, Implemented, Achieved, Spearheaded)
- Quantify achievements where the text supports it
- Keep it concise and impactful
- Use industry-standard terminology
- Sound confident but not arrogant"
        }
        Tone::Casual => {
            "You are a friendly resume helper. Make the following text sound approachable yet impressive.
- Keep the tone warm and personable
- Use conversational but professional language
- Highlight personality alongside skills
- Make it relatable and human"
        }
        Tone::Ats => {
            "You are an ATS (Applicant Tracking System) optimization expert.
- Use keywords that ATS systems look for
- Keep wording simple and clean
- Include relevant industry keywords and common job title variations
- Avoid special characters, tables, and descriptions of graphics"
        }
        Tone::Executive => {
            "You are an executive resume writer for senior leadership roles.
- Emphasize strategy, vision, and organizational impact
- Frame work in terms of leadership, scope, and business outcomes
- Use authoritative verbs (Directed, Championed, Orchestrated, Oversaw)
- Stay concise; every line should signal seniority"
        }
        Tone::Creative => {
            "You are a creative copywriter who writes memorable resumes.
- Use vivid, distinctive language without losing clarity
- Let personality and originality come through
- Favor fresh verbs over corporate clichés
- Keep each line grounded in what the text actually says"
        }
    }
}

/// Instruction block for the kind of content being enhanced.
pub fn content_instructions(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Resume => {
            "This is resume content. Transform it into powerful bullet points that:
- Start with strong action verbs
- Show impact and results
- Are scannable and clear"
        }
        ContentType::Bio => {
            "This is a personal bio / about-me section. Turn it into bullet highlights that:
- Capture the person's key strengths and passions
- Are memorable and engaging
- Read naturally when scanned top to bottom"
        }
    }
}

/// Enhancement prompt. Replace: {tone_instructions}, {content_instructions},
/// {truthfulness}, {text}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"{tone_instructions}

{content_instructions}

{truthfulness}

Original text:
{text}

Respond with 4-6 bullet points and nothing else. Put each bullet on its own line,
starting with "• ". Do not add headings, numbering, or commentary."#;

pub fn build_enhance_prompt(text: &str, tone: Tone, content_type: ContentType) -> String {
    ENHANCE_PROMPT_TEMPLATE
        .replace("{tone_instructions}", tone_instructions(tone))
        .replace("{content_instructions}", content_instructions(content_type))
        .replace("{truthfulness}", TRUTHFULNESS_INSTRUCTION)
        .replace("{text}", text)
}

/// Full-resume prompt. Replace: {tone}, {name}, {email}, {phone}, {linkedin},
/// {summary}, {experience}, {education}, {skills}, {truthfulness}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a polished resume from the following information.
Use a {tone} tone throughout.

Name: {name}
Email: {email}
Phone: {phone}
LinkedIn: {linkedin}

Summary/About: {summary}

Experience: {experience}

Education: {education}

Skills: {skills}

Produce:
1. A compelling professional summary (3-4 sentences)
2. An experience section with strong bullet points
3. An education section, properly formatted
4. A skills section, organized by category where possible

Format the response exactly as:

SUMMARY:
[Professional summary]

EXPERIENCE:
[Experience with bullet points]

EDUCATION:
[Education details]

SKILLS:
[Skills organized]

{truthfulness}"#;
