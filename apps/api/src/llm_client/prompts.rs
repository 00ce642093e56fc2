// Shared system prompts and cross-cutting prompt fragments.
// Tone- and task-specific instruction blocks live in enhancement::prompts.

/// System prompt for bullet enhancement.
pub const ENHANCE_SYSTEM: &str = "You are an expert resume and professional bio writer. \
    You enhance text while keeping it truthful and authentic.";

/// System prompt for full resume generation.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer who creates ATS-friendly, \
    impactful resumes. Never add false information.";

/// Appended to every user prompt.
pub const TRUTHFULNESS_INSTRUCTION: &str = "\
    Do NOT fabricate any information. Only enhance what is provided. \
    Do NOT invent employers, dates, metrics, or credentials.";
