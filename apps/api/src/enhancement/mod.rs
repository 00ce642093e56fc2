// Resume / bio enhancement.
// Rule-based fallback engine (segmenter, openers, substitutions, sentence,
// fallback), remote prompting and parsing, and the coordinator that picks
// between them. All remote calls go through llm_client.

pub mod coordinator;
pub mod fallback;
pub mod handlers;
pub mod openers;
pub mod prompts;
pub mod response_parser;
pub mod resume;
pub mod samples;
pub mod segmenter;
pub mod sentence;
pub mod substitutions;
pub mod tone;
