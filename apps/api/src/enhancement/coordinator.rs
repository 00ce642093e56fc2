//! Enhancement coordinator. Validates input and picks the remote model or the
//! fallback engine for each request.
//!
//! Remote failures never reach the caller: they are logged and the request
//! is served by the fallback engine instead.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::enhancement::fallback::{format_bullets, FallbackEngine};
use crate::enhancement::prompts::{build_enhance_prompt, ContentType};
use crate::enhancement::response_parser::parse_bullets;
use crate::enhancement::sentence::{ImpactPicker, RandomPicker};
use crate::enhancement::tone::Tone;
use crate::llm_client::prompts::ENHANCE_SYSTEM;
use crate::llm_client::{CompletionBackend, LlmError};

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;
const ENHANCE_MAX_TOKENS: u32 = 800;

/// Caller-facing validation failures. Everything else degrades to the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("Please provide some text to enhance")]
    EmptyText,

    #[error("Text too long, maximum {max} characters")]
    TooLong { max: usize, actual: usize },

    #[error("Please provide at least one of summary, experience, education, or skills")]
    EmptyResume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementSource {
    Remote,
    Fallback,
}

/// A successful enhancement.
#[derive(Debug, Clone, Serialize)]
pub struct Enhancement {
    /// Bullet block, one `• ` line per bullet.
    pub enhanced: String,
    pub bullets: Vec<String>,
    pub tone: Tone,
    pub source: EnhancementSource,
    pub original_length: usize,
    pub enhanced_length: usize,
}

impl Enhancement {
    fn new(text: &str, bullets: Vec<String>, tone: Tone, source: EnhancementSource) -> Self {
        let enhanced = format_bullets(&bullets);
        Self {
            original_length: text.chars().count(),
            enhanced_length: enhanced.chars().count(),
            enhanced,
            bullets,
            tone,
            source,
        }
    }
}

/// Request-independent enhancement service. Shared across handlers behind an `Arc`.
pub struct Enhancer {
    engine: FallbackEngine,
    remote: Option<Arc<dyn CompletionBackend>>,
    remote_timeout: Duration,
    max_text_length: usize,
    enabled_tones: Vec<Tone>,
}

impl Enhancer {
    pub fn new(engine: FallbackEngine, max_text_length: usize, enabled_tones: Vec<Tone>) -> Self {
        Self {
            engine,
            remote: None,
            remote_timeout: Duration::from_secs(30),
            max_text_length,
            enabled_tones,
        }
    }

    /// Routes requests to `backend` first. `timeout` bounds the whole remote
    /// call, retries included.
    pub fn with_remote(mut self, backend: Arc<dyn CompletionBackend>, timeout: Duration) -> Self {
        self.remote = Some(backend);
        self.remote_timeout = timeout;
        self
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    pub fn enabled_tones(&self) -> &[Tone] {
        &self.enabled_tones
    }

    pub(crate) fn engine(&self) -> &FallbackEngine {
        &self.engine
    }

    /// Unknown or disabled tones become `Professional`.
    pub fn resolve_tone(&self, raw: &str) -> Tone {
        Tone::resolve(raw, &self.enabled_tones)
    }

    pub fn validate(&self, text: &str) -> Result<(), EnhanceError> {
        if text.trim().is_empty() {
            return Err(EnhanceError::EmptyText);
        }
        let actual = text.chars().count();
        if actual > self.max_text_length {
            return Err(EnhanceError::TooLong {
                max: self.max_text_length,
                actual,
            });
        }
        Ok(())
    }

    /// Enhances `text`, remote first when configured.
    pub async fn enhance(
        &self,
        text: &str,
        tone: &str,
        content_type: ContentType,
    ) -> Result<Enhancement, EnhanceError> {
        self.validate(text)?;
        let tone = self.resolve_tone(tone);

        if let Some(remote) = &self.remote {
            match self.remote_bullets(remote.as_ref(), text, tone, content_type).await {
                Ok(bullets) => {
                    return Ok(Enhancement::new(
                        text,
                        bullets,
                        tone,
                        EnhancementSource::Remote,
                    ));
                }
                Err(e) => warn!("Remote enhancement failed, using fallback engine: {e}"),
            }
        }

        Ok(self.fallback(text, tone, &mut RandomPicker::from_entropy()))
    }

    /// Validation plus the fallback engine; never calls the remote service.
    pub fn enhance_offline(&self, text: &str, tone: &str) -> Result<Enhancement, EnhanceError> {
        self.enhance_offline_with(text, tone, &mut RandomPicker::from_entropy())
    }

    /// [`Enhancer::enhance_offline`] with a caller-supplied impact picker.
    pub fn enhance_offline_with(
        &self,
        text: &str,
        tone: &str,
        picker: &mut dyn ImpactPicker,
    ) -> Result<Enhancement, EnhanceError> {
        self.validate(text)?;
        let tone = self.resolve_tone(tone);
        Ok(self.fallback(text, tone, picker))
    }

    fn fallback(&self, text: &str, tone: Tone, picker: &mut dyn ImpactPicker) -> Enhancement {
        let bullets = self.engine.bullets(text, tone, picker);
        Enhancement::new(text, bullets, tone, EnhancementSource::Fallback)
    }

    async fn remote_bullets(
        &self,
        remote: &dyn CompletionBackend,
        text: &str,
        tone: Tone,
        content_type: ContentType,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = build_enhance_prompt(text, tone, content_type);
        debug!("Calling {} for {:?} enhancement", remote.model(), tone);

        let output = self
            .bounded(remote.complete(ENHANCE_SYSTEM, &prompt, ENHANCE_MAX_TOKENS))
            .await?;

        parse_bullets(&output)
    }

    /// The configured remote backend, if any.
    pub(crate) fn remote(&self) -> Option<&dyn CompletionBackend> {
        self.remote.as_deref()
    }

    /// Applies the remote deadline to `call`.
    pub(crate) async fn bounded<F>(&self, call: F) -> Result<String, LlmError>
    where
        F: std::future::Future<Output = Result<String, LlmError>>,
    {
        tokio::time::timeout(self.remote_timeout, call)
            .await
            .unwrap_or_else(|_| {
                Err(LlmError::Timeout {
                    secs: self.remote_timeout.as_secs(),
                })
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that returns a canned response and counts calls.
    pub(crate) struct StaticBackend {
        pub response: Result<String, String>,
        pub calls: AtomicUsize,
    }

    impl StaticBackend {
        pub fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for StaticBackend {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().map_err(|message| LlmError::Api {
                status: 401,
                message,
            })
        }

        fn model(&self) -> &str {
            "stub"
        }
    }

    /// Backend that never answers within any reasonable deadline.
    struct SlowBackend;

    #[async_trait]
    impl CompletionBackend for SlowBackend {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
        ) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("• too late".to_string())
        }

        fn model(&self) -> &str {
            "slow"
        }
    }

    struct FixedPicker(usize);

    impl ImpactPicker for FixedPicker {
        fn pick(&mut self, _choices: usize) -> usize {
            self.0
        }
    }

    pub(crate) fn enhancer() -> Enhancer {
        Enhancer::new(
            FallbackEngine::new().unwrap(),
            DEFAULT_MAX_TEXT_LENGTH,
            Tone::ALL.to_vec(),
        )
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let err = enhancer()
            .enhance("", "professional", ContentType::Resume)
            .await
            .unwrap_err();
        assert_eq!(err, EnhanceError::EmptyText);
        assert_eq!(err.to_string(), "Please provide some text to enhance");
    }

    #[tokio::test]
    async fn test_whitespace_text_is_rejected() {
        let err = enhancer()
            .enhance(" \n\t ", "casual", ContentType::Resume)
            .await
            .unwrap_err();
        assert_eq!(err, EnhanceError::EmptyText);
    }

    #[tokio::test]
    async fn test_oversized_text_is_rejected() {
        let text = "a".repeat(6000);
        let err = enhancer()
            .enhance(&text, "professional", ContentType::Resume)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            EnhanceError::TooLong {
                max: 5000,
                actual: 6000
            }
        );
        assert_eq!(err.to_string(), "Text too long, maximum 5000 characters");
    }

    #[test]
    fn test_length_limit_counts_characters_not_bytes() {
        let e = enhancer();
        let text = "é".repeat(DEFAULT_MAX_TEXT_LENGTH);
        assert!(e.validate(&text).is_ok());
    }

    #[test]
    fn test_unknown_tone_is_professional() {
        let result = enhancer()
            .enhance_offline_with("Built a cache.", "pirate", &mut FixedPicker(0))
            .unwrap();
        assert_eq!(result.tone, Tone::Professional);
        assert!(result.bullets[0].starts_with("Spearheaded "));
    }

    #[test]
    fn test_disabled_tone_is_professional() {
        let e = Enhancer::new(
            FallbackEngine::new().unwrap(),
            DEFAULT_MAX_TEXT_LENGTH,
            vec![Tone::Professional, Tone::Ats],
        );
        assert_eq!(e.resolve_tone("creative"), Tone::Professional);
        assert_eq!(e.resolve_tone("ats-friendly"), Tone::Ats);
    }

    #[test]
    fn test_filler_for_punctuation_only_input() {
        let result = enhancer()
            .enhance_offline_with("...", "executive", &mut FixedPicker(0))
            .unwrap();
        assert_eq!(result.bullets.len(), 3);
        assert!(result.bullets[0].starts_with("Directed "));
        assert!(result.bullets[1].starts_with("Championed "));
        assert!(result.bullets[2].starts_with("Orchestrated "));
    }

    #[test]
    fn test_fixed_picker_makes_output_repeatable() {
        let e = enhancer();
        let text = "I am a developer who knows Python. I made some websites.";
        let a = e
            .enhance_offline_with(text, "professional", &mut FixedPicker(2))
            .unwrap();
        let b = e
            .enhance_offline_with(text, "professional", &mut FixedPicker(2))
            .unwrap();
        assert_eq!(a.enhanced, b.enhanced);
        assert_eq!(a.original_length, text.chars().count());
        assert_eq!(a.enhanced_length, a.enhanced.chars().count());
    }

    #[tokio::test]
    async fn test_no_remote_uses_fallback() {
        let result = enhancer()
            .enhance("Built a cache.", "ats", ContentType::Resume)
            .await
            .unwrap();
        assert_eq!(result.source, EnhancementSource::Fallback);
        assert_eq!(result.enhanced, "• Managed built a cache");
    }

    #[tokio::test]
    async fn test_remote_success_is_used() {
        let backend = Arc::new(StaticBackend::ok("• Led the platform team\n• Cut costs by 20%"));
        let e = enhancer().with_remote(backend.clone(), Duration::from_secs(5));

        let result = e
            .enhance("I led a team.", "executive", ContentType::Bio)
            .await
            .unwrap();

        assert_eq!(result.source, EnhancementSource::Remote);
        assert_eq!(result.tone, Tone::Executive);
        assert_eq!(result.bullets, vec!["Led the platform team", "Cut costs by 20%"]);
        assert_eq!(result.enhanced, "• Led the platform team\n• Cut costs by 20%");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_silently() {
        let backend = Arc::new(StaticBackend::failing("invalid api key"));
        let e = enhancer().with_remote(backend.clone(), Duration::from_secs(5));

        let result = e
            .enhance("Built a cache.", "ats", ContentType::Resume)
            .await
            .unwrap();

        assert_eq!(result.source, EnhancementSource::Fallback);
        assert_eq!(result.enhanced, "• Managed built a cache");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_remote_output_falls_back() {
        let backend = Arc::new(StaticBackend::ok("Sorry, I cannot do that."));
        let e = enhancer().with_remote(backend, Duration::from_secs(5));

        let result = e
            .enhance("Built a cache.", "ats", ContentType::Resume)
            .await
            .unwrap();
        assert_eq!(result.source, EnhancementSource::Fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_timeout_falls_back() {
        let e = enhancer().with_remote(Arc::new(SlowBackend), Duration::from_secs(2));

        let result = e
            .enhance("Built a cache.", "casual", ContentType::Resume)
            .await
            .unwrap();
        assert_eq!(result.source, EnhancementSource::Fallback);
        assert_eq!(result.enhanced, "• Built built a cache");
    }

    #[tokio::test]
    async fn test_validation_runs_before_remote() {
        let backend = Arc::new(StaticBackend::ok("• unused"));
        let e = enhancer().with_remote(backend.clone(), Duration::from_secs(5));

        assert!(e.enhance("   ", "professional", ContentType::Resume).await.is_err());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_enhancement_serializes_source_and_tone_lowercase() {
        let result = enhancer()
            .enhance_offline_with("Built a cache.", "ats-friendly", &mut FixedPicker(0))
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["tone"], "ats");
    }
}
