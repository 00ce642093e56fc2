//! Axum route handlers for the Enhancement API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::enhancement::coordinator::Enhancement;
use crate::enhancement::prompts::ContentType;
use crate::enhancement::resume::{ResumeInput, ResumeOutcome};
use crate::enhancement::samples::{SampleInput, SAMPLE_INPUTS};
use crate::enhancement::tone::ToneInfo;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub success: bool,
    pub request_id: Uuid,
    #[serde(flatten)]
    pub enhancement: Enhancement,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub demo: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub success: bool,
    pub request_id: Uuid,
    #[serde(flatten)]
    pub outcome: ResumeOutcome,
}

#[derive(Debug, Serialize)]
pub struct TonesResponse {
    pub tones: Vec<ToneInfo>,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: &'static [SampleInput],
}

/// Unwraps a JSON body, turning a missing or malformed body into a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!("Rejected request body: {rejection}");
            Err(AppError::Validation("No data provided".to_string()))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /enhance
///
/// Enhances free text into bullets. Uses the remote model when configured and
/// silently falls back to the rule-based engine when it is not or it fails.
pub async fn handle_enhance(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let request = json_body(payload)?;
    let request_id = Uuid::new_v4();

    let content_type = ContentType::parse(request.content_type.as_deref().unwrap_or_default());
    let enhancement = state
        .enhancer
        .enhance(
            &request.text,
            request.tone.as_deref().unwrap_or_default(),
            content_type,
        )
        .await?;

    info!(
        "Enhanced request {}: tone={}, source={:?}, bullets={}",
        request_id,
        enhancement.tone.id(),
        enhancement.source,
        enhancement.bullets.len()
    );

    Ok(Json(EnhanceResponse {
        success: true,
        request_id,
        enhancement,
        demo: false,
    }))
}

/// POST /demo-enhance
///
/// Same contract as `/enhance` but always served by the fallback engine, so it
/// works without an API key.
pub async fn handle_demo_enhance(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let request = json_body(payload)?;
    let request_id = Uuid::new_v4();

    let enhancement = state
        .enhancer
        .enhance_offline(&request.text, request.tone.as_deref().unwrap_or_default())?;

    info!(
        "Demo request {}: tone={}, bullets={}",
        request_id,
        enhancement.tone.id(),
        enhancement.bullets.len()
    );

    Ok(Json(EnhanceResponse {
        success: true,
        request_id,
        enhancement,
        demo: true,
    }))
}

/// POST /generate-resume
///
/// Builds a sectioned resume from profile fields.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeInput>, JsonRejection>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let input = json_body(payload)?;
    let request_id = Uuid::new_v4();

    let outcome = state.enhancer.generate_resume(&input).await?;

    info!(
        "Generated resume {}: tone={}, source={:?}",
        request_id,
        outcome.tone.id(),
        outcome.source
    );

    Ok(Json(GenerateResumeResponse {
        success: true,
        request_id,
        outcome,
    }))
}

/// GET /api/tones
pub async fn handle_tones(State(state): State<AppState>) -> Json<TonesResponse> {
    Json(TonesResponse {
        tones: state
            .enhancer
            .enabled_tones()
            .iter()
            .map(|t| t.info())
            .collect(),
    })
}

/// GET /api/examples
pub async fn handle_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: SAMPLE_INPUTS,
    })
}
