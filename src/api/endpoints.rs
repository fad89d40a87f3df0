//! Endpoint handlers: health check, analysis, symptom vocabulary.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::dialogue::{DefaultDialogueEngine, DialogueEngine, DialogueResult, Turn};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub message: String,
    /// `[user_text, bot_text]` pairs, oldest first.
    #[serde(default)]
    pub chat_history: Vec<(String, String)>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

/// `GET /api/health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: crate::config::APP_VERSION,
    })
}

/// `POST /api/analyze` — run the dialogue engine on one message.
///
/// An empty message is not an error: the engine answers with the
/// clarifying prompt. Only an unparseable payload is rejected.
pub async fn analyze(
    State(engine): State<Arc<DefaultDialogueEngine>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<DialogueResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let history: Vec<Turn> = request.chat_history.into_iter().map(Turn::from).collect();

    let started = Instant::now();
    let result = engine.analyze(&request.message, &history);

    tracing::info!(
        history_turns = history.len(),
        symptoms = result.detected_symptoms.len(),
        conditions = result.possible_conditions.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Message analyzed"
    );

    Ok(Json(result))
}

/// `GET /api/symptoms` — the vocabulary the engine recognizes.
pub async fn symptoms(
    State(engine): State<Arc<DefaultDialogueEngine>>,
) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: engine.vocabulary().symptoms().to_vec(),
    })
}
