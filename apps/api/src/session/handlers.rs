//! Axum route handlers for session lifecycle, credentials and cached results.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ApiKey;
use crate::profile::models::ProfileSummary;
use crate::state::AppState;
use crate::tasks::extract::AnalysisResult;
use crate::tasks::TaskKind;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionInfoResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// True when this session or the server config supplies an API key.
    pub credential_configured: bool,
    pub profile: ProfileSummary,
}

#[derive(Debug, Deserialize)]
pub struct SetCredentialRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: BTreeMap<TaskKind, AnalysisResult>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfoResponse>, AppError> {
    let has_default = state.default_credential().is_some();
    let info = state
        .sessions
        .read(session_id, |s| SessionInfoResponse {
            session_id: s.id,
            created_at: s.created_at,
            credential_configured: s.has_credential() || has_default,
            profile: s.profile.summary(),
        })
        .await?;
    Ok(Json(info))
}

/// DELETE /api/v1/sessions/:id
///
/// Ends the session; its profile and results are discarded.
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.end(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {session_id} not found")))
    }
}

/// PUT /api/v1/sessions/:id/credential
pub async fn handle_set_credential(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetCredentialRequest>,
) -> Result<StatusCode, AppError> {
    let key = ApiKey::new(request.api_key)
        .ok_or_else(|| AppError::Validation("api_key cannot be empty".to_string()))?;
    state
        .sessions
        .write(session_id, |s| s.set_credential(Some(key)))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/results
///
/// Latest result of every task run in this session, keyed by task.
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ResultsResponse>, AppError> {
    let results = state
        .sessions
        .read(session_id, |s| s.results().clone())
        .await?;
    Ok(Json(ResultsResponse { results }))
}
