//! Axum route handlers for the Task API. One endpoint per task.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tasks::extract::AnalysisResult;
use crate::tasks::runner::run_task;
use crate::tasks::{TaskKind, TaskRequest, DEFAULT_PROGRAM_MONTHS};

#[derive(Debug, Deserialize)]
pub struct TipsRequest {
    pub skill: String,
    pub field: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramRequest {
    pub duration_months: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskKind,
    pub result: AnalysisResult,
}

/// POST /api/v1/sessions/:id/tasks/skill-assessment
pub async fn handle_skill_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TaskResponse>, AppError> {
    run_for_session(&state, session_id, TaskRequest::SkillAssessment).await
}

/// POST /api/v1/sessions/:id/tasks/gap-analysis
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TaskResponse>, AppError> {
    run_for_session(&state, session_id, TaskRequest::GapAnalysis).await
}

/// POST /api/v1/sessions/:id/tasks/strategy
pub async fn handle_strategy(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TaskResponse>, AppError> {
    run_for_session(&state, session_id, TaskRequest::Strategy).await
}

/// POST /api/v1/sessions/:id/tasks/tips
pub async fn handle_tips(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TipsRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let request = TaskRequest::Tips {
        skill: request.skill.trim().to_string(),
        field: request.field.trim().to_string(),
    };
    run_for_session(&state, session_id, request).await
}

/// POST /api/v1/sessions/:id/tasks/field-recommendations
pub async fn handle_field_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TaskResponse>, AppError> {
    run_for_session(&state, session_id, TaskRequest::FieldRecommendations).await
}

/// POST /api/v1/sessions/:id/tasks/program
///
/// `duration_months` defaults to 12 when omitted; an empty body means all
/// defaults. A body that is present but not a valid `ProgramRequest` is a 400.
pub async fn handle_program(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<TaskResponse>, AppError> {
    let request = parse_program_request(&body)?;
    let duration_months = request.duration_months.unwrap_or(DEFAULT_PROGRAM_MONTHS);
    run_for_session(&state, session_id, TaskRequest::Program { duration_months }).await
}

fn parse_program_request(body: &[u8]) -> Result<ProgramRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProgramRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid program request: {e}")))
}

/// Snapshots the session, runs the task with the lock released, then stores
/// the result under the task's own key.
async fn run_for_session(
    state: &AppState,
    session_id: Uuid,
    request: TaskRequest,
) -> Result<Json<TaskResponse>, AppError> {
    let default_key = state.default_credential();
    let (profile, credential) = state
        .sessions
        .read(session_id, |s| {
            (
                s.profile.get().clone(),
                s.resolve_credential(default_key.as_ref()),
            )
        })
        .await?;

    let kind = request.kind();
    let result = run_task(state.llm.as_ref(), credential.as_ref(), &profile, &request).await?;

    state
        .sessions
        .write(session_id, |s| s.record_result(kind, result.clone()))
        .await?;
    info!("Stored {kind} result for session {session_id}");

    Ok(Json(TaskResponse { task: kind, result }))
}
