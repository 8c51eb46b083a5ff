//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::models::{Profile, ProfileSummary, ProfileUpdate, Skill};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
    pub proficiency: i64,
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .sessions
        .read(session_id, |s| s.profile.get().clone())
        .await?;
    Ok(Json(profile))
}

/// PATCH /api/v1/sessions/:id/profile
///
/// Shallow merge: only the fields present in the body change.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .sessions
        .write(session_id, |s| s.profile.update(update).clone())
        .await?;
    Ok(Json(profile))
}

/// POST /api/v1/sessions/:id/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    let skill = state
        .sessions
        .write(session_id, |s| {
            s.profile
                .add_skill(&request.name, request.proficiency)
                .cloned()
        })
        .await??;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /api/v1/sessions/:id/profile/summary
pub async fn handle_profile_summary(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ProfileSummary>, AppError> {
    let summary = state
        .sessions
        .read(session_id, |s| s.profile.summary())
        .await?;
    Ok(Json(summary))
}
