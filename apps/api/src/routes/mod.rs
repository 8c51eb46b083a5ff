pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::profile::handlers as profile;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::tasks::handlers as tasks;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/credential",
            put(session::handle_set_credential),
        )
        .route(
            "/api/v1/sessions/:id/results",
            get(session::handle_get_results),
        )
        // Profile
        .route(
            "/api/v1/sessions/:id/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/summary",
            get(profile::handle_profile_summary),
        )
        .route(
            "/api/v1/sessions/:id/profile/skills",
            post(profile::handle_add_skill),
        )
        // Tasks
        .route(
            "/api/v1/sessions/:id/tasks/skill-assessment",
            post(tasks::handle_skill_assessment),
        )
        .route(
            "/api/v1/sessions/:id/tasks/gap-analysis",
            post(tasks::handle_gap_analysis),
        )
        .route(
            "/api/v1/sessions/:id/tasks/strategy",
            post(tasks::handle_strategy),
        )
        .route("/api/v1/sessions/:id/tasks/tips", post(tasks::handle_tips))
        .route(
            "/api/v1/sessions/:id/tasks/field-recommendations",
            post(tasks::handle_field_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/tasks/program",
            post(tasks::handle_program),
        )
        .with_state(state)
}
