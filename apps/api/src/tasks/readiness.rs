use crate::errors::AppError;
use crate::profile::models::Profile;
use crate::tasks::TaskRequest;

/// Checks the profile carries what the task needs before a prompt is spent on it.
///
/// - assessment, gap analysis: a name
/// - strategy, program: a name, a favorite subject and an interested field
/// - tips: a non-blank skill and field
/// - field recommendations: an interested field
pub fn check_ready(request: &TaskRequest, profile: &Profile) -> Result<(), AppError> {
    match request {
        TaskRequest::SkillAssessment | TaskRequest::GapAnalysis => require_name(profile),
        TaskRequest::Strategy => require_full_profile(profile),
        TaskRequest::Program { duration_months } => {
            if *duration_months == 0 {
                return Err(AppError::Validation(
                    "duration_months must be at least 1".to_string(),
                ));
            }
            require_full_profile(profile)
        }
        TaskRequest::Tips { skill, field } => {
            if skill.trim().is_empty() || field.trim().is_empty() {
                return Err(AppError::Validation(
                    "Select a skill and an interested field first".to_string(),
                ));
            }
            Ok(())
        }
        TaskRequest::FieldRecommendations => require_fields(profile),
    }
}

fn require_name(profile: &Profile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Complete your profile first: name is required".to_string(),
        ));
    }
    Ok(())
}

fn require_fields(profile: &Profile) -> Result<(), AppError> {
    if profile.interested_fields.is_empty() {
        return Err(AppError::Validation(
            "Select at least one interested field first".to_string(),
        ));
    }
    Ok(())
}

fn require_full_profile(profile: &Profile) -> Result<(), AppError> {
    require_name(profile)?;
    if profile.favorite_subjects.is_empty() {
        return Err(AppError::Validation(
            "Select at least one favorite subject first".to_string(),
        ));
    }
    require_fields(profile)
}
