// Coaching tasks: descriptor table, generic prompt builder, response extraction,
// readiness checks and the runner that ties them to the remote model.
// All LLM calls go through llm_client; nothing here talks HTTP to Gemini directly.

pub mod builder;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod readiness;
pub mod runner;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tasks::prompts::{
    TaskDescriptor, FIELD_RECOMMENDATIONS, GAP_ANALYSIS, PROGRAM, SKILL_ASSESSMENT, STRATEGY, TIPS,
};

pub const DEFAULT_PROGRAM_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    SkillAssessment,
    GapAnalysis,
    Strategy,
    Tips,
    FieldRecommendations,
    Program,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::SkillAssessment => "skill_assessment",
            TaskKind::GapAnalysis => "gap_analysis",
            TaskKind::Strategy => "strategy",
            TaskKind::Tips => "tips",
            TaskKind::FieldRecommendations => "field_recommendations",
            TaskKind::Program => "program",
        }
    }

    pub fn descriptor(&self) -> &'static TaskDescriptor {
        match self {
            TaskKind::SkillAssessment => &SKILL_ASSESSMENT,
            TaskKind::GapAnalysis => &GAP_ANALYSIS,
            TaskKind::Strategy => &STRATEGY,
            TaskKind::Tips => &TIPS,
            TaskKind::FieldRecommendations => &FIELD_RECOMMENDATIONS,
            TaskKind::Program => &PROGRAM,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task invocation with its task-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRequest {
    SkillAssessment,
    GapAnalysis,
    Strategy,
    Tips { skill: String, field: String },
    FieldRecommendations,
    Program { duration_months: u32 },
}

impl TaskRequest {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskRequest::SkillAssessment => TaskKind::SkillAssessment,
            TaskRequest::GapAnalysis => TaskKind::GapAnalysis,
            TaskRequest::Strategy => TaskKind::Strategy,
            TaskRequest::Tips { .. } => TaskKind::Tips,
            TaskRequest::FieldRecommendations => TaskKind::FieldRecommendations,
            TaskRequest::Program { .. } => TaskKind::Program,
        }
    }

    pub fn descriptor(&self) -> &'static TaskDescriptor {
        self.kind().descriptor()
    }

    pub fn target_skill(&self) -> Option<&str> {
        match self {
            TaskRequest::Tips { skill, .. } => Some(skill),
            _ => None,
        }
    }

    pub fn target_field(&self) -> Option<&str> {
        match self {
            TaskRequest::Tips { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn duration_months(&self) -> Option<u32> {
        match self {
            TaskRequest::Program { duration_months } => Some(*duration_months),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TaskKind; 6] = [
        TaskKind::SkillAssessment,
        TaskKind::GapAnalysis,
        TaskKind::Strategy,
        TaskKind::Tips,
        TaskKind::FieldRecommendations,
        TaskKind::Program,
    ];

    #[test]
    fn test_every_descriptor_matches_its_kind() {
        for kind in ALL {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_fallback_keys() {
        let keys: Vec<&str> = ALL.iter().map(|k| k.descriptor().fallback_key).collect();
        assert_eq!(
            keys,
            vec!["analysis", "gap_analysis", "strategy", "tips", "recommendations", "program"]
        );
    }

    #[test]
    fn test_output_keys_are_unique_per_task() {
        for kind in ALL {
            let mut names: Vec<&str> = kind.descriptor().output_keys.iter().map(|k| k.name).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate output key in {kind}");
        }
    }

    #[test]
    fn test_kind_serializes_like_as_str() {
        for kind in ALL {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }

    #[test]
    fn test_request_parameters() {
        let tips = TaskRequest::Tips {
            skill: "python".to_string(),
            field: "Data Science".to_string(),
        };
        assert_eq!(tips.kind(), TaskKind::Tips);
        assert_eq!(tips.target_skill(), Some("python"));
        assert_eq!(tips.duration_months(), None);

        let program = TaskRequest::Program { duration_months: 6 };
        assert_eq!(program.duration_months(), Some(6));
        assert_eq!(program.target_field(), None);
    }
}
