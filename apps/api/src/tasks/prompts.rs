// Task descriptors: one static table entry per task.
// The generic builder in builder.rs turns a descriptor plus a profile into a prompt.

use crate::tasks::TaskKind;

/// Profile-derived value embedded in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    /// Whole profile, pretty-printed JSON.
    Profile,
    /// Skills mapping only, pretty-printed JSON.
    Skills,
    FavoriteSubjects,
    InterestedFields,
    TargetSkill,
    TargetField,
    DurationMonths,
}

#[derive(Debug, Clone, Copy)]
pub struct InputSlot {
    pub input: PromptInput,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputKey {
    pub name: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug)]
pub struct TaskDescriptor {
    pub kind: TaskKind,
    /// Single key of the raw-text result when the reply has no usable JSON.
    pub fallback_key: &'static str,
    /// May contain `{duration_months}`.
    pub instruction: &'static str,
    pub inputs: &'static [InputSlot],
    pub output_keys: &'static [OutputKey],
}

const fn slot(input: PromptInput, label: &'static str) -> InputSlot {
    InputSlot { input, label }
}

const fn key(name: &'static str, meaning: &'static str) -> OutputKey {
    OutputKey { name, meaning }
}

pub static SKILL_ASSESSMENT: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::SkillAssessment,
    fallback_key: "analysis",
    instruction: "Analyze this student profile and provide a structured analysis.",
    inputs: &[slot(PromptInput::Profile, "Student Profile")],
    output_keys: &[
        key("skill_assessment", "Overall assessment of current skills"),
        key("strength_areas", "Top 3 strength areas"),
        key("improvement_areas", "Top 3 areas needing improvement"),
        key("learning_path", "Recommended learning progression"),
    ],
};

pub static GAP_ANALYSIS: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::GapAnalysis,
    fallback_key: "gap_analysis",
    instruction: "Identify the learning gaps between this student's current skills \
        and the fields they are interested in.",
    inputs: &[
        slot(PromptInput::Skills, "Student current skills"),
        slot(PromptInput::InterestedFields, "Interested fields"),
    ],
    output_keys: &[
        key("required_skills", "Skills needed for each interested field"),
        key("current_gaps", "Specific skills lacking"),
        key("gap_priority", "Priority order to fill gaps"),
    ],
};

pub static STRATEGY: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::Strategy,
    fallback_key: "strategy",
    instruction: "Create a detailed, personalized development strategy for this student.",
    inputs: &[
        slot(PromptInput::Profile, "Student Profile"),
        slot(PromptInput::FavoriteSubjects, "Favorite Subjects"),
        slot(PromptInput::InterestedFields, "Interested Fields"),
    ],
    output_keys: &[
        key("strategy_overview", "2-3 line overview"),
        key("short_term_goals", "3 goals for the next 3 months"),
        key("medium_term_goals", "3 goals for the next 6 months"),
        key("long_term_goals", "2 goals for the next 1-2 years"),
        key("monthly_milestones", "Key milestones for each month"),
        key("estimated_timeline", "How long to reach proficiency"),
    ],
};

pub static TIPS: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::Tips,
    fallback_key: "tips",
    instruction: "Generate practical tips for this student to improve one skill \
        for a target field.",
    inputs: &[
        slot(PromptInput::Profile, "Student"),
        slot(PromptInput::TargetSkill, "Skill to improve"),
        slot(PromptInput::TargetField, "Target field"),
    ],
    output_keys: &[
        key("practical_tips", "5 actionable tips"),
        key("resources", "Online courses, books and tools"),
        key("practice_exercises", "3 specific exercises to practice"),
        key("time_commitment", "Suggested daily/weekly time"),
        key("success_indicators", "How to measure progress"),
        key("common_mistakes", "3 common mistakes to avoid"),
    ],
};

pub static FIELD_RECOMMENDATIONS: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::FieldRecommendations,
    fallback_key: "recommendations",
    instruction: "Based on this student profile, give recommendations for EACH \
        interested field. Key the response by field name; every field gets all of the keys below.",
    inputs: &[
        slot(PromptInput::Profile, "Student Profile"),
        slot(PromptInput::InterestedFields, "Interested fields"),
    ],
    output_keys: &[
        key("field_overview", "What this field involves"),
        key("required_skills", "Core skills needed"),
        key("career_paths", "3-4 career options"),
        key("salary_outlook", "General salary range"),
        key("job_demand", "Current job market demand"),
        key("recommended_qualifications", "Degrees or certifications needed"),
        key("learning_resources", "Top 5 resources to start"),
        key("industry_trends", "Current trends in the industry"),
    ],
};

pub static PROGRAM: TaskDescriptor = TaskDescriptor {
    kind: TaskKind::Program,
    fallback_key: "program",
    instruction: "Design a comprehensive {duration_months}-month development program \
        for this student.",
    inputs: &[
        slot(PromptInput::Profile, "Student Profile"),
        slot(PromptInput::FavoriteSubjects, "Favorite Subjects"),
        slot(PromptInput::InterestedFields, "Interested Fields"),
        slot(PromptInput::DurationMonths, "Duration"),
    ],
    output_keys: &[
        key("program_name", "Catchy program name"),
        key("program_description", "Overall description"),
        key("learning_modules", "List of modules with duration"),
        key("weekly_schedule", "Recommended hours per skill"),
        key("projects", "3-5 projects to complete"),
        key("certifications", "Recommended certifications to pursue"),
        key("mentorship", "Type of mentorship suggested"),
        key("assessment_methods", "How to evaluate progress"),
        key("total_hours_required", "Estimated total hours"),
        key("expected_outcomes", "What the student will achieve"),
    ],
};
