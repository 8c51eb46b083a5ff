//! Profile Store: in-memory holder for one session's profile.
//!
//! Only two write paths exist: `update` (shallow merge) and `add_skill`.
//! Nothing here is ever written to disk.

use chrono::Utc;
use tracing::warn;

use crate::errors::AppError;
use crate::profile::models::{
    Profile, ProfileSummary, ProfileUpdate, Skill, SkillInput, MAX_PROFICIENCY, MIN_PROFICIENCY,
};

#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merges `update` into the stored profile. Last write wins per field.
    ///
    /// Text lists are trimmed and blank entries dropped; subjects and fields
    /// are also de-duplicated, keeping the first occurrence.
    pub fn update(&mut self, update: ProfileUpdate) -> &Profile {
        let profile = &mut self.profile;

        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(age) = update.age {
            profile.age = age;
        }
        if let Some(grade) = update.grade {
            profile.grade = Some(grade);
        }
        if let Some(skills) = update.skills {
            profile.skills = skills
                .into_iter()
                .filter_map(|(name, input)| {
                    let name = name.trim().to_string();
                    (!name.is_empty()).then(|| {
                        let skill = new_skill(&name, input);
                        (name, skill)
                    })
                })
                .collect();
        }
        if let Some(subjects) = update.favorite_subjects {
            profile.favorite_subjects = clean_set(subjects);
        }
        if let Some(fields) = update.interested_fields {
            profile.interested_fields = clean_set(fields);
        }
        if let Some(strengths) = update.strengths {
            profile.strengths = clean_list(strengths);
        }
        if let Some(weaknesses) = update.weaknesses {
            profile.weaknesses = clean_list(weaknesses);
        }
        if let Some(goals) = update.goals {
            profile.goals = clean_list(goals);
        }
        if let Some(style) = update.learning_style {
            profile.learning_style = Some(style);
        }
        if let Some(hours) = update.time_available {
            profile.time_available = hours;
        }

        &self.profile
    }

    /// Inserts or overwrites a skill, stamping the current time and starting an
    /// empty progress log.
    pub fn add_skill(&mut self, name: &str, proficiency: i64) -> Result<&Skill, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("skill name cannot be empty".to_string()));
        }

        let skill = new_skill(
            name,
            SkillInput {
                proficiency,
                progress: Vec::new(),
            },
        );
        self.profile.skills.insert(name.to_string(), skill);

        // Just inserted.
        Ok(&self.profile.skills[name])
    }

    pub fn get(&self) -> &Profile {
        &self.profile
    }

    pub fn summary(&self) -> ProfileSummary {
        let profile = &self.profile;
        ProfileSummary {
            name: (!profile.name.is_empty()).then(|| profile.name.clone()),
            skills_added: profile.skills.len(),
            favorite_subjects: profile.favorite_subjects.len(),
            interested_fields: profile.interested_fields.len(),
        }
    }
}

fn new_skill(name: &str, input: SkillInput) -> Skill {
    Skill {
        proficiency: clamp_proficiency(name, input.proficiency),
        date_added: Utc::now(),
        progress: input.progress,
    }
}

fn clamp_proficiency(skill: &str, proficiency: i64) -> u8 {
    let clamped = proficiency.clamp(MIN_PROFICIENCY, MAX_PROFICIENCY);
    if clamped != proficiency {
        warn!("Proficiency {proficiency} for skill '{skill}' clamped to {clamped}");
    }
    clamped as u8
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn clean_set(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in clean_list(items) {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
