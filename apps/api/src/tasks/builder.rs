//! Generic prompt builder. Every task prompt has the same shape:
//!
//! ```text
//! <instruction>
//!
//! <label>: <value>          (one line per input slot)
//!
//! Provide a JSON response with:
//! 1. <key>: <meaning>       (one line per output key)
//!
//! Return only valid JSON. ...
//! ```

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, OUTPUT_KEYS_HEADER};
use crate::profile::models::Profile;
use crate::tasks::prompts::PromptInput;
use crate::tasks::TaskRequest;

pub fn build_prompt(request: &TaskRequest, profile: &Profile) -> Result<String, serde_json::Error> {
    let descriptor = request.descriptor();
    let mut prompt = String::new();

    let instruction = match request.duration_months() {
        Some(months) => descriptor
            .instruction
            .replace("{duration_months}", &months.to_string()),
        None => descriptor.instruction.to_string(),
    };
    prompt.push_str(&instruction);
    prompt.push_str("\n\n");

    for slot in descriptor.inputs {
        let value = render_input(slot.input, request, profile)?;
        prompt.push_str(&format!("{}: {}\n", slot.label, value));
    }

    prompt.push('\n');
    prompt.push_str(OUTPUT_KEYS_HEADER);
    prompt.push('\n');
    for (i, key) in descriptor.output_keys.iter().enumerate() {
        prompt.push_str(&format!("{}. {}: {}\n", i + 1, key.name, key.meaning));
    }

    prompt.push('\n');
    prompt.push_str(JSON_ONLY_INSTRUCTION);
    Ok(prompt)
}

fn render_input(
    input: PromptInput,
    request: &TaskRequest,
    profile: &Profile,
) -> Result<String, serde_json::Error> {
    Ok(match input {
        PromptInput::Profile => serde_json::to_string_pretty(profile)?,
        PromptInput::Skills => serde_json::to_string_pretty(&profile.skills)?,
        PromptInput::FavoriteSubjects => profile.favorite_subjects.join(", "),
        PromptInput::InterestedFields => profile.interested_fields.join(", "),
        PromptInput::TargetSkill => request.target_skill().unwrap_or_default().to_string(),
        PromptInput::TargetField => request.target_field().unwrap_or_default().to_string(),
        PromptInput::DurationMonths => {
            format!("{} months", request.duration_months().unwrap_or_default())
        }
    })
}
