// Shared prompt fragments.
// Task-specific instructions and output keys live in tasks/prompts.rs.

/// Closing line of every task prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "Return only valid JSON. \
    Do NOT include any text outside the JSON object.";

/// Header placed above the enumerated output keys.
pub const OUTPUT_KEYS_HEADER: &str = "Provide a JSON response with:";
