//! Task runner: executes one task end to end.
//!
//! Flow: credential check → readiness check → build prompt → one remote call → extract.
//!
//! The credential check comes first: without a key no prompt is ever built.
//! A remote failure is returned as `AppError::Llm` with no retry. A reply
//! without usable JSON is not an error; it comes back as a fallback result.

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::{ApiKey, TextModel};
use crate::profile::models::Profile;
use crate::tasks::builder::build_prompt;
use crate::tasks::extract::{extract, AnalysisResult};
use crate::tasks::readiness::check_ready;
use crate::tasks::TaskRequest;

pub async fn run_task(
    llm: &dyn TextModel,
    credential: Option<&ApiKey>,
    profile: &Profile,
    request: &TaskRequest,
) -> Result<AnalysisResult, AppError> {
    let api_key = credential.ok_or(AppError::MissingCredential)?;
    let descriptor = request.descriptor();
    let kind = descriptor.kind;

    check_ready(request, profile)?;

    let prompt = build_prompt(request, profile)
        .with_context(|| format!("Failed to serialize profile for {kind} prompt"))?;
    debug!("Built {kind} prompt ({} chars)", prompt.len());

    info!("Running {kind} task");
    let reply = llm
        .generate(api_key, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("{kind} request failed: {e}")))?;

    let result = extract(&reply, descriptor.fallback_key);
    if result.is_fallback() {
        warn!("{kind} reply had no parseable JSON object; returning raw text");
    }

    Ok(result)
}
