//! Core explain pipeline command.
//!
//! The one multi-step orchestration: precondition checks → credential
//! resolution → Gemini call → generation-tagged completion.

use crate::llm::{self, CodeExplanation, ExplainClient, ExplainError, SourceLanguage};
use crate::settings_commands::resolve_api_key;

/// Tauri command: explain a code snippet.
///
/// Returns Ok(Some(explanation)) on success, Ok(None) when a newer request
/// superseded this one while it was in flight (the front end drops it), or
/// Err(user_message) for any classified failure.
///
/// The front end disables the trigger while a request is outstanding, so
/// overlap is normally impossible — the generation tag makes a stale
/// completion harmless anyway.
#[tauri::command]
pub async fn explain_code(
    state: tauri::State<'_, llm::ExplainState>,
    code: String,
    language: SourceLanguage,
) -> Result<Option<CodeExplanation>, String> {
    let start = std::time::Instant::now();
    let seq = state.begin_request();
    log::info!(
        "[PIPELINE] Request #{}: {} chars of {}",
        seq,
        code.len(),
        language
    );

    // Preconditions in contract order: input first, then credential.
    // Both fail before any network activity.
    if code.trim().is_empty() {
        return Err(ExplainError::EmptyInput.to_string());
    }
    let Some(api_key) = resolve_api_key() else {
        return Err(ExplainError::MissingCredential.to_string());
    };

    let client = ExplainClient::new(api_key);
    let result = client.explain(&code, language).await;

    if !state.is_current(seq) {
        log::info!("[PIPELINE] Request #{} superseded — dropping completion", seq);
        return Ok(None);
    }

    match result {
        Ok(explanation) => {
            state.complete(seq, explanation.clone());
            log::info!(
                "[PIPELINE] Request #{} complete in {}ms ({} steps)",
                seq,
                start.elapsed().as_millis(),
                explanation.line_by_line.len()
            );
            Ok(Some(explanation))
        }
        Err(e) => {
            log::warn!(
                "[PIPELINE] Request #{} failed ({}) after {}ms",
                seq,
                e.kind(),
                start.elapsed().as_millis()
            );
            Err(e.to_string())
        }
    }
}
