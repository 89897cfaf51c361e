//! Simple Tauri command handlers.
//!
//! These are thin wrappers that bridge frontend invoke() calls to Rust.
//! Each command does one thing: read state, write clipboard, hand out
//! picker data.
//!
//! The multi-step explain orchestration lives in pipeline.rs instead.

use crate::llm::{self, SourceLanguage};
use crate::snippets;

/// Tauri command: languages for the picker, in display order.
#[tauri::command]
pub fn get_languages() -> Vec<SourceLanguage> {
    SourceLanguage::ALL.to_vec()
}

/// Tauri command: get the stored explanation, if any.
///
/// Called by the window on load so a finished result survives a reload.
#[tauri::command]
pub fn get_explanation(
    state: tauri::State<'_, llm::ExplainState>,
) -> Result<llm::CodeExplanation, String> {
    let guard = state.explanation.lock().map_err(|e| e.to_string())?;
    guard.clone().ok_or("No explanation available".to_string())
}

/// Tauri command: copy the stored explanation as a flat text block.
///
/// Uses arboard for native clipboard access — works reliably unlike
/// navigator.clipboard in webview windows.
#[tauri::command]
pub fn copy_explanation(state: tauri::State<'_, llm::ExplainState>) -> Result<(), String> {
    let text = {
        let guard = state.explanation.lock().map_err(|e| e.to_string())?;
        guard
            .as_ref()
            .map(|e| e.to_plain_text())
            .ok_or("No explanation to copy — explain some code first")?
    };

    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(&text).map_err(|e| e.to_string())?;
    log::info!("[ACTION] Copied {} chars to clipboard", text.len());
    Ok(())
}

/// Tauri command: starter snippet for the selected language.
#[tauri::command]
pub fn load_example(language: SourceLanguage) -> String {
    snippets::example_for(language).to_string()
}

/// Tauri command: reset the session to idle.
#[tauri::command]
pub fn clear_session(state: tauri::State<'_, llm::ExplainState>) -> Result<(), String> {
    state.clear();
    log::info!("[SESSION] Cleared");
    Ok(())
}
