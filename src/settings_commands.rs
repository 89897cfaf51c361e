//! Settings commands and credential resolution.
//!
//! Handles:
//! - API key lookup (env var first, then OS keychain via keyring)
//! - Saving a key from the settings surface
//! - Provider connection testing
//!
//! The key value itself is never logged.

use crate::llm::prompts::GEMINI_MODEL;
use crate::llm::provider::{self, GEMINI_ENV_KEY};

const KEYRING_SERVICE: &str = "code-lens";

/// Resolve the Gemini API key.
///
/// Checks the environment first. Falls back to the OS keychain and, when
/// found there, loads the key into the environment so later lookups are
/// cheap. Returns None when no key is configured anywhere.
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(GEMINI_ENV_KEY) {
        if !key.is_empty() {
            return Some(key);
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, "gemini") {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                std::env::set_var(GEMINI_ENV_KEY, &key);
                log::info!("[SETTINGS] Loaded gemini key from OS keychain");
                return Some(key);
            }
        }
    }

    None
}

/// Tauri command: provider configuration for the settings surface.
#[tauri::command]
pub fn get_provider_config() -> Result<serde_json::Value, String> {
    // Pull a keychain-stored key into the env first so the configured
    // check below sees it.
    let _ = resolve_api_key();

    let providers = provider::all_providers();
    let configured: Vec<String> = providers
        .iter()
        .filter(|p| provider::is_provider_configured(&p.id))
        .map(|p| p.id.clone())
        .collect();

    Ok(serde_json::json!({
        "providers": providers,
        "configuredProviders": configured
    }))
}

/// Tauri command: save the API key to the OS keychain.
#[tauri::command]
pub fn save_api_key(api_key: String) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, "gemini")
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(&api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;

    // Also set as env var so the current session picks it up immediately
    std::env::set_var(GEMINI_ENV_KEY, &api_key);

    log::info!("[SETTINGS] API key saved to keychain");
    Ok(())
}

/// Tauri command: test the Gemini connection with a minimal request.
#[tauri::command]
pub async fn test_provider() -> Result<bool, String> {
    let key = resolve_api_key().ok_or("No GEMINI_API_KEY set")?;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        GEMINI_MODEL, key
    );

    let resp = reqwest::Client::new()
        .post(&url)
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "Reply with just: ok"}]}],
            "generationConfig": {"maxOutputTokens": 10}
        }))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = resp.status().is_success();
    log::info!("[SETTINGS] Test gemini — status: {}", resp.status());
    Ok(ok)
}
