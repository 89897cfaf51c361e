//! Provider metadata + configuration checks for the settings surface.

use serde::{Deserialize, Serialize};

/// Env var holding the explanation provider's credential.
pub const GEMINI_ENV_KEY: &str = "GEMINI_API_KEY";

/// Provider display info for the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub env_key: String,
}

/// All known providers and their display info.
pub fn all_providers() -> Vec<ProviderInfo> {
    vec![ProviderInfo {
        id: "gemini".to_string(),
        name: "Gemini Flash — free tier friendly".to_string(),
        env_key: GEMINI_ENV_KEY.to_string(),
    }]
}

/// Check if a provider has an API key configured in the environment.
pub fn is_provider_configured(provider_id: &str) -> bool {
    if provider_id != "gemini" {
        return false;
    }
    std::env::var(GEMINI_ENV_KEY)
        .map(|k| !k.is_empty())
        .unwrap_or(false)
}
