//! Gemini EXPLAIN pipeline — one generateContent call per request.
//!
//! Flow, per the product contract:
//! 1. Precondition: non-blank code (no network activity before it holds)
//! 2. Build system + user prompt, attach the responseSchema
//! 3. Exactly one generateContent call — no automatic retry; the user re-triggers
//! 4. Extract `candidates[0].content.parts[0].text`
//! 5. Strip any code fences the model wrapped the JSON in despite responseMimeType
//! 6. Parse to JSON, then validate field by field against the schema
//!
//! The HTTP transport sits behind the GenerateContent trait so the parse +
//! validate pipeline is testable against a deterministic mock.

use super::error::ExplainError;
use super::prompts::{self, EXPLAIN_MAX_TOKENS, EXPLAIN_SYSTEM_PROMPT, GEMINI_MODEL};
use super::provider::GEMINI_ENV_KEY;
use super::schema;
use super::types::{CodeExplanation, SourceLanguage};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One remote "generate structured content" operation.
///
/// The production transport is ExplainClient; tests substitute a scripted
/// mock to count invocations and control replies.
#[allow(async_fn_in_trait)]
pub trait GenerateContent {
    async fn generate(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, ExplainError>;
}

/// HTTP transport for Gemini generateContent.
///
/// The credential is injected at construction — `from_env` is the production
/// path; `new` lets tests and callers pass one explicitly, so nothing here
/// reads global state during a request.
pub struct ExplainClient {
    api_key: String,
    endpoint: String,
    http: reqwest::Client,
}

impl ExplainClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: GEMINI_ENDPOINT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from the GEMINI_API_KEY environment variable.
    ///
    /// Fails with MissingCredential before any network activity when the
    /// key is absent or empty.
    pub fn from_env() -> Result<Self, ExplainError> {
        match std::env::var(GEMINI_ENV_KEY) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(ExplainError::MissingCredential),
        }
    }

    /// Point the client at a different base URL (self-hosted proxies, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run the full explain pipeline against the live API.
    pub async fn explain(
        &self,
        code: &str,
        language: SourceLanguage,
    ) -> Result<CodeExplanation, ExplainError> {
        explain_with(self, code, language).await
    }
}

impl GenerateContent for ExplainClient {
    async fn generate(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, ExplainError> {
        // API key in URL query param, Gemini-style
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, GEMINI_MODEL, self.api_key
        );

        let start = std::time::Instant::now();
        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{ "text": user_message }]
                    }
                ],
                "systemInstruction": {
                    "parts": [{ "text": system_instruction }]
                },
                "generationConfig": {
                    "maxOutputTokens": EXPLAIN_MAX_TOKENS,
                    "temperature": 0.2,
                    "responseMimeType": "application/json",
                    "responseSchema": schema::response_schema()
                }
            }))
            .send()
            .await
            .map_err(|e| {
                log::error!("[LLM] HTTP request failed: {}", e);
                ExplainError::Network {
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[LLM] Gemini API returned {}: {}", status, body);
            return Err(ExplainError::from_provider_status(status.as_u16(), body));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            log::error!("[LLM] Failed to read response body: {}", e);
            ExplainError::Network {
                detail: e.to_string(),
            }
        })?;

        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        extract_gemini_text(&body).ok_or(ExplainError::EmptyResponse)
    }
}

/// Run one explain request/response cycle over any transport.
///
/// This is the whole contract in one place: precondition check, prompt
/// build, a single generate call, fence stripping, parse, schema
/// validation. Errors leave here already classified.
pub async fn explain_with<G: GenerateContent>(
    generator: &G,
    code: &str,
    language: SourceLanguage,
) -> Result<CodeExplanation, ExplainError> {
    if code.trim().is_empty() {
        return Err(ExplainError::EmptyInput);
    }

    let user_message = prompts::build_explain_message(code, language);
    log::info!("[LLM] Model: {}", GEMINI_MODEL);
    log::info!("[LLM] Explaining {} chars of {}", code.len(), language);

    let raw = generator
        .generate(EXPLAIN_SYSTEM_PROMPT, &user_message)
        .await?;
    if raw.trim().is_empty() {
        return Err(ExplainError::EmptyResponse);
    }

    let cleaned = strip_code_fences(&raw);
    let parsed: serde_json::Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(e) => {
            let preview: String = raw.chars().take(200).collect();
            log::warn!("[LLM] Reply is not valid JSON: {} — raw: {}", e, preview);
            return Err(ExplainError::MalformedResponse { raw });
        }
    };

    let explanation = schema::validate_explanation(&parsed)?;
    log::info!(
        "[LLM] Parsed explanation: {} steps, {} tips",
        explanation.line_by_line.len(),
        explanation.improvements.len()
    );
    Ok(explanation)
}

/// Strip one layer of surrounding markdown code fences.
///
/// responseMimeType asks for raw JSON, but models occasionally wrap the
/// payload in ```json ... ``` anyway. Interior fences are left alone.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    match rest.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => rest.trim(),
    }
}

/// Extract the textual payload from a generateContent response body.
///
/// Gemini format: candidates[0].content.parts[0].text. Empty text counts
/// as absent.
fn extract_gemini_text(body: &serde_json::Value) -> Option<String> {
    let text = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}
