//! Explanation error taxonomy.
//!
//! Every failure the explain pipeline can hit is classified into one of
//! these kinds before it reaches the front end. The Display string is the
//! user-facing message; diagnostic fields (raw payloads, provider bodies)
//! are logged, never displayed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplainError {
    /// Code input was blank after trimming. Checked before any network call.
    #[error("Paste or type some code first!")]
    EmptyInput,

    /// No API key in the environment or OS keychain. No network call made.
    #[error("API key is missing. Add GEMINI_API_KEY in Settings or .env.local.")]
    MissingCredential,

    /// Provider throttled the request (HTTP 429 / RESOURCE_EXHAUSTED).
    #[error("Too many requests! Please wait a moment before trying again.")]
    RateLimited,

    /// Provider returned no textual payload.
    #[error("The AI didn't return a response. Try simplifying the code.")]
    EmptyResponse,

    /// Payload was not parseable as JSON. Raw text kept for logging only.
    #[error("The AI response couldn't be read. Please try again.")]
    MalformedResponse { raw: String },

    /// Parsed JSON was missing a required field or had the wrong shape.
    /// Indistinguishable from MalformedResponse at the UI layer.
    #[error("The AI response couldn't be read. Please try again.")]
    SchemaMismatch { field: &'static str },

    /// Any other provider-level failure (non-success HTTP status).
    #[error("Something went wrong while analyzing the code.")]
    Provider { status: u16, detail: String },

    /// Transport-level failure (DNS, TLS, dropped connection).
    #[error("Something went wrong while analyzing the code.")]
    Network { detail: String },
}

impl ExplainError {
    /// Classify a non-success provider response.
    ///
    /// 429 and Gemini's RESOURCE_EXHAUSTED body both mean throttling and get
    /// their own kind so the user sees a wait-and-retry message.
    pub fn from_provider_status(status: u16, body: String) -> Self {
        if status == 429 || body.contains("RESOURCE_EXHAUSTED") {
            ExplainError::RateLimited
        } else {
            ExplainError::Provider {
                status,
                detail: body,
            }
        }
    }

    /// Short kind tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ExplainError::EmptyInput => "empty_input",
            ExplainError::MissingCredential => "missing_credential",
            ExplainError::RateLimited => "rate_limited",
            ExplainError::EmptyResponse => "empty_response",
            ExplainError::MalformedResponse { .. } => "malformed_response",
            ExplainError::SchemaMismatch { .. } => "schema_mismatch",
            ExplainError::Provider { .. } => "provider_error",
            ExplainError::Network { .. } => "network_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_classifies_as_rate_limited() {
        let err = ExplainError::from_provider_status(429, "Too Many Requests".to_string());
        assert!(matches!(err, ExplainError::RateLimited));
    }

    #[test]
    fn resource_exhausted_body_classifies_as_rate_limited() {
        let body = r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#.to_string();
        let err = ExplainError::from_provider_status(503, body);
        assert!(matches!(err, ExplainError::RateLimited));
    }

    #[test]
    fn other_statuses_stay_generic_provider_errors() {
        let err = ExplainError::from_provider_status(500, "Internal error".to_string());
        assert!(matches!(err, ExplainError::Provider { status: 500, .. }));
    }

    #[test]
    fn user_message_never_contains_raw_payload() {
        let err = ExplainError::MalformedResponse {
            raw: "SECRET-DIAGNOSTIC-PAYLOAD".to_string(),
        };
        assert!(!err.to_string().contains("SECRET-DIAGNOSTIC-PAYLOAD"));

        let err = ExplainError::Provider {
            status: 500,
            detail: "internal provider dump".to_string(),
        };
        assert!(!err.to_string().contains("internal provider dump"));
    }

    #[test]
    fn schema_mismatch_reads_same_as_malformed_for_users() {
        let malformed = ExplainError::MalformedResponse { raw: String::new() };
        let mismatch = ExplainError::SchemaMismatch { field: "purpose" };
        assert_eq!(malformed.to_string(), mismatch.to_string());
    }
}
