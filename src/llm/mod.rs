//! LLM domain — the explain request/response contract.
//!
//! Public API for the explanation engine. External code should only use
//! what is exported here.
//!
//! Layout mirrors one request's journey:
//!   - prompts.rs  — system prompt + user message construction
//!   - schema.rs   — responseSchema + field-by-field reply validation
//!   - gemini.rs   — HTTP transport + the explain_with pipeline
//!   - error.rs    — classified failure kinds with user-facing messages
//!   - provider.rs — provider metadata + configuration checks
//!   - types.rs    — SourceLanguage + CodeExplanation wire types

pub mod error;
mod gemini;
pub mod prompts;
pub mod provider;
pub mod schema;
pub mod types;

pub use error::ExplainError;
pub use gemini::{explain_with, strip_code_fences, ExplainClient, GenerateContent};
pub use types::{CodeExplanation, SourceLanguage};

use std::sync::Mutex;

/// Session state for the single explanation slot.
///
/// Written by explain_code, read by get_explanation and copy_explanation.
/// Each request takes a fresh generation number; a completion only lands if
/// its generation is still the newest one, so a stale response can never
/// overwrite the result of a request issued after it.
pub struct ExplainState {
    pub explanation: Mutex<Option<CodeExplanation>>,
    generation: Mutex<u64>,
}

impl ExplainState {
    pub fn new() -> Self {
        Self {
            explanation: Mutex::new(None),
            generation: Mutex::new(0),
        }
    }

    /// Start a new request: bump the generation and clear the stored result.
    pub fn begin_request(&self) -> u64 {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        *self.explanation.lock().unwrap() = None;
        *generation
    }

    /// True if `seq` is still the most recently issued request.
    pub fn is_current(&self, seq: u64) -> bool {
        *self.generation.lock().unwrap() == seq
    }

    /// Store a completed explanation, unless a newer request superseded it.
    /// Returns false when the completion was stale and discarded.
    pub fn complete(&self, seq: u64, explanation: CodeExplanation) -> bool {
        let generation = self.generation.lock().unwrap();
        if *generation != seq {
            return false;
        }
        *self.explanation.lock().unwrap() = Some(explanation);
        true
    }

    /// Reset to idle. Also bumps the generation so a completion still in
    /// flight lands stale and gets discarded instead of resurrecting the
    /// cleared session.
    pub fn clear(&self) {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        *self.explanation.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodeExplanation {
        CodeExplanation {
            purpose: "p".to_string(),
            line_by_line: vec!["s".to_string()],
            complexity: "c".to_string(),
            input_output: "io".to_string(),
            improvements: vec!["i".to_string()],
        }
    }

    #[test]
    fn stale_completion_is_discarded() {
        let state = ExplainState::new();
        let first = state.begin_request();
        let second = state.begin_request();

        assert!(!state.is_current(first));
        assert!(!state.complete(first, sample()));
        assert!(state.explanation.lock().unwrap().is_none());

        assert!(state.complete(second, sample()));
        assert!(state.explanation.lock().unwrap().is_some());
    }

    #[test]
    fn new_request_clears_the_previous_result() {
        let state = ExplainState::new();
        let seq = state.begin_request();
        assert!(state.complete(seq, sample()));

        state.begin_request();
        assert!(state.explanation.lock().unwrap().is_none());
    }

    #[test]
    fn clear_invalidates_in_flight_completions() {
        let state = ExplainState::new();
        let seq = state.begin_request();
        state.clear();

        assert!(state.explanation.lock().unwrap().is_none());
        assert!(!state.is_current(seq));
        assert!(!state.complete(seq, sample()));
    }
}
