//! Explanation wire types — SourceLanguage and CodeExplanation.
//!
//! CodeExplanation matches the JSON schema sent to Gemini as
//! `responseSchema`. It is never deserialized straight off the wire —
//! schema.rs constructs it field by field after validation.

use serde::{Deserialize, Serialize};

/// The closed set of languages the explainer supports.
///
/// Serialized as the display name ("C++", not "Cpp") — the same string the
/// front end shows in the picker and passes back with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLanguage {
    Python,
    Java,
    JavaScript,
    #[serde(rename = "C++")]
    Cpp,
    C,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    TypeScript,
    Ruby,
    Go,
    Rust,
}

impl SourceLanguage {
    /// All supported languages, in picker display order.
    pub const ALL: [SourceLanguage; 11] = [
        SourceLanguage::Python,
        SourceLanguage::Java,
        SourceLanguage::JavaScript,
        SourceLanguage::Cpp,
        SourceLanguage::C,
        SourceLanguage::Html,
        SourceLanguage::Css,
        SourceLanguage::TypeScript,
        SourceLanguage::Ruby,
        SourceLanguage::Go,
        SourceLanguage::Rust,
    ];

    /// Display name, used in prompts and the picker.
    pub fn name(&self) -> &'static str {
        match self {
            SourceLanguage::Python => "Python",
            SourceLanguage::Java => "Java",
            SourceLanguage::JavaScript => "JavaScript",
            SourceLanguage::Cpp => "C++",
            SourceLanguage::C => "C",
            SourceLanguage::Html => "HTML",
            SourceLanguage::Css => "CSS",
            SourceLanguage::TypeScript => "TypeScript",
            SourceLanguage::Ruby => "Ruby",
            SourceLanguage::Go => "Go",
            SourceLanguage::Rust => "Rust",
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated explanation — all five fields present and well-formed.
///
/// Constructed only by `schema::validate_explanation`; a reply missing any
/// field is rejected whole rather than rendered partially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExplanation {
    pub purpose: String,
    pub line_by_line: Vec<String>,
    pub complexity: String,
    pub input_output: String,
    pub improvements: Vec<String>,
}

impl CodeExplanation {
    /// Serialize the five fields into a flat text block for the clipboard.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str("What it does:\n");
        out.push_str(&self.purpose);
        out.push_str("\n\nStep by step:\n");
        for (i, step) in self.line_by_line.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
        out.push_str("\nComplexity:\n");
        out.push_str(&self.complexity);
        out.push_str("\n\nInput & output:\n");
        out.push_str(&self.input_output);
        out.push_str("\n\nIdeas to improve:\n");
        for (i, tip) in self.improvements.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, tip));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&SourceLanguage::Cpp).unwrap(),
            "\"C++\""
        );
        assert_eq!(
            serde_json::to_string(&SourceLanguage::Html).unwrap(),
            "\"HTML\""
        );
        assert_eq!(
            serde_json::to_string(&SourceLanguage::Python).unwrap(),
            "\"Python\""
        );
    }

    #[test]
    fn language_round_trips_through_serde() {
        for lang in SourceLanguage::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            let back: SourceLanguage = serde_json::from_str(&json).unwrap();
            assert_eq!(lang, back);
            assert_eq!(json, format!("\"{}\"", lang.name()));
        }
    }

    #[test]
    fn plain_text_numbers_both_lists() {
        let explanation = CodeExplanation {
            purpose: "Prints a greeting".to_string(),
            line_by_line: vec!["Starts a loop".to_string(), "Prints".to_string()],
            complexity: "Very fast".to_string(),
            input_output: "No input; prints lines".to_string(),
            improvements: vec!["Add a docstring".to_string()],
        };
        let text = explanation.to_plain_text();
        assert!(text.contains("What it does:\nPrints a greeting"));
        assert!(text.contains("1. Starts a loop"));
        assert!(text.contains("2. Prints"));
        assert!(text.contains("Ideas to improve:\n1. Add a docstring"));
    }
}
