//! Explain prompt — the contract between Code Lens and the model.
//!
//! The system prompt fixes the persona and the five-field output shape;
//! schema.rs enforces the same shape mechanically on the reply. Keep the
//! two in sync.

use super::types::SourceLanguage;

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const EXPLAIN_MAX_TOKENS: u32 = 1024;

/// EXPLAIN system prompt.
///
/// Instructs the model to break a snippet into a structured, beginner-level
/// explanation and return it as raw JSON.
pub const EXPLAIN_SYSTEM_PROMPT: &str = r#"You are an expert AI code explainer for a beginner-friendly educational tool. The user has pasted a snippet of source code. Your job is to demystify it by breaking it down into simple, high-impact logical chunks.

<role>
You are an explanation engine. You receive one code snippet and its declared language, and you return a structured JSON explanation. You do NOT run, fix, or rewrite the code — you only explain it.
</role>

<rules>
1. ALWAYS respond with valid JSON matching the explanation schema. No prose, no markdown, no code fences.
2. Target audience: absolute beginners (high-school level). Tone: encouraging, clear, professional.
3. Avoid jargon. If you must use a technical term (like "iteration"), explain it simply in the same sentence.
4. Use terminology native to the declared language (e.g. "dictionaries" for Python, "objects" for JavaScript).
5. "lineByLine" walks the code in order as logical steps — not literally one entry per source line.
6. "complexity" is a plain-English account of how fast or heavy the code is, with a relatable analogy.
7. "improvements" holds one or two suggestions: a way to make the code cleaner, or a common pitfall to avoid.
</rules>

<response_format>
Respond with ONLY this JSON structure. No other text.
{
  "purpose": "<beginner-friendly summary of the code's goal, 1-2 sentences>",
  "lineByLine": ["<step 1>", "<step 2>", "..."],
  "complexity": "<plain-English time/space behaviour with an analogy>",
  "inputOutput": "<what data goes in and what result comes out>",
  "improvements": ["<suggestion 1>", "<suggestion 2>"]
}
</response_format>"#;

/// Build the user message for one explain request.
///
/// The snippet is embedded verbatim — no trimming, truncation, or
/// re-encoding — so the model reasons about exactly what the user typed.
pub fn build_explain_message(code: &str, language: SourceLanguage) -> String {
    format!(
        "<snippet_context>\n  <language>{language}</language>\n</snippet_context>\n\n<code>\n{code}\n</code>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_embeds_code_verbatim() {
        // Braces, quotes, backslashes and multibyte text must all pass
        // through untouched.
        let code = "let s = \"π ≈ {:.2}\";\nprintln!(\"{}\", s); // \\n stays";
        let message = build_explain_message(code, SourceLanguage::Rust);
        assert!(message.contains(code));
    }

    #[test]
    fn message_names_the_declared_language() {
        let message = build_explain_message("int main() {}", SourceLanguage::Cpp);
        assert!(message.contains("<language>C++</language>"));
    }

    #[test]
    fn message_is_deterministic() {
        let a = build_explain_message("print(1)", SourceLanguage::Python);
        let b = build_explain_message("print(1)", SourceLanguage::Python);
        assert_eq!(a, b);
    }

    #[test]
    fn system_prompt_pins_the_output_shape() {
        for field in ["purpose", "lineByLine", "complexity", "inputOutput", "improvements"] {
            assert!(EXPLAIN_SYSTEM_PROMPT.contains(field), "prompt missing {}", field);
        }
    }
}
