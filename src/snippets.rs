//! Example snippets — one starter per supported language.
//!
//! Backs the "Try Example" button so a first-time user sees a result
//! without hunting for code to paste. Each snippet is short enough to
//! explain in a handful of steps.

use crate::llm::SourceLanguage;

pub fn example_for(language: SourceLanguage) -> &'static str {
    match language {
        SourceLanguage::Python => "for i in range(5):\n    print(f'Hello {i}')",
        SourceLanguage::Java => {
            "public class Greeter {\n    public static void main(String[] args) {\n        for (int i = 0; i < 3; i++) {\n            System.out.println(\"Hello \" + i);\n        }\n    }\n}"
        }
        SourceLanguage::JavaScript => {
            "const items = [1, 2, 3];\nconst double = items.map(n => n * 2);\nconsole.log(double);"
        }
        SourceLanguage::Cpp => {
            "#include <iostream>\n\nint main() {\n    for (int i = 0; i < 3; i++) {\n        std::cout << \"Hello \" << i << std::endl;\n    }\n    return 0;\n}"
        }
        SourceLanguage::C => {
            "#include <stdio.h>\n\nint main(void) {\n    for (int i = 0; i < 3; i++) {\n        printf(\"Hello %d\\n\", i);\n    }\n    return 0;\n}"
        }
        SourceLanguage::Html => {
            "<div class='container'>\n  <h1>Welcome</h1>\n  <p>Learn to code today!</p>\n</div>"
        }
        SourceLanguage::Css => {
            ".container {\n  display: flex;\n  justify-content: center;\n  gap: 1rem;\n}\n\n.container h1 {\n  color: #4f46e5;\n}"
        }
        SourceLanguage::TypeScript => {
            "interface User {\n  name: string;\n  id: number;\n}\n\nconst greet = (user: User) => `Hi, ${user.name}`;"
        }
        SourceLanguage::Ruby => {
            "names = ['Ada', 'Grace', 'Alan']\nnames.each do |name|\n  puts \"Hello, #{name}!\"\nend"
        }
        SourceLanguage::Go => {
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n    for i := 0; i < 3; i++ {\n        fmt.Println(\"Hello\", i)\n    }\n}"
        }
        SourceLanguage::Rust => {
            "fn main() {\n    let names = vec![\"Ada\", \"Grace\", \"Alan\"];\n    for name in &names {\n        println!(\"Hello, {name}!\");\n    }\n}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_snippet() {
        for lang in SourceLanguage::ALL {
            assert!(
                !example_for(lang).trim().is_empty(),
                "no example for {}",
                lang
            );
        }
    }
}
