use regex::Regex;
use std::sync::LazyLock;

/// Structural patterns for common language constructs. One list serves
/// both the live "code detected" indicator and the submit-time split.
static CODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bfunction\s+\w+\s*\(",
        r"\b(?:const|let|var)\s+\w+\s*=",
        r"\bdef\s+\w+\s*\(",
        r"\bclass\s+\w+",
        r"\b(?:import|export)\s+\S+",
        r"#include\s*[<\x22]",
        r"\bpublic\s+(?:class|static|void)\b",
        r"\bfn\s+\w+\s*\(",
        r"=>",
        r"(?m);\s*$",
        r"\{[\s\S]*\}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("code pattern compiles"))
    .collect()
});

/// Heuristic, not a parser: any structural hit counts as code, and
/// false positives/negatives are acceptable.
pub fn looks_like_code(text: &str) -> bool {
    CODE_PATTERNS.iter().any(|re| re.is_match(text))
}

pub const CODE_SUBMISSION_CONTENT: &str = "Please review this code:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub content: String,
    pub code: Option<String>,
}

/// Splits outgoing text into a display line plus an attached snippet when
/// it looks like code, or passes it through as plain content otherwise.
pub fn split_submission(text: &str) -> Submission {
    if looks_like_code(text) {
        Submission { content: CODE_SUBMISSION_CONTENT.to_string(), code: Some(text.to_string()) }
    } else {
        Submission { content: text.to_string(), code: None }
    }
}
