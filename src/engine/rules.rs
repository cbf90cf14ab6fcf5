pub const WELCOME: &str = "Hi! I'm your **code review assistant**. Paste a snippet and I'll take a look.";

pub const ASK_FOR_CODE: &str =
    "I'd be happy to help! Please share a **code snippet** and I'll review it for you.";

#[derive(Debug, Clone, Copy)]
pub struct RuleCategory {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub responses: &'static [&'static str],
}

/// Trigger substrings are lowercase; snippets are lowercased before matching.
const CATEGORIES: &[RuleCategory] = &[
    RuleCategory {
        name: "variables",
        triggers: &["let ", "const ", "var "],
        responses: &[
            "**Variable declarations look reasonable.** One thing to check: prefer `const` for bindings that never change, it makes the data flow easier to follow.",
            "I looked at your variable usage. Consider more descriptive names — `x` and `tmp` age badly once the function grows.",
            "**Declarations noted.** Watch the scope of these bindings; declaring them closest to first use keeps the snippet readable.",
        ],
    },
    RuleCategory {
        name: "functions",
        triggers: &["function", "def ", "fn ", "=>"],
        responses: &[
            "**Nice function structure.** Keep each function doing one thing; if you find an `and` in its description, it probably wants to be two.",
            "Your function reads well. Consider what happens with unexpected arguments — a guard clause at the top is usually cheaper than a deep `if`.",
            "**Function reviewed.** The signature is clear, but think about the return path: early returns for error cases keep the happy path unindented.",
        ],
    },
    RuleCategory {
        name: "loops",
        triggers: &["for ", "for(", "while ", "while(", "foreach"],
        responses: &[
            "**Loop spotted.** Double-check the exit condition — off-by-one errors love boundaries like this.",
            "About that loop: if the body only transforms each element, a map/filter pipeline usually says the same thing with less ceremony.",
            "**Iteration looks fine**, but mind the work done per pass; hoisting anything loop-invariant out of the body is a quick win.",
        ],
    },
    RuleCategory {
        name: "conditionals",
        triggers: &["if ", "if(", "else", "switch"],
        responses: &[
            "**Branching reviewed.** Flattening nested conditionals with early returns tends to read better than an `else` pyramid.",
            "The conditions look correct at a glance, but complex boolean expressions deserve a named helper — `isEligible` beats three `&&` clauses.",
        ],
    },
    RuleCategory {
        name: "error-handling",
        triggers: &["try", "catch", "except", "throw", "raise"],
        responses: &[
            "**Good to see error handling.** Make sure the catch path does something meaningful — swallowing the error silently is the worst of both worlds.",
            "On the error path: catch the narrowest type you can, and keep the message actionable for whoever reads the log at 3am.",
        ],
    },
    RuleCategory {
        name: "async",
        triggers: &["async", "await", "promise", ".then("],
        responses: &[
            "**Async code reviewed.** Check every awaited call for a failure path; an unhandled rejection here will surface far from its cause.",
            "The async flow looks plausible. If these operations are independent, running them concurrently instead of awaiting one by one saves real time.",
        ],
    },
    RuleCategory {
        name: "classes",
        triggers: &["class "],
        responses: &[
            "**Class design noted.** Keep the public surface small; every public member is a promise you'll have to keep.",
            "The class reads fine. Ask whether this needs to be a class at all — a couple of plain functions over a data type is often simpler.",
        ],
    },
    RuleCategory {
        name: "imports",
        triggers: &["import", "require(", "#include", "use "],
        responses: &[
            "**Imports look tidy.** Prune anything unused, and keep third-party imports grouped apart from local ones.",
            "On the imports: prefer importing the specific symbols you use; wildcard imports hide where names come from.",
        ],
    },
    RuleCategory {
        name: "logging",
        triggers: &["print", "console.log", "println"],
        responses: &[
            "**Debug output spotted.** Fine while developing, but route it through your logger before this ships — stray prints are noise in production.",
            "Those print statements suggest a debugging session; consider replacing them with assertions or tests so the check survives the cleanup.",
        ],
    },
];

/// Appended after rule-matched replies, always in this order.
const RULE_SUGGESTIONS: &[&str] = &[
    "• Add unit tests covering the edge cases of this snippet.",
    "• Check how this behaves with empty or missing input.",
    "• Keep names consistent with the rest of the codebase.",
    "• Consider extracting repeated fragments into a helper.",
    "• Document any non-obvious assumption near the code it protects.",
    "• Run the formatter and linter before committing.",
    "• Review whether this needs to handle concurrent callers.",
];

/// Openers for replies when no rule category matched.
const GENERIC_OPENERS: &[&str] = &[
    "I took a look at your snippet. A few general observations:",
    "Nothing jumped out as broken, but here are some things worth a pass:",
    "**Overall this looks workable.** Some general review notes:",
    "Here's my general feedback on the snippet:",
];

/// Body lines for the generic reply, sampled without replacement.
const GENERIC_SUGGESTIONS: &[&str] = &[
    "• Favor small, single-purpose functions over long procedures.",
    "• Make error cases explicit rather than letting them fall through.",
    "• Prefer immutable data where the language makes it cheap.",
    "• Measure before optimizing; readability usually wins.",
    "• Keep side effects at the edges and logic in the middle.",
    "• Delete commented-out code; version control remembers it for you.",
    "• Write the test you wish existed before changing this further.",
    "• Keep dependencies minimal and up to date.",
    "• A short docstring now saves a long archaeology session later.",
];

/// Simulated reviewer misfires, used by the flake branch.
const SYNTAX_ERRORS: &[&str] = &[
    "Hmm, I'm seeing what looks like a **syntax error** near the top of your snippet — could you double-check the brackets and resend?",
    "Something in this snippet doesn't parse for me; there may be a stray character or an **unclosed brace**. Mind taking another look?",
    "I stumbled over the syntax here — possibly a missing **semicolon or quote**. Could you clean it up and paste it again?",
    "This one tripped my parser: the structure looks **incomplete**. Check the last few lines and try again?",
];

/// Immutable response tables, built once at engine construction.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    categories: &'static [RuleCategory],
    rule_suggestions: &'static [&'static str],
    generic_openers: &'static [&'static str],
    generic_suggestions: &'static [&'static str],
    syntax_errors: &'static [&'static str],
}

impl RuleTable {
    pub fn builtin() -> Self {
        Self {
            categories: CATEGORIES,
            rule_suggestions: RULE_SUGGESTIONS,
            generic_openers: GENERIC_OPENERS,
            generic_suggestions: GENERIC_SUGGESTIONS,
            syntax_errors: SYNTAX_ERRORS,
        }
    }

    pub fn categories(&self) -> &'static [RuleCategory] {
        self.categories
    }

    pub fn rule_suggestions(&self) -> &'static [&'static str] {
        self.rule_suggestions
    }

    pub fn generic_openers(&self) -> &'static [&'static str] {
        self.generic_openers
    }

    pub fn generic_suggestions(&self) -> &'static [&'static str] {
        self.generic_suggestions
    }

    pub fn syntax_errors(&self) -> &'static [&'static str] {
        self.syntax_errors
    }

    /// Categories with at least one trigger substring present in the
    /// lowercased snippet, in table order.
    pub fn matching_categories(&self, code: &str) -> Vec<&'static RuleCategory> {
        let lowered = code.to_lowercase();
        self.categories
            .iter()
            .filter(|c| c.triggers.iter().any(|t| lowered.contains(t)))
            .collect()
    }
}
