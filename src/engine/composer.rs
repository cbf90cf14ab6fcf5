use fastrand::Rng;

use super::rules::{RuleCategory, RuleTable};
use crate::settings::EngineConfig;

/// Composes one review reply. Evaluated fresh per call: no memory across
/// invocations, and the rng is the only non-pure input.
pub fn compose_review(code: &str, rules: &RuleTable, config: &EngineConfig, rng: &mut Rng) -> String {
    if rng.f64() < config.flake_probability {
        return pick(rules.syntax_errors(), rng).to_string();
    }
    let matched = rules.matching_categories(code);
    if matched.is_empty() {
        generic_reply(rules, config, rng)
    } else {
        rule_reply(&matched, rules, config, rng)
    }
}

/// One matched category's response plus 3-5 suggestion lines taken from
/// the rule pool in its fixed order.
pub(crate) fn rule_reply(
    matched: &[&'static RuleCategory],
    rules: &RuleTable,
    config: &EngineConfig,
    rng: &mut Rng,
) -> String {
    let category = matched[uniform_index(rng, matched.len())];
    let response = category.responses[uniform_index(rng, category.responses.len())];
    let count = suggestion_count(config, rng);
    let lines = &rules.rule_suggestions()[..count];
    format!("{}\n\n{}", response, lines.join("\n"))
}

/// Opener plus 3-5 distinct lines from the generic pool. The pool is fully
/// shuffled before truncation so one reply never repeats a bullet.
pub(crate) fn generic_reply(rules: &RuleTable, config: &EngineConfig, rng: &mut Rng) -> String {
    let opener = pick(rules.generic_openers(), rng);
    let count = suggestion_count(config, rng);
    let mut lines: Vec<&str> = rules.generic_suggestions().to_vec();
    rng.shuffle(&mut lines);
    lines.truncate(count);
    format!("{}\n{}", opener, lines.join("\n"))
}

fn suggestion_count(config: &EngineConfig, rng: &mut Rng) -> usize {
    config.suggestion_min + uniform_index(rng, config.suggestion_max - config.suggestion_min + 1)
}

// index = floor(random() * N), clamped to the last slot.
fn uniform_index(rng: &mut Rng, len: usize) -> usize {
    ((rng.f64() * len as f64) as usize).min(len - 1)
}

fn pick<'a>(pool: &[&'a str], rng: &mut Rng) -> &'a str {
    pool[uniform_index(rng, pool.len())]
}
