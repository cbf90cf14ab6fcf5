use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Probability of the simulated syntax-error reply, in [0, 1).
    pub flake_probability: f64,
    pub suggestion_min: usize,
    pub suggestion_max: usize,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            flake_probability: 0.25,
            suggestion_min: 3,
            suggestion_max: 5,
            delay_min_ms: 1500,
            delay_max_ms: 3500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigOverrides {
    pub flake_probability: Option<f64>,
    pub delay_min_ms: Option<u64>,
    pub delay_max_ms: Option<u64>,
}

pub fn resolve_config(defaults: &EngineConfig, overrides: &ConfigOverrides) -> EngineConfig {
    EngineConfig {
        flake_probability: overrides
            .flake_probability
            .unwrap_or(defaults.flake_probability),
        suggestion_min: defaults.suggestion_min,
        suggestion_max: defaults.suggestion_max,
        delay_min_ms: overrides.delay_min_ms.unwrap_or(defaults.delay_min_ms),
        delay_max_ms: overrides.delay_max_ms.unwrap_or(defaults.delay_max_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = EngineConfig::default();
        assert_eq!(config.flake_probability, 0.25);
        assert_eq!(config.suggestion_min, 3);
        assert_eq!(config.suggestion_max, 5);
        assert_eq!(config.delay_min_ms, 1500);
        assert_eq!(config.delay_max_ms, 3500);
    }

    #[test]
    fn overrides_take_precedence_over_defaults() {
        let defaults = EngineConfig::default();
        let overrides = ConfigOverrides {
            flake_probability: Some(0.0),
            delay_min_ms: Some(10),
            delay_max_ms: None,
        };

        let eff = resolve_config(&defaults, &overrides);

        assert_eq!(eff.flake_probability, 0.0);
        assert_eq!(eff.delay_min_ms, 10); // from overrides
        assert_eq!(eff.delay_max_ms, 3500); // from defaults
        assert_eq!(eff.suggestion_min, 3);
    }
}
