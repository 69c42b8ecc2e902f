use std::{env, str::FromStr};

// Runtime knobs for the Life viewer, read from the environment once at startup.

pub const DEFAULT_ROWS: usize = 100;
pub const DEFAULT_COLUMNS: usize = 100;
pub const DEFAULT_PROBABILITY: f64 = 0.15;
pub const DEFAULT_SEED: u64 = 100;
pub const DEFAULT_GENERATIONS_PER_SECOND: f32 = 12.0;

pub const LIFE_WINDOW_SIZE: i32 = 800;
pub const LIFE_MAX_FPS: u32 = 60;

pub const LIGHTS_OUT_WINDOW_SIZE: i32 = 700;
pub const LIGHTS_OUT_SIDE: usize = 8;
pub const LIGHTS_OUT_MAX_FPS: u32 = 24;

pub const FIREWORKS_WINDOW: (i32, i32) = (1024, 768);
pub const FIREWORKS_MAX_FPS: u32 = 60;
/// Time dilation while the slow-motion key is held
pub const SLOWMO_FACTOR: f32 = 10.0;

pub const APPLESEED_WINDOW: (i32, i32) = (1024, 768);
pub const APPLESEED_MAX_FPS: u32 = 60;

/// Settings for one Life run
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub columns: usize,
    pub probability: f64,
    pub seed: u64,
    pub generations_per_second: f32,
    pub parallel: bool,
    /// Run this many generations without a window, then print the board
    pub headless_generations: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            probability: DEFAULT_PROBABILITY,
            seed: DEFAULT_SEED,
            generations_per_second: DEFAULT_GENERATIONS_PER_SECOND,
            parallel: false,
            headless_generations: None,
        }
    }
}

impl LifeConfig {
    /// Build from `LIFE_*` variables, falling back to defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            rows: parse_var(&lookup, "LIFE_ROWS").unwrap_or(defaults.rows),
            columns: parse_var(&lookup, "LIFE_COLUMNS").unwrap_or(defaults.columns),
            probability: parse_var(&lookup, "LIFE_PROBABILITY")
                .filter(|p: &f64| p.is_finite())
                .unwrap_or(defaults.probability),
            seed: parse_var(&lookup, "LIFE_SEED").unwrap_or(defaults.seed),
            generations_per_second: parse_var(&lookup, "LIFE_GPS")
                .filter(|gps: &f32| gps.is_finite())
                .unwrap_or(defaults.generations_per_second),
            parallel: lookup("LIFE_PARALLEL")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(defaults.parallel),
            headless_generations: parse_var(&lookup, "LIFE_HEADLESS_GENERATIONS"),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> LifeConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        LifeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), LifeConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("LIFE_ROWS", "500"),
            ("LIFE_COLUMNS", " 400 "),
            ("LIFE_PROBABILITY", "0.3"),
            ("LIFE_SEED", "7"),
            ("LIFE_PARALLEL", "true"),
            ("LIFE_HEADLESS_GENERATIONS", "25"),
        ]);
        assert_eq!(config.rows, 500);
        assert_eq!(config.columns, 400);
        assert_eq!(config.probability, 0.3);
        assert_eq!(config.seed, 7);
        assert!(config.parallel);
        assert_eq!(config.headless_generations, Some(25));
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = config_from(&[("LIFE_ROWS", "many"), ("LIFE_GPS", "")]);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.generations_per_second, DEFAULT_GENERATIONS_PER_SECOND);
    }

    #[test]
    fn test_non_finite_numbers_fall_back() {
        let config = config_from(&[("LIFE_GPS", "NaN"), ("LIFE_PROBABILITY", "inf")]);
        assert_eq!(config.generations_per_second, DEFAULT_GENERATIONS_PER_SECOND);
        assert_eq!(config.probability, DEFAULT_PROBABILITY);

        let config = config_from(&[("LIFE_GPS", "-inf")]);
        assert_eq!(config.generations_per_second, DEFAULT_GENERATIONS_PER_SECOND);
    }
}
