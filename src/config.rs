//! Runtime configuration
//!
//! Defaults plus a handful of environment overrides. Malformed values are
//! logged and ignored.

use field_simulation::FieldParams;
use scene_composer::SceneParams;
use std::str::FromStr;

pub const DEFAULT_PAGES: f32 = 5.0;
pub const DEFAULT_SCROLL_STEP: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct BackdropConfig {
    /// Fixed seed for the particle layout and point cloud
    pub seed: Option<u64>,
    /// Document height as a multiple of the viewport height
    pub pages: f32,
    /// Pixels scrolled per wheel line
    pub scroll_step: f32,
    pub field: FieldParams,
    pub scene: SceneParams,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pages: DEFAULT_PAGES,
            scroll_step: DEFAULT_SCROLL_STEP,
            field: FieldParams::default(),
            scene: SceneParams::default(),
        }
    }
}

impl BackdropConfig {
    /// Read `BACKDROP_SEED`, `BACKDROP_PAGES` and `BACKDROP_SCROLL_STEP`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse::<u64>(&lookup, "BACKDROP_SEED") {
            config.seed = Some(seed);
            config.scene.seed = Some(seed);
        }
        if let Some(pages) = parse::<f32>(&lookup, "BACKDROP_PAGES") {
            if pages >= 1.0 {
                config.pages = pages;
            } else {
                log::warn!("BACKDROP_PAGES must be at least 1, keeping {}", config.pages);
            }
        }
        if let Some(step) = parse::<f32>(&lookup, "BACKDROP_SCROLL_STEP") {
            if step > 0.0 {
                config.scroll_step = step;
            } else {
                log::warn!("BACKDROP_SCROLL_STEP must be positive, keeping {}", config.scroll_step);
            }
        }

        config
    }

    /// Simulated document height for a viewport.
    pub fn document_height(&self, viewport_height: u32) -> u32 {
        (viewport_height as f32 * self.pages).round() as u32
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> BackdropConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BackdropConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.seed, None);
        assert_eq!(config.pages, 5.0);
        assert_eq!(config.scroll_step, 60.0);
        assert_eq!(config.document_height(800), 4000);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BACKDROP_SEED", "42"),
            ("BACKDROP_PAGES", "2.5"),
            ("BACKDROP_SCROLL_STEP", " 120 "),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scene.seed, Some(42));
        assert_eq!(config.document_height(800), 2000);
        assert_eq!(config.scroll_step, 120.0);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config(&[
            ("BACKDROP_SEED", "abc"),
            ("BACKDROP_PAGES", "0.5"),
            ("BACKDROP_SCROLL_STEP", "-3"),
        ]);
        assert_eq!(config.seed, None);
        assert_eq!(config.pages, 5.0);
        assert_eq!(config.scroll_step, 60.0);
    }
}
