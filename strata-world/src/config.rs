use serde::Deserialize;
use std::{fs, path::Path, sync::LazyLock};

const DEFAULT_CONFIG: &str = include_str!("../../package-content/strata_config.json5");

/// Process-wide configuration, loaded on first access.
pub static WORLD_CONFIG: LazyLock<WorldConfig> = LazyLock::new(WorldConfig::load_or_create);

/// World settings read from `strata_config.json5`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Seed text. Blank asks for a random seed, numeric text is the
    /// seed itself, anything else is hashed.
    pub seed: String,
}

impl WorldConfig {
    #[must_use]
    /// # Panics
    /// This function will panic if the config file cannot be read, written or parsed.
    pub fn load_or_create() -> Self {
        let path = Path::new("strata_config.json5");

        if path.exists() {
            let config_str = fs::read_to_string(path).unwrap();
            serde_json5::from_str(&config_str).unwrap()
        } else {
            fs::write(path, DEFAULT_CONFIG).unwrap();
            Self::default()
        }
    }
}
