use std::{fs, path::Path};

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use super::pos::Position;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,

    /// Chance for each cell to start alive, from 0 to 1.
    pub probability: f64,

    /// Fixed RNG seed. A fresh one is drawn from the thread RNG when missing.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            probability: 0.0,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn size(&self) -> Position {
        Position {
            x: self.width,
            y: self.height,
        }
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read board config")?;
        let config: Self =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize board config")?;

        ensure!(
            (0.0..=1.0).contains(&config.probability),
            "Probability {} is outside 0..=1",
            config.probability
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{ "width": 8, "seed": 3 }"#).unwrap();

        assert_eq!(config.size(), Position::new(8, 20));
        assert_eq!(config.probability, 0.0);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn load_rejects_bad_probability() {
        let path = env::temp_dir().join(format!("libgame-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "probability": 1.5 }"#).unwrap();

        let result = BoardConfig::load(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(BoardConfig::load("/definitely/not/here/board.json").is_err());
    }
}
