use std::{fs, path::Path};

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::{Game, config::BoardConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSave {
    pub config: BoardConfig,
    pub game: Game,
}

impl BoardSave {
    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        let save_data_serialized =
            serde_json::to_string_pretty(&self).context("Couldn't serialize board save")?;

        let path = path.as_ref();
        if let Some(parent_path) = path.parent() {
            fs::create_dir_all(parent_path).context("Couldn't create board save directory")?;
        }

        fs::write(path, save_data_serialized).context("Couldn't write board save")?;

        Ok(())
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let save_serialized = fs::read(path).context("Couldn't read board save")?;
        let save: Self =
            serde_json::from_slice(&save_serialized).context("Couldn't deserialize board save")?;

        let board = &save.game.board;
        let stats = &save.game.stats;
        ensure!(
            stats.cells == board.len(),
            "Board save counts {} cells but the board holds {}",
            stats.cells,
            board.len()
        );

        Ok(save)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn save_then_load_keeps_board() {
        let config = BoardConfig {
            width: 6,
            height: 3,
            probability: 0.5,
            seed: Some(42),
        };
        let game = Game::generate(&config, &mut StdRng::seed_from_u64(42));
        let save = BoardSave { config, game };

        let path = env::temp_dir()
            .join(format!("libgame-save-{}", std::process::id()))
            .join("board.json");
        save.save(&path).unwrap();

        let loaded = BoardSave::load(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded.config, save.config);
        assert_eq!(loaded.game, save.game);
    }

    #[test]
    fn cells_serialize_with_readable_state() {
        let config = BoardConfig {
            width: 1,
            height: 1,
            probability: 1.0,
            seed: None,
        };
        let game = Game::generate(&config, &mut StdRng::seed_from_u64(0));

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["board"]["cells"][0]["state"], "alive");
        assert_eq!(json["stats"]["cells"], 1);
        assert_eq!(json["status"], "ready");
    }

    #[test]
    fn load_rejects_non_rectangular_board() {
        let path = env::temp_dir().join(format!("libgame-bad-save-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{
                "config": { "width": 5, "height": 5 },
                "game": {
                    "board": { "width": 5, "height": 5, "cells": [] },
                    "stats": { "alive": 0, "cells": 25, "steps": 0 },
                    "status": "ready"
                }
            }"#,
        )
        .unwrap();

        let result = BoardSave::load(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_stats_that_disagree_with_board() {
        let config = BoardConfig {
            width: 3,
            height: 3,
            probability: 0.0,
            seed: None,
        };
        let mut game = Game::generate(&config, &mut StdRng::seed_from_u64(1));
        game.stats.cells = 10;

        let path = env::temp_dir().join(format!("libgame-bad-stats-{}.json", std::process::id()));
        BoardSave { config, game }.save(&path).unwrap();

        let result = BoardSave::load(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }
}
