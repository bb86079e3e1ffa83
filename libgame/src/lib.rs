use board::CellGrid;
use config::BoardConfig;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use stats::{GameStats, SimulationStatus};

pub mod board;
pub mod boardsave;
pub mod config;
pub mod pos;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub board: CellGrid,
    pub stats: GameStats,
    pub status: SimulationStatus,
}

impl Game {
    pub fn new(board: CellGrid, stats: GameStats) -> Self {
        Self {
            board,
            stats,
            status: SimulationStatus::default(),
        }
    }

    pub fn generate<R>(config: &BoardConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let (board, stats) = CellGrid::generate(config.size(), config.probability, rng);
        Self::new(board, stats)
    }

    /// Generates from the configured seed, or from the thread RNG if there is none.
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self::generate(config, &mut rng)
    }
}
