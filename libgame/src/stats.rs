use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub alive: usize,
    pub cells: usize,

    /// Generations simulated so far. Nothing in this crate advances it.
    pub steps: usize,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    #[default]
    Ready,
    Running,
    Paused,
    Completed,
}
