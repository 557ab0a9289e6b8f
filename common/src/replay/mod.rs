mod file_io;
mod player;
mod recorder;

use serde::{Deserialize, Serialize};

use crate::games::snake::{SnakeCommand, SnakeSettings};

pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_str, save_replay,
    save_replay_to_string,
};
pub use player::ReplayPlayer;
pub use recorder::ReplayRecorder;

pub const REPLAY_FILE_EXTENSION: &str = "snakereplay";
pub const REPLAY_VERSION: u8 = 1;
/// Upper bound on `total_ticks` accepted when loading a replay.
pub const MAX_REPLAY_TICKS: u64 = 10_000_000;

/// Everything needed to re-run a game: the seed, the settings and every
/// command with the tick it was applied at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub version: u8,
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub seed: u64,
    pub settings: SnakeSettings,
    pub total_ticks: u64,
    pub actions: Vec<ReplayAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayAction {
    pub tick: u64,
    pub command: SnakeCommand,
}
