use crate::games::snake::{SnakeCommand, SnakeSettings};
use super::{REPLAY_VERSION, Replay, ReplayAction};

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    settings: SnakeSettings,
    actions: Vec<ReplayAction>,
}

impl ReplayRecorder {
    pub fn new(engine_version: String, seed: u64, settings: SnakeSettings) -> Self {
        let game_started_timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        Self {
            engine_version,
            game_started_timestamp_ms,
            seed,
            settings,
            actions: Vec::new(),
        }
    }

    pub fn record_command(&mut self, tick: u64, command: SnakeCommand) {
        self.actions.push(ReplayAction { tick, command });
    }

    /// Drains the recorded actions. The sort is stable, so commands sharing
    /// a tick keep their arrival order.
    pub fn finalize(&mut self, total_ticks: u64) -> Replay {
        let mut actions = std::mem::take(&mut self.actions);
        actions.sort_by_key(|a| a.tick);

        Replay {
            version: REPLAY_VERSION,
            engine_version: self.engine_version.clone(),
            game_started_timestamp_ms: self.game_started_timestamp_ms,
            seed: self.seed,
            settings: self.settings,
            total_ticks,
            actions,
        }
    }

    pub fn actions_count(&self) -> usize {
        self.actions.len()
    }
}
